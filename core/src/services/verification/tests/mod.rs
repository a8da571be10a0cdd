mod mocks;
mod registry_tests;
