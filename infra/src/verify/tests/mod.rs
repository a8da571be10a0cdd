//! Unit tests for the verification provider module
