pub mod hook_auth;

pub use hook_auth::*;
