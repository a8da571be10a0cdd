//! Shared utilities and common types for the telephony hook bridge
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - Configuration error type
//! - Utility functions (phone masking for logs)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, HookAuthConfig, LogFormat, LoggingConfig, ServerConfig};
pub use errors::{ConfigError, ConfigResult};
pub use utils::phone;
