//! Route handlers
//!
//! - Telephony inline hook
//! - Health check

pub mod health;
pub mod telephony;

pub use telephony::AppState;
