//! Value objects representing immutable domain concepts.

pub mod hook_response;
pub mod outcome;

// Re-export commonly used types
pub use hook_response::{
    CommandsEnvelope, ErrorCause, ErrorEnvelope, HookCommand, HookError, HookResponse,
    TelephonyAction, ACTION_STATUS_SUCCESSFUL, PROVIDER_NAME, TELEPHONY_ACTION_TYPE,
};
pub use outcome::{
    NormalizedOutcome, DEFAULT_ERROR_CODE, DEFAULT_ERROR_REASON, DEFAULT_ERROR_SUMMARY,
};
