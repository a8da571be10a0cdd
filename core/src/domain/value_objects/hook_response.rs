//! Telephony inline hook response envelopes.
//!
//! The identity provider accepts exactly two body shapes from a telephony
//! hook: a command list reporting a successful hand-off to the provider, or
//! an error object with a list of causes.
//!
//! ```json
//! { "commands": [ { "type": "com.okta.telephony.action",
//!                   "value": [ { "status": "SUCCESSFUL", "provider": "VONAGE",
//!                                "transactionId": "..." } ] } ] }
//!
//! { "error": { "errorSummary": "...",
//!              "errorCauses": [ { "errorSummary": "...", "reason": "..." } ] } }
//! ```

use serde::{Deserialize, Serialize};

use super::outcome::{
    or_default, NormalizedOutcome, DEFAULT_ERROR_CODE, DEFAULT_ERROR_REASON,
    DEFAULT_ERROR_SUMMARY,
};

/// Command type for telephony actions
pub const TELEPHONY_ACTION_TYPE: &str = "com.okta.telephony.action";

/// Status reported for an accepted verification
pub const ACTION_STATUS_SUCCESSFUL: &str = "SUCCESSFUL";

/// Provider name reported in every success action
pub const PROVIDER_NAME: &str = "VONAGE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HookResponse {
    Commands(CommandsEnvelope),
    Error(ErrorEnvelope),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsEnvelope {
    pub commands: Vec<HookCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookCommand {
    #[serde(rename = "type")]
    pub command_type: String,
    pub value: Vec<TelephonyAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelephonyAction {
    pub status: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: HookError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookError {
    pub error_summary: String,
    pub error_causes: Vec<ErrorCause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCause {
    pub error_summary: String,
    pub reason: String,
}

impl HookResponse {
    /// Success envelope for an accepted verification
    pub fn successful(transaction_id: Option<String>) -> Self {
        HookResponse::Commands(CommandsEnvelope {
            commands: vec![HookCommand {
                command_type: TELEPHONY_ACTION_TYPE.to_string(),
                value: vec![TelephonyAction {
                    status: ACTION_STATUS_SUCCESSFUL.to_string(),
                    provider: PROVIDER_NAME.to_string(),
                    transaction_id,
                }],
            }],
        })
    }

    /// Error envelope; blank parts are replaced by defaults
    pub fn error(summary: &str, code: &str, reason: &str) -> Self {
        HookResponse::Error(ErrorEnvelope {
            error: HookError {
                error_summary: or_default(Some(summary), DEFAULT_ERROR_SUMMARY),
                error_causes: vec![ErrorCause {
                    error_summary: or_default(Some(code), DEFAULT_ERROR_CODE),
                    reason: or_default(Some(reason), DEFAULT_ERROR_REASON),
                }],
            },
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, HookResponse::Commands(_))
    }
}

impl From<NormalizedOutcome> for HookResponse {
    fn from(outcome: NormalizedOutcome) -> Self {
        match outcome {
            NormalizedOutcome::Success { transaction_id, .. } => {
                HookResponse::successful(transaction_id)
            }
            NormalizedOutcome::Failure {
                error_summary,
                error_code,
                reason,
                ..
            } => HookResponse::error(&error_summary, &error_code, &reason),
        }
    }
}

impl From<&NormalizedOutcome> for HookResponse {
    fn from(outcome: &NormalizedOutcome) -> Self {
        HookResponse::from(outcome.clone())
    }
}
