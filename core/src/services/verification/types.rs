//! Types exchanged with the verification provider

use serde::Serialize;

use crate::domain::entities::Channel;
use crate::errors::ProviderError;

/// Request to start a verification
///
/// Carries no code field; the passcode is always generated by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyRequest {
    pub brand: String,
    pub workflow: Vec<WorkflowStep>,
}

/// One delivery step of a verification workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowStep {
    pub channel: Channel,
    pub to: String,
}

impl VerifyRequest {
    /// Single-step request delivering over `channel` to `destination`
    pub fn single(brand: impl Into<String>, channel: Channel, destination: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            workflow: vec![WorkflowStep {
                channel,
                to: destination.into(),
            }],
        }
    }
}

/// Result of the best-effort cancellation of a prior attempt
///
/// Every variant leads to the same next step: creating a new attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The destination had no tracked attempt
    NothingToCancel,
    /// The provider accepted the cancellation
    Cancelled { request_id: String },
    /// The provider rejected or failed the cancellation
    Failed {
        request_id: String,
        error: ProviderError,
    },
}

impl CancelOutcome {
    /// Identifier of the attempt a cancellation was tried for
    pub fn request_id(&self) -> Option<&str> {
        match self {
            CancelOutcome::NothingToCancel => None,
            CancelOutcome::Cancelled { request_id } | CancelOutcome::Failed { request_id, .. } => {
                Some(request_id)
            }
        }
    }
}
