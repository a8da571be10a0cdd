//! Normalized result of starting a verification.

use crate::domain::entities::Channel;
use crate::errors::ProviderError;

/// Error title used when the provider supplies none
pub const DEFAULT_ERROR_SUMMARY: &str = "VerifyError";

/// Error code used when the provider supplies none
pub const DEFAULT_ERROR_CODE: &str = "VERIFY_ERROR";

/// Error detail used when the provider supplies none
pub const DEFAULT_ERROR_REASON: &str = "Failed to start verification";

/// Outcome of a verification start, independent of provider error detail
///
/// A `Failure` always has every field populated; provider values that are
/// absent or blank are replaced by the `DEFAULT_ERROR_*` constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedOutcome {
    Success {
        method: Channel,
        transaction_id: Option<String>,
    },
    Failure {
        method: Channel,
        error_summary: String,
        error_code: String,
        reason: String,
    },
}

impl NormalizedOutcome {
    pub fn success(method: Channel, transaction_id: Option<String>) -> Self {
        NormalizedOutcome::Success {
            method,
            transaction_id,
        }
    }

    /// Build a failure, substituting defaults for blank parts
    pub fn failure(
        method: Channel,
        error_summary: Option<&str>,
        error_code: Option<&str>,
        reason: Option<&str>,
    ) -> Self {
        NormalizedOutcome::Failure {
            method,
            error_summary: or_default(error_summary, DEFAULT_ERROR_SUMMARY),
            error_code: or_default(error_code, DEFAULT_ERROR_CODE),
            reason: or_default(reason, DEFAULT_ERROR_REASON),
        }
    }

    /// Classify a provider error into a failure outcome
    pub fn from_provider_error(method: Channel, error: &ProviderError) -> Self {
        Self::failure(
            method,
            error.title.as_deref(),
            error.code.as_deref(),
            error.detail.as_deref(),
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, NormalizedOutcome::Success { .. })
    }

    pub fn method(&self) -> &Channel {
        match self {
            NormalizedOutcome::Success { method, .. } | NormalizedOutcome::Failure { method, .. } => {
                method
            }
        }
    }
}

/// Replace a missing or blank value with `default`
pub(crate) fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}
