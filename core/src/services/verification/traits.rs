//! Trait for verification provider integration

use async_trait::async_trait;

use crate::errors::ProviderResult;

use super::types::VerifyRequest;

/// Remote verification provider consumed by the session controller
///
/// The provider generates and delivers the passcode itself; implementations
/// never receive or send an OTP code.
#[async_trait]
pub trait VerifyProviderTrait: Send + Sync {
    /// Start a new verification, returning the raw provider response body
    async fn create(&self, request: &VerifyRequest) -> ProviderResult<serde_json::Value>;
    /// Cancel an in-flight verification
    async fn cancel(&self, request_id: &str) -> ProviderResult<()>;
    /// Provider name for logs
    fn provider_name(&self) -> &'static str;
}
