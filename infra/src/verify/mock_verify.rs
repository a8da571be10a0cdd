//! Mock Verify Provider
//!
//! Logs verification requests instead of contacting a provider. Used when
//! `VERIFY_PROVIDER=mock`, typically in development.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use vth_core::errors::{ProviderError, ProviderResult};
use vth_core::services::verification::{VerifyProviderTrait, VerifyRequest};
use vth_shared::utils::mask_phone;

/// Mock verification provider
///
/// - Generates `mock_<uuid>` request ids
/// - Counts started and cancelled verifications
/// - Optionally fails every call
#[derive(Clone, Default)]
pub struct MockVerifyProvider {
    started: Arc<AtomicU64>,
    cancelled: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
}

impl MockVerifyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of verifications started
    pub fn started_count(&self) -> u64 {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of verifications cancelled
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    fn simulated_error(&self) -> Option<ProviderError> {
        self.simulate_failure.load(Ordering::SeqCst).then(|| {
            ProviderError::new()
                .with_title("MockFailure")
                .with_code("MOCK_FAILURE")
                .with_detail("Simulated provider failure")
                .with_status(503)
        })
    }
}

#[async_trait]
impl VerifyProviderTrait for MockVerifyProvider {
    async fn create(&self, request: &VerifyRequest) -> ProviderResult<Value> {
        let (phone, channel) = request
            .workflow
            .first()
            .map(|step| (mask_phone(&step.to), step.channel.to_string()))
            .unwrap_or_default();

        if let Some(error) = self.simulated_error() {
            warn!(phone = %phone, "Mock provider simulating verification failure");
            return Err(error);
        }

        let request_id = format!("mock_{}", Uuid::new_v4());
        let count = self.started.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "verify_provider",
            provider = "mock",
            phone = %phone,
            channel = %channel,
            brand = %request.brand,
            request_id = %request_id,
            count,
            "Verification started (mock)"
        );

        Ok(json!({ "request_id": request_id }))
    }

    async fn cancel(&self, request_id: &str) -> ProviderResult<()> {
        if let Some(error) = self.simulated_error() {
            warn!(request_id = %request_id, "Mock provider simulating cancel failure");
            return Err(error);
        }

        self.cancelled.fetch_add(1, Ordering::SeqCst);
        info!(
            target: "verify_provider",
            provider = "mock",
            request_id = %request_id,
            "Verification cancelled (mock)"
        );
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "Mock"
    }
}
