//! Verification Provider Module
//!
//! Implementations of [`VerifyProviderTrait`] used by the session controller.
//!
//! ## Features
//!
//! - **Vonage Verify v2**: production provider (feature `vonage`)
//! - **Mock Implementation**: logs requests for development
//! - **Problem details**: provider errors parsed into `ProviderError`

use std::sync::Arc;

use vth_core::services::verification::VerifyProviderTrait;

use crate::config::{ProviderKind, VerifyProviderConfig};
use crate::InfrastructureError;

pub mod mock_verify;

#[cfg(feature = "vonage")]
pub mod vonage;

pub use mock_verify::MockVerifyProvider;

#[cfg(feature = "vonage")]
pub use vonage::{VonageConfig, VonageCredentials, VonageVerifyClient};

#[cfg(test)]
mod tests;

/// Create the verification provider selected by configuration
///
/// There is no fallback to the mock: a Vonage selection without usable
/// Vonage settings is an error.
pub fn create_verify_provider(
    config: &VerifyProviderConfig,
) -> Result<Arc<dyn VerifyProviderTrait>, InfrastructureError> {
    match config.kind {
        ProviderKind::Mock => {
            tracing::warn!("Using mock verification provider, no OTPs will be delivered");
            Ok(Arc::new(MockVerifyProvider::new()))
        }
        #[cfg(feature = "vonage")]
        ProviderKind::Vonage => {
            let vonage = config.vonage.clone().ok_or_else(|| {
                InfrastructureError::Config(vth_shared::ConfigError::missing(
                    "VONAGE_APPLICATION_ID or VONAGE_API_KEY",
                ))
            })?;
            Ok(Arc::new(VonageVerifyClient::new(vonage)?))
        }
        #[cfg(not(feature = "vonage"))]
        ProviderKind::Vonage => Err(InfrastructureError::Config(
            vth_shared::ConfigError::invalid("VERIFY_PROVIDER", "vonage support is not compiled in"),
        )),
    }
}
