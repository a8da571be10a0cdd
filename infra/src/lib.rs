//! # Infrastructure Layer
//!
//! Concrete implementations of the verification provider consumed by the
//! session controller in `vth_core`.
//!
//! ## Providers
//!
//! - **Vonage**: Verify v2 REST API over reqwest (feature `vonage`, default)
//! - **Mock**: logs requests and returns generated ids, for development

// Re-export core types for convenience
pub use vth_core::errors::*;

use vth_shared::ConfigError;

/// Verification provider module - external verification APIs
pub mod verify;

/// Configuration module for infrastructure services
pub mod config {
    //! Provider selection and credentials
    //!
    //! Handles:
    //! - Which verification provider to use
    //! - The brand sent with every verification
    //! - Provider credentials

    use vth_shared::config::{env_lookup, read, require};
    use vth_shared::{ConfigError, ConfigResult};

    #[cfg(feature = "vonage")]
    pub use crate::verify::vonage::{VonageConfig, VonageCredentials};

    /// Brand used by the mock provider when none is configured
    pub const DEFAULT_MOCK_BRAND: &str = "Development";

    /// Verification provider implementation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ProviderKind {
        Vonage,
        Mock,
    }

    impl std::str::FromStr for ProviderKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_lowercase().as_str() {
                "vonage" => Ok(ProviderKind::Vonage),
                "mock" => Ok(ProviderKind::Mock),
                _ => Err(format!("Unknown verification provider: {}", s)),
            }
        }
    }

    /// Verification provider configuration
    #[derive(Debug, Clone)]
    pub struct VerifyProviderConfig {
        /// Selected provider
        pub kind: ProviderKind,
        /// Brand sent with every verification request
        pub brand: String,
        /// Vonage settings, present when `kind` is Vonage
        #[cfg(feature = "vonage")]
        pub vonage: Option<VonageConfig>,
    }

    impl VerifyProviderConfig {
        /// Mock provider configuration
        pub fn mock(brand: impl Into<String>) -> Self {
            Self {
                kind: ProviderKind::Mock,
                brand: brand.into(),
                #[cfg(feature = "vonage")]
                vonage: None,
            }
        }

        pub fn from_env() -> ConfigResult<Self> {
            Self::from_lookup(&env_lookup)
        }

        /// Load from `VERIFY_PROVIDER`, `VONAGE_BRAND` and the provider settings
        pub fn from_lookup<F>(lookup: &F) -> ConfigResult<Self>
        where
            F: Fn(&str) -> Option<String>,
        {
            let kind = match read(lookup, "VERIFY_PROVIDER") {
                Some(raw) => raw
                    .parse()
                    .map_err(|e: String| ConfigError::invalid("VERIFY_PROVIDER", e))?,
                None => ProviderKind::Vonage,
            };

            match kind {
                ProviderKind::Mock => Ok(Self::mock(
                    read(lookup, "VONAGE_BRAND").unwrap_or_else(|| DEFAULT_MOCK_BRAND.to_string()),
                )),
                #[cfg(feature = "vonage")]
                ProviderKind::Vonage => Ok(Self {
                    kind,
                    brand: require(lookup, "VONAGE_BRAND")?,
                    vonage: Some(VonageConfig::from_lookup(lookup)?),
                }),
                #[cfg(not(feature = "vonage"))]
                ProviderKind::Vonage => {
                    let _ = require(lookup, "VONAGE_BRAND")?;
                    Err(ConfigError::invalid(
                        "VERIFY_PROVIDER",
                        "vonage support is not compiled in",
                    ))
                }
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider credential error (e.g. unreadable private key)
    #[error("Credential error: {0}")]
    Credentials(#[from] jsonwebtoken::errors::Error),
}

#[cfg(test)]
mod tests {
    use super::config::{ProviderKind, VerifyProviderConfig, DEFAULT_MOCK_BRAND};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_mock_provider_config() {
        let config = VerifyProviderConfig::from_lookup(&lookup(&[("VERIFY_PROVIDER", "MOCK")])).unwrap();
        assert_eq!(config.kind, ProviderKind::Mock);
        assert_eq!(config.brand, DEFAULT_MOCK_BRAND);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result = VerifyProviderConfig::from_lookup(&lookup(&[("VERIFY_PROVIDER", "twilio")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_vonage_requires_brand() {
        let result = VerifyProviderConfig::from_lookup(&lookup(&[
            ("VONAGE_API_KEY", "key"),
            ("VONAGE_API_SECRET", "secret"),
        ]));
        assert_eq!(
            result.unwrap_err(),
            vth_shared::ConfigError::missing("VONAGE_BRAND")
        );
    }

    #[cfg(feature = "vonage")]
    #[test]
    fn test_vonage_is_default_provider() {
        let config = VerifyProviderConfig::from_lookup(&lookup(&[
            ("VONAGE_BRAND", "Acme"),
            ("VONAGE_API_KEY", "key"),
            ("VONAGE_API_SECRET", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.kind, ProviderKind::Vonage);
        assert_eq!(config.brand, "Acme");
        assert!(config.vonage.is_some());
    }
}
