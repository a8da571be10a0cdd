//! Inline hook caller authentication configuration
//!
//! The identity provider sends a shared secret in a configurable request
//! header with every hook call. When no secret is configured the check is
//! disabled, which is only accepted outside production.

use super::{read, Environment};
use crate::errors::{ConfigError, ConfigResult};

/// Default header carrying the shared secret
pub const DEFAULT_AUTH_HEADER: &str = "authorization";

#[derive(Clone, PartialEq, Eq)]
pub struct HookAuthConfig {
    /// Header name, stored lowercase
    pub header_name: String,
    /// Expected header value
    pub secret: Option<String>,
}

impl std::fmt::Debug for HookAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookAuthConfig")
            .field("header_name", &self.header_name)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for HookAuthConfig {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_AUTH_HEADER.to_string(),
            secret: None,
        }
    }
}

impl HookAuthConfig {
    pub fn new(header_name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into().to_ascii_lowercase(),
            secret: Some(secret.into()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    pub fn from_env(env: Environment) -> ConfigResult<Self> {
        Self::from_lookup(&super::env_lookup, env)
    }

    /// Load from `HOOK_AUTH_HEADER` and `HOOK_AUTH_SECRET`
    pub fn from_lookup<F>(lookup: &F, env: Environment) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let header_name = read(lookup, "HOOK_AUTH_HEADER")
            .unwrap_or_else(|| DEFAULT_AUTH_HEADER.to_string())
            .to_ascii_lowercase();
        let secret = read(lookup, "HOOK_AUTH_SECRET");

        if secret.is_none() && env.is_production() {
            return Err(ConfigError::missing("HOOK_AUTH_SECRET"));
        }

        Ok(Self {
            header_name,
            secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::lookup_from;

    #[test]
    fn test_secret_required_in_production() {
        let result = HookAuthConfig::from_lookup(&lookup_from(&[]), Environment::Production);
        assert_eq!(result, Err(ConfigError::missing("HOOK_AUTH_SECRET")));

        let config =
            HookAuthConfig::from_lookup(&lookup_from(&[]), Environment::Development).unwrap();
        assert!(!config.is_enabled());
        assert_eq!(config.header_name, DEFAULT_AUTH_HEADER);
    }

    #[test]
    fn test_header_name_is_lowercased() {
        let lookup = lookup_from(&[("HOOK_AUTH_HEADER", "X-Okta-Secret"), ("HOOK_AUTH_SECRET", "s3cret")]);
        let config = HookAuthConfig::from_lookup(&lookup, Environment::Production).unwrap();
        assert_eq!(config.header_name, "x-okta-secret");
        assert_eq!(config.secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = HookAuthConfig::new("authorization", "s3cret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
