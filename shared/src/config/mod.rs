//! Configuration module
//!
//! Every configuration struct exposes `from_env()` for production use and
//! `from_lookup()` which takes any key lookup function, so tests can feed a
//! plain map instead of mutating the process environment.
//!
//! - `environment` - Environment detection and logging configuration
//! - `hook_auth` - Shared-secret authentication of inline hook callers
//! - `server` - HTTP server bind configuration

pub mod environment;
pub mod hook_auth;
pub mod server;

use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{ConfigError, ConfigResult};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use hook_auth::HookAuthConfig;
pub use server::ServerConfig;

/// Lookup backed by the process environment
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Read a variable, treating blank values as unset
pub fn read<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read a required variable
pub fn require<F>(lookup: &F, name: &str) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    read(lookup, name).ok_or_else(|| ConfigError::missing(name))
}

/// Parse a variable, falling back to `default` when unset
pub fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match read(lookup, name) {
        Some(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(name, e.to_string())),
        None => Ok(default),
    }
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`)
pub fn parse_flag<F>(lookup: &F, name: &str, default: bool) -> ConfigResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match read(lookup, name).map(|v| v.to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::invalid(
                name,
                format!("expected a boolean, got '{}'", other),
            )),
        },
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    /// Build a lookup function over fixed key/value pairs
    pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::lookup_from;
    use super::*;

    #[test]
    fn test_blank_values_are_unset() {
        let lookup = lookup_from(&[("A", "   "), ("B", " value ")]);
        assert_eq!(read(&lookup, "A"), None);
        assert_eq!(read(&lookup, "B"), Some("value".to_string()));
        assert_eq!(require(&lookup, "A"), Err(ConfigError::missing("A")));
    }

    #[test]
    fn test_parse_or() {
        let lookup = lookup_from(&[("PORT", "9000"), ("BAD", "nope")]);
        assert_eq!(parse_or(&lookup, "PORT", 8080u16).unwrap(), 9000);
        assert_eq!(parse_or(&lookup, "MISSING", 8080u16).unwrap(), 8080);
        assert!(matches!(
            parse_or(&lookup, "BAD", 1u16),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_flag() {
        let lookup = lookup_from(&[("ON", "Yes"), ("OFF", "0"), ("BAD", "maybe")]);
        assert!(parse_flag(&lookup, "ON", false).unwrap());
        assert!(!parse_flag(&lookup, "OFF", true).unwrap());
        assert!(parse_flag(&lookup, "MISSING", true).unwrap());
        assert!(parse_flag(&lookup, "BAD", false).is_err());
    }
}
