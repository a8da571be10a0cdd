//! Verification attempt entity and its delivery channel.

use serde::{Serialize, Serializer};
use std::fmt;

/// Channel used when the inbound request does not name one
pub const DEFAULT_CHANNEL: &str = "sms";

/// Delivery mode for a one-time passcode
///
/// Input is case-insensitive. Values other than `sms` and `voice` are kept
/// (lowercased) in [`Channel::Other`] and forwarded unchanged; rejecting them
/// is left to the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Channel {
    #[default]
    Sms,
    Voice,
    Other(String),
}

impl Channel {
    /// Parse a raw channel value, defaulting to SMS when absent or blank
    ///
    /// Surrounding whitespace is trimmed before lowercasing, so `" Voice "`
    /// parses as [`Channel::Voice`] and `" WhatsApp "` as `Other("whatsapp")`.
    pub fn parse(raw: Option<&str>) -> Self {
        let normalized = raw
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_CHANNEL.to_string());

        match normalized.as_str() {
            "sms" => Channel::Sms,
            "voice" => Channel::Voice,
            _ => Channel::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Channel::Sms => "sms",
            Channel::Voice => "voice",
            Channel::Other(value) => value,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Channel {
    fn from(raw: &str) -> Self {
        Channel::parse(Some(raw))
    }
}

impl From<Option<&str>> for Channel {
    fn from(raw: Option<&str>) -> Self {
        Channel::parse(raw)
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One verification request accepted by the provider
///
/// An attempt is superseded, never completed: the bridge has no way to learn
/// whether the passcode was entered, so the only lifecycle event after
/// creation is replacement by a newer attempt for the same destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationAttempt {
    /// E.164 phone number, kept verbatim
    pub destination: String,

    pub channel: Channel,

    /// Identifier assigned by the provider; absent if the response carried none
    pub provider_request_id: Option<String>,
}

impl VerificationAttempt {
    pub fn new(
        destination: impl Into<String>,
        channel: Channel,
        provider_request_id: Option<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            channel,
            provider_request_id,
        }
    }
}
