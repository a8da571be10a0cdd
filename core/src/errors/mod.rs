//! Errors raised by verification providers.

use thiserror::Error;

/// Structured failure reported by a verification provider client
///
/// Every field is optional because providers differ in how much detail they
/// return; a transport failure usually carries nothing but a detail message.
/// Consumers must substitute defaults for absent fields.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error(
    "{}",
    render(.status.as_ref(), .title.as_deref(), .code.as_deref(), .detail.as_deref())
)]
pub struct ProviderError {
    /// Human-readable title (e.g. "Invalid Destination")
    pub title: Option<String>,
    /// Short machine token identifying the failure
    pub code: Option<String>,
    /// Detail message
    pub detail: Option<String>,
    /// HTTP status, when the failure came from a provider response
    pub status: Option<u16>,
}

impl ProviderError {
    /// Create an empty error with no structured detail
    pub fn new() -> Self {
        Self::default()
    }

    /// Failure before any provider response was received
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::new().with_detail(detail)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Message listing only the fields that are present
fn render(
    status: Option<&u16>,
    title: Option<&str>,
    code: Option<&str>,
    detail: Option<&str>,
) -> String {
    let mut message = String::from("Provider error");
    if let Some(status) = status {
        message.push_str(&format!(" ({})", status));
    }
    if let Some(title) = title {
        message.push_str(&format!(": {}", title));
    }
    if let Some(code) = code {
        message.push_str(&format!(" [{}]", code));
    }
    if let Some(detail) = detail {
        message.push_str(&format!(" - {}", detail));
    }
    message
}

pub type ProviderResult<T> = Result<T, ProviderError>;
