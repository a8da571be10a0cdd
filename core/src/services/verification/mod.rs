//! Verification session module
//!
//! This module starts OTP verifications against an upstream provider:
//! - Session registry tracking the latest provider request per destination
//! - Cancel-then-create sequence so a destination has one live verification
//! - Extraction of the provider request id from varying response shapes
//! - Classification of provider failures into normalized outcomes

mod config;
mod registry;
mod response;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::SessionControllerConfig;
pub use registry::SessionRegistry;
pub use response::{extract_request_id, RequestIdRule, REQUEST_ID_RULES};
pub use service::SessionController;
pub use traits::VerifyProviderTrait;
pub use types::{CancelOutcome, VerifyRequest, WorkflowStep};
