//! # Telephony Hook Bridge Core
//!
//! Domain layer of the bridge between the identity provider's telephony
//! inline hook and the upstream verification provider. It contains the
//! verification session controller, the session registry, the provider
//! trait consumed by the controller, and the mapping of normalized outcomes
//! into hook response envelopes.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
