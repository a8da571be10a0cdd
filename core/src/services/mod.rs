//! Business services containing domain logic and use cases.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    CancelOutcome, SessionController, SessionControllerConfig, SessionRegistry,
    VerifyProviderTrait, VerifyRequest, WorkflowStep,
};
