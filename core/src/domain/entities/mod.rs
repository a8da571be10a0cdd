//! Domain entities representing core business objects.

pub mod verification_attempt;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use verification_attempt::{Channel, VerificationAttempt};
