//! Configuration for the session controller

/// Configuration for the session controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionControllerConfig {
    /// Brand name sent with every verification request
    pub brand: String,
    /// Serialize the cancel-then-create sequence per destination
    ///
    /// Off by default: concurrent requests for one destination may both
    /// cancel the same prior attempt and both create a new one, leaving the
    /// provider's own concurrency guard to reject the loser.
    pub exclusive_per_destination: bool,
}

impl SessionControllerConfig {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            exclusive_per_destination: false,
        }
    }

    pub fn with_exclusive_per_destination(mut self, enabled: bool) -> Self {
        self.exclusive_per_destination = enabled;
        self
    }
}
