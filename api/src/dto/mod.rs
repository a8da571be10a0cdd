pub mod telephony;

pub use telephony::*;
