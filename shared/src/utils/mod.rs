//! Common utility functions

pub mod phone;

pub use phone::mask_phone;
