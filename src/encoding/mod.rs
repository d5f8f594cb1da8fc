//! Scalar encoding for key parts.
//!
//! This module maps individual typed values to order-preserving bytes. Joining
//! parts into full keys happens in [`crate::key`].

pub mod part;
pub mod scalar;

// Re-export main types for public API
pub use part::Part;
pub use scalar::{encode_part, encode_part_into, encoded_len};
