//! Two-level keys: a partition component grouping rows, and a row component.
//!
//! Both layouts reuse the flat-key separator convention:
//!
//! ```text
//! Primary key:  [partition][0x00][row]
//! Lower bound:  [partition][0x00][start row]     or [partition][0x00]
//! Upper bound:  [partition][0x00][end row][0xFF] or [partition][0xFF]
//! ```
//!
//! The partition component can be left out of range bounds when a table holds
//! a single partition and stores only row components.

pub mod primary;
pub mod range;

// Re-export main types for public API
pub use primary::PrimaryKey;
pub use range::RangeKey;
