//! Order-preserving byte keys for ordered key-value stores.
//!
//! Typed values are encoded so that comparing the encoded bytes lexicographically
//! gives the same result as comparing the values themselves. Multi-part keys are
//! joined with [`SEPARATOR`], and [`END_MARKER`] closes range scans.
//!
//! ```
//! use lexkey::{lexkey, LexKey, PrimaryKey, RangeKey};
//!
//! let low = lexkey!("foo", 41i64, true).unwrap();
//! let high = lexkey!("foo", 42i64, true).unwrap();
//! assert!(low < high);
//!
//! let pk = PrimaryKey::new(Some(LexKey::from("part")), Some(LexKey::from("row"))).unwrap();
//! assert_eq!(pk.encode().as_bytes(), b"part\x00row");
//!
//! let (lower, upper) = RangeKey::prefix(LexKey::from("part")).encode(true);
//! assert_eq!(lower.as_bytes(), b"part\x00");
//! assert_eq!(upper.as_bytes(), b"part\xff");
//! ```

pub mod composite;
pub mod config;
pub mod encoding;
pub mod error;
pub mod key;
pub mod ser;
pub mod table;

// Re-export common types for convenience
pub use composite::{PrimaryKey, RangeKey};
pub use config::{EncoderConfig, ReservedBytePolicy};
pub use encoding::Part;
pub use error::{Error, Result};
pub use key::{KeyEncoder, LexKey};
pub use ser::{to_key, to_parts};
pub use table::LexKeyRangeExt;

/// Byte placed between consecutive parts of a key.
pub const SEPARATOR: u8 = 0x00;

/// Byte that sorts after every part encoding and separator.
pub const END_MARKER: u8 = 0xFF;
