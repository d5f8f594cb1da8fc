//! Crate-scoped error handling for lexkey.
//!
//! Every fallible operation in the crate returns [`Error`]. Key construction is
//! pure and deterministic, so none of these errors is worth retrying.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type exposed to users of the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A key was requested from zero parts
    #[error("Empty keys are not allowed")]
    EmptyInput,

    /// A value has a shape outside the supported part kinds
    #[error("Unsupported key type: {0}")]
    UnsupportedType(String),

    /// A composite key was built with an absent component
    #[error("Missing key component: {0} cannot be absent")]
    MissingComponent(&'static str),

    /// Hex text could not be decoded into a key
    #[error("Malformed key text: {0}")]
    MalformedText(String),

    /// A text or bytes part contains a reserved byte and the encoder rejects them
    #[error("Part {part_index} contains reserved byte 0x{byte:02x} at offset {offset}")]
    ReservedByte {
        part_index: usize,
        offset: usize,
        byte: u8,
    },

    /// Custom error raised by a `Serialize` implementation
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage-level failure while scanning a table
    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),
}
