//! Configuration for key encoders.
//!
//! The separator and end-marker bytes are fixed constants and are not part of
//! the configuration. What can be configured is how strictly text and byte
//! parts are checked before being emitted.

use crate::{END_MARKER, SEPARATOR};

/// How an encoder treats reserved bytes inside text and byte parts.
///
/// Text and byte parts are emitted verbatim. A part containing [`SEPARATOR`]
/// or [`END_MARKER`] can make a multi-part key sort inside a neighbouring
/// key's range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReservedBytePolicy {
    /// Emit parts verbatim; callers guarantee parts are free of reserved bytes
    #[default]
    Allow,

    /// Fail with [`crate::Error::ReservedByte`] when a part contains one
    Reject,
}

impl ReservedBytePolicy {
    /// Returns the offset and value of the first reserved byte in `payload`
    /// that this policy refuses.
    pub(crate) fn violation(&self, payload: &[u8]) -> Option<(usize, u8)> {
        match self {
            ReservedBytePolicy::Allow => None,
            ReservedBytePolicy::Reject => payload
                .iter()
                .position(|&b| b == SEPARATOR || b == END_MARKER)
                .map(|offset| (offset, payload[offset])),
        }
    }
}

/// Configuration for [`crate::KeyEncoder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Treatment of reserved bytes in text and byte parts
    pub reserved_bytes: ReservedBytePolicy,
}

impl EncoderConfig {
    /// Creates a configuration with the given reserved-byte policy.
    pub fn new(reserved_bytes: ReservedBytePolicy) -> Self {
        Self { reserved_bytes }
    }

    /// Configuration that refuses reserved bytes in text and byte parts.
    pub fn strict() -> Self {
        Self::new(ReservedBytePolicy::Reject)
    }
}
