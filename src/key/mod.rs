//! Flat keys built from sequences of parts.
//!
//! A key is the concatenation of its encoded parts with one [`SEPARATOR`]
//! between consecutive parts:
//!
//! ```text
//! [part 0][0x00][part 1][0x00]...[part n-1]
//! ```
//!
//! Keys compare with plain byte-wise lexicographic order.

use crate::config::EncoderConfig;
use crate::encoding::{encode_part_into, encoded_len, Part};
use crate::error::{Error, Result};
use crate::{END_MARKER, SEPARATOR};
use std::borrow::Borrow;
use std::ops::Deref;
use tracing::debug;

pub mod text;

/// An encoded key.
///
/// A zero-length key is valid and distinct from an absent one; absence is
/// modelled with `Option<LexKey>` where it matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LexKey(Vec<u8>);

impl LexKey {
    /// Builds a key from one or more parts.
    ///
    /// Text and byte parts are emitted verbatim; callers must keep them free of
    /// `0x00` and `0xFF` for multi-part ordering to hold (see
    /// [`crate::ReservedBytePolicy`]).
    ///
    /// # Errors
    /// [`Error::EmptyInput`] if `parts` is empty.
    pub fn new(parts: &[Part<'_>]) -> Result<Self> {
        KeyEncoder::default().encode(parts)
    }

    /// Builds the key plus a trailing separator: the first key of the range
    /// of keys extending these parts.
    pub fn encode_first(parts: &[Part<'_>]) -> Result<Self> {
        KeyEncoder::default().encode_first(parts)
    }

    /// Builds the key plus a trailing end marker: an exclusive ceiling over
    /// every key extending these parts.
    pub fn encode_last(parts: &[Part<'_>]) -> Result<Self> {
        KeyEncoder::default().encode_last(parts)
    }

    /// Wraps already-encoded bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns an empty key.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for a zero-length key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this key with one byte appended.
    pub(crate) fn with_suffix(&self, byte: u8) -> Self {
        let mut buf = Vec::with_capacity(self.0.len() + 1);
        buf.extend_from_slice(&self.0);
        buf.push(byte);
        Self(buf)
    }
}

impl Deref for LexKey {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for LexKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for LexKey {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for LexKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for LexKey {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

/// Raw UTF-8 bytes of `value`, without any encoding step.
impl From<&str> for LexKey {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<LexKey> for Vec<u8> {
    fn from(value: LexKey) -> Self {
        value.0
    }
}

/// Key builder carrying an [`EncoderConfig`].
///
/// The free constructors on [`LexKey`] use the default configuration.
#[derive(Debug, Clone, Default)]
pub struct KeyEncoder {
    config: EncoderConfig,
}

impl KeyEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes `parts` into a key, separating consecutive parts with
    /// [`SEPARATOR`].
    ///
    /// # Errors
    /// - [`Error::EmptyInput`] if `parts` is empty
    /// - [`Error::ReservedByte`] if the configuration rejects a part
    pub fn encode(&self, parts: &[Part<'_>]) -> Result<LexKey> {
        self.build(parts, None)
    }

    /// Like [`KeyEncoder::encode`] with a trailing [`SEPARATOR`].
    pub fn encode_first(&self, parts: &[Part<'_>]) -> Result<LexKey> {
        self.build(parts, Some(SEPARATOR))
    }

    /// Like [`KeyEncoder::encode`] with a trailing [`END_MARKER`].
    pub fn encode_last(&self, parts: &[Part<'_>]) -> Result<LexKey> {
        self.build(parts, Some(END_MARKER))
    }

    fn build(&self, parts: &[Part<'_>], suffix: Option<u8>) -> Result<LexKey> {
        if parts.is_empty() {
            debug!("rejecting key with zero parts");
            return Err(Error::EmptyInput);
        }

        for (part_index, part) in parts.iter().enumerate() {
            let Some(payload) = part.raw_payload() else {
                continue;
            };
            if let Some((offset, byte)) = self.config.reserved_bytes.violation(payload) {
                debug!(
                    part_index,
                    kind = part.kind(),
                    offset,
                    byte,
                    "rejecting part with reserved byte"
                );
                return Err(Error::ReservedByte {
                    part_index,
                    offset,
                    byte,
                });
            }
        }

        let capacity = parts.iter().map(encoded_len).sum::<usize>()
            + (parts.len() - 1)
            + usize::from(suffix.is_some());
        let mut buf = Vec::with_capacity(capacity);

        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                buf.push(SEPARATOR);
            }
            encode_part_into(part, &mut buf);
        }
        if let Some(byte) = suffix {
            buf.push(byte);
        }

        Ok(LexKey(buf))
    }
}

/// Builds a [`LexKey`] from a list of values convertible into [`Part`].
///
/// ```
/// use lexkey::lexkey;
///
/// let key = lexkey!("foo", 42i64, true).unwrap();
/// assert_eq!(key.to_hex(), "666f6f00800000000000002a0001");
/// ```
#[macro_export]
macro_rules! lexkey {
    ($($part:expr),* $(,)?) => {
        $crate::LexKey::new(&[$($crate::Part::from($part)),*])
    };
}
