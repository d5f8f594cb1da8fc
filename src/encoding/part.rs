//! Typed key parts.
//!
//! A [`Part`] is one input value of a key. The set of variants is closed: every
//! kind the encoder understands has exactly one variant, so dispatch over parts
//! is exhaustively checked by the compiler.

use std::borrow::Cow;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// One typed value that can be encoded into a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Part<'a> {
    /// Absent value, encoded as a single `0x00`
    Nil,
    /// UTF-8 text, emitted verbatim
    Text(Cow<'a, str>),
    /// Raw bytes, emitted verbatim
    Bytes(Cow<'a, [u8]>),
    /// 16-byte identifier, emitted as its raw bytes
    Uuid(Uuid),
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// Instant as signed nanoseconds since the Unix epoch
    Timestamp(i64),
    /// Time interval as signed nanoseconds
    Interval(i64),
}

impl Part<'_> {
    /// Name of the part kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Part::Nil => "nil",
            Part::Text(_) => "text",
            Part::Bytes(_) => "bytes",
            Part::Uuid(_) => "uuid",
            Part::Bool(_) => "bool",
            Part::I16(_) => "i16",
            Part::I32(_) => "i32",
            Part::I64(_) => "i64",
            Part::U8(_) => "u8",
            Part::U16(_) => "u16",
            Part::U32(_) => "u32",
            Part::U64(_) => "u64",
            Part::F32(_) => "f32",
            Part::F64(_) => "f64",
            Part::Timestamp(_) => "timestamp",
            Part::Interval(_) => "interval",
        }
    }

    /// Returns the verbatim payload of text and bytes parts.
    pub(crate) fn raw_payload(&self) -> Option<&[u8]> {
        match self {
            Part::Text(s) => Some(s.as_bytes()),
            Part::Bytes(b) => Some(b.as_ref()),
            _ => None,
        }
    }

    /// Converts borrowed payloads into owned ones.
    pub fn into_owned(self) -> Part<'static> {
        match self {
            Part::Nil => Part::Nil,
            Part::Text(s) => Part::Text(Cow::Owned(s.into_owned())),
            Part::Bytes(b) => Part::Bytes(Cow::Owned(b.into_owned())),
            Part::Uuid(v) => Part::Uuid(v),
            Part::Bool(v) => Part::Bool(v),
            Part::I16(v) => Part::I16(v),
            Part::I32(v) => Part::I32(v),
            Part::I64(v) => Part::I64(v),
            Part::U8(v) => Part::U8(v),
            Part::U16(v) => Part::U16(v),
            Part::U32(v) => Part::U32(v),
            Part::U64(v) => Part::U64(v),
            Part::F32(v) => Part::F32(v),
            Part::F64(v) => Part::F64(v),
            Part::Timestamp(v) => Part::Timestamp(v),
            Part::Interval(v) => Part::Interval(v),
        }
    }
}

macro_rules! impl_from_copy {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Part<'_> {
                fn from(value: $ty) -> Self {
                    Part::$variant(value)
                }
            }
        )*
    };
}

impl_from_copy! {
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Uuid => Uuid,
}

/// The platform-default signed integer is always encoded as 64 bits.
impl From<isize> for Part<'_> {
    fn from(value: isize) -> Self {
        Part::I64(value as i64)
    }
}

impl<'a> From<&'a str> for Part<'a> {
    fn from(value: &'a str) -> Self {
        Part::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Part<'a> {
    fn from(value: &'a String) -> Self {
        Part::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Part<'_> {
    fn from(value: String) -> Self {
        Part::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a [u8]> for Part<'a> {
    fn from(value: &'a [u8]) -> Self {
        Part::Bytes(Cow::Borrowed(value))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Part<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Part::Bytes(Cow::Borrowed(value.as_slice()))
    }
}

impl From<Vec<u8>> for Part<'_> {
    fn from(value: Vec<u8>) -> Self {
        Part::Bytes(Cow::Owned(value))
    }
}

/// Instants outside the `i64` nanosecond range (roughly years 1677..2262)
/// saturate to the nearest bound.
impl From<SystemTime> for Part<'_> {
    fn from(value: SystemTime) -> Self {
        let nanos = match value.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_nanos()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_nanos())
                .map(|n| -n)
                .unwrap_or(i64::MIN),
        };
        Part::Timestamp(nanos)
    }
}

/// Intervals longer than `i64::MAX` nanoseconds saturate.
impl From<Duration> for Part<'_> {
    fn from(value: Duration) -> Self {
        Part::Interval(i64::try_from(value.as_nanos()).unwrap_or(i64::MAX))
    }
}

impl<'a, T> From<Option<T>> for Part<'a>
where
    T: Into<Part<'a>>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Part::Nil,
        }
    }
}

impl From<()> for Part<'_> {
    fn from(_: ()) -> Self {
        Part::Nil
    }
}
