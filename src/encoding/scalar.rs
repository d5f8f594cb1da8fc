//! Order-preserving scalar encoders.
//!
//! Each encoder maps one value to bytes such that comparing two encodings of
//! the same kind byte-wise gives the same result as comparing the values.
//!
//! # Layout
//!
//! - Signed integers: two's complement reinterpreted as unsigned, sign bit
//!   flipped, big-endian. `i64::MIN` becomes all zeros, `i64::MAX` all ones.
//! - Unsigned integers: big-endian.
//! - Floats: canonical NaN and `+0.0` substituted first, then positive values
//!   get the sign bit flipped and negative values get every bit inverted.
//!   NaN sorts above `+inf`.
//! - Bool: `0x00` / `0x01`. Absent: `0x00`.
//! - Text, bytes, uuid: verbatim.
//! - Timestamps and intervals: signed 64-bit nanoseconds.

use super::Part;

/// Canonical bit pattern every `f64` NaN collapses to before encoding.
pub const CANONICAL_NAN_F64: u64 = 0x7FF8_0000_0000_0001;

/// Canonical bit pattern every `f32` NaN collapses to before encoding.
pub const CANONICAL_NAN_F32: u32 = 0x7FC0_0001;

const SIGN_FLIP_I16: u16 = 0x8000;
const SIGN_FLIP_I32: u32 = 0x8000_0000;
const SIGN_FLIP_I64: u64 = 0x8000_0000_0000_0000;

pub fn encode_i16(value: i16) -> [u8; 2] {
    ((value as u16) ^ SIGN_FLIP_I16).to_be_bytes()
}

pub fn encode_i32(value: i32) -> [u8; 4] {
    ((value as u32) ^ SIGN_FLIP_I32).to_be_bytes()
}

pub fn encode_i64(value: i64) -> [u8; 8] {
    ((value as u64) ^ SIGN_FLIP_I64).to_be_bytes()
}

pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn encode_u32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Encodes an `f64` so that byte order matches numeric order.
///
/// `-0.0` encodes like `+0.0`, and all NaNs share one encoding that sorts
/// after positive infinity.
pub fn encode_f64(value: f64) -> [u8; 8] {
    let bits = if value.is_nan() {
        CANONICAL_NAN_F64
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    };

    let encoded = if bits & SIGN_FLIP_I64 == 0 {
        bits ^ SIGN_FLIP_I64
    } else {
        !bits
    };
    encoded.to_be_bytes()
}

/// Encodes an `f32` so that byte order matches numeric order.
///
/// Same rules as [`encode_f64`] at 32 bits.
pub fn encode_f32(value: f32) -> [u8; 4] {
    let bits = if value.is_nan() {
        CANONICAL_NAN_F32
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    };

    let encoded = if bits & SIGN_FLIP_I32 == 0 {
        bits ^ SIGN_FLIP_I32
    } else {
        !bits
    };
    encoded.to_be_bytes()
}

pub fn encode_bool(value: bool) -> [u8; 1] {
    [u8::from(value)]
}

/// Appends the encoding of `part` to `buf`.
pub fn encode_part_into(part: &Part<'_>, buf: &mut Vec<u8>) {
    match part {
        Part::Nil => buf.push(0x00),
        Part::Text(s) => buf.extend_from_slice(s.as_bytes()),
        Part::Bytes(b) => buf.extend_from_slice(b),
        Part::Uuid(id) => buf.extend_from_slice(id.as_bytes()),
        Part::Bool(v) => buf.extend_from_slice(&encode_bool(*v)),
        Part::I16(v) => buf.extend_from_slice(&encode_i16(*v)),
        Part::I32(v) => buf.extend_from_slice(&encode_i32(*v)),
        Part::I64(v) | Part::Timestamp(v) | Part::Interval(v) => {
            buf.extend_from_slice(&encode_i64(*v))
        }
        Part::U8(v) => buf.push(*v),
        Part::U16(v) => buf.extend_from_slice(&encode_u16(*v)),
        Part::U32(v) => buf.extend_from_slice(&encode_u32(*v)),
        Part::U64(v) => buf.extend_from_slice(&encode_u64(*v)),
        Part::F32(v) => buf.extend_from_slice(&encode_f32(*v)),
        Part::F64(v) => buf.extend_from_slice(&encode_f64(*v)),
    }
}

/// Encodes a single part into a fresh buffer.
pub fn encode_part(part: &Part<'_>) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(part));
    encode_part_into(part, &mut buf);
    buf
}

/// Exact number of bytes [`encode_part_into`] appends for `part`.
pub fn encoded_len(part: &Part<'_>) -> usize {
    match part {
        Part::Nil | Part::Bool(_) | Part::U8(_) => 1,
        Part::Text(s) => s.len(),
        Part::Bytes(b) => b.len(),
        Part::Uuid(_) => 16,
        Part::I16(_) | Part::U16(_) => 2,
        Part::I32(_) | Part::U32(_) | Part::F32(_) => 4,
        Part::I64(_)
        | Part::U64(_)
        | Part::F64(_)
        | Part::Timestamp(_)
        | Part::Interval(_) => 8,
    }
}
