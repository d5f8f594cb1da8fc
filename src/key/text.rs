//! Text representations of keys.
//!
//! Keys travel through text formats as lowercase hex. In serde formats a key
//! is a hex string, and `null` reads back as the empty key.

use super::LexKey;
use crate::error::{Error, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

impl LexKey {
    /// Lowercase hex form of the key. The empty key yields `""`.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Decodes a hex string. `""` yields the empty key.
    ///
    /// # Errors
    /// [`Error::MalformedText`] on odd length or non-hex characters.
    pub fn from_hex(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::empty());
        }
        hex::decode(text).map(Self).map_err(|err| match err {
            hex::FromHexError::OddLength => {
                Error::MalformedText(format!("invalid hex string length: {}", text.len()))
            }
            other => Error::MalformedText(format!("failed to decode hex string: {}", other)),
        })
    }
}

impl fmt::Display for LexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for LexKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for LexKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct HexKeyVisitor;

impl<'de> Visitor<'de> for HexKeyVisitor {
    type Value = LexKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<LexKey, E> {
        LexKey::from_hex(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<LexKey, E> {
        Ok(LexKey::empty())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<LexKey, E> {
        Ok(LexKey::empty())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<LexKey, D::Error> {
        d.deserialize_str(HexKeyVisitor)
    }
}

impl<'de> Deserialize<'de> for LexKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_option(HexKeyVisitor)
    }
}
