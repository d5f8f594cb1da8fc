//! Building keys from any `Serialize` value.
//!
//! A top-level tuple, tuple struct or struct becomes a sequence of parts, one
//! per field in declaration order. Any other top-level value becomes a single
//! part. Inside a sequence of parts each field must be a scalar:
//!
//! | serde shape                      | part                   |
//! |----------------------------------|------------------------|
//! | `bool`                           | [`Part::Bool`]         |
//! | `i16`, `i32`, `i64`              | signed of that width   |
//! | `u8`, `u16`, `u32`, `u64`        | unsigned of that width |
//! | `f32`, `f64`                     | float of that width    |
//! | `str`                            | [`Part::Text`]         |
//! | bytes (e.g. `uuid::Uuid`)        | [`Part::Bytes`]        |
//! | `None`, `()`, unit struct        | [`Part::Nil`]          |
//! | `Some(v)`, newtype struct        | the inner value        |
//!
//! Everything else (`i8`, 128-bit integers, `char`, sequences, maps, enum
//! variants, nested compounds) fails with [`Error::UnsupportedType`].

use crate::encoding::Part;
use crate::error::{Error, Result};
use crate::key::{KeyEncoder, LexKey};
use serde::ser::{
    self, Impossible, Serialize, SerializeStruct, SerializeTuple, SerializeTupleStruct,
    Serializer,
};
use std::borrow::Cow;
use std::fmt::Display;
use tracing::debug;

/// Builds a key from a serializable value with the default encoder.
///
/// ```
/// let key = lexkey::to_key(&("foo", 42i64, true)).unwrap();
/// assert_eq!(key.to_hex(), "666f6f00800000000000002a0001");
/// ```
pub fn to_key<T: Serialize + ?Sized>(value: &T) -> Result<LexKey> {
    KeyEncoder::default().encode_value(value)
}

/// Collects the parts of a serializable value without encoding them.
pub fn to_parts<T: Serialize + ?Sized>(value: &T) -> Result<Vec<Part<'static>>> {
    value.serialize(KeySerializer)
}

impl KeyEncoder {
    /// Encodes a serializable value under this encoder's configuration.
    pub fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<LexKey> {
        let parts = to_parts(value)?;
        self.encode(&parts)
    }
}

impl ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Serialization(msg.to_string())
    }
}

fn unsupported(shape: &str) -> Error {
    debug!(shape, "rejecting unsupported key part");
    Error::UnsupportedType(shape.to_string())
}

/// Serializer for the top level of a key.
struct KeySerializer;

/// Serializer for one part.
#[derive(Clone, Copy)]
struct PartSerializer;

/// Accumulates the fields of a top-level compound.
struct PartCollector {
    parts: Vec<Part<'static>>,
}

impl PartCollector {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.parts.push(value.serialize(PartSerializer)?);
        Ok(())
    }
}

macro_rules! forward_to_part {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<Self::Ok> {
                Ok(vec![PartSerializer.$method(v)?])
            }
        )*
    };
}

impl Serializer for KeySerializer {
    type Ok = Vec<Part<'static>>;
    type Error = Error;
    type SerializeSeq = Impossible<Self::Ok, Error>;
    type SerializeTuple = PartCollector;
    type SerializeTupleStruct = PartCollector;
    type SerializeTupleVariant = Impossible<Self::Ok, Error>;
    type SerializeMap = Impossible<Self::Ok, Error>;
    type SerializeStruct = PartCollector;
    type SerializeStructVariant = Impossible<Self::Ok, Error>;

    forward_to_part! {
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(vec![Part::Nil])
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(vec![Part::Nil])
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(vec![Part::Nil])
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(unsupported("enum variant"))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Err(unsupported("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(unsupported("sequence"))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(PartCollector {
            parts: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_tuple(len)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(unsupported("map"))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_tuple(len)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported("enum variant"))
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

impl SerializeTuple for PartCollector {
    type Ok = Vec<Part<'static>>;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.parts)
    }
}

impl SerializeTupleStruct for PartCollector {
    type Ok = Vec<Part<'static>>;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.parts)
    }
}

impl SerializeStruct for PartCollector {
    type Ok = Vec<Part<'static>>;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.parts)
    }
}

impl Serializer for PartSerializer {
    type Ok = Part<'static>;
    type Error = Error;
    type SerializeSeq = Impossible<Self::Ok, Error>;
    type SerializeTuple = Impossible<Self::Ok, Error>;
    type SerializeTupleStruct = Impossible<Self::Ok, Error>;
    type SerializeTupleVariant = Impossible<Self::Ok, Error>;
    type SerializeMap = Impossible<Self::Ok, Error>;
    type SerializeStruct = Impossible<Self::Ok, Error>;
    type SerializeStructVariant = Impossible<Self::Ok, Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Part::Bool(v))
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok> {
        Err(unsupported("i8"))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        Ok(Part::I16(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        Ok(Part::I32(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(Part::I64(v))
    }

    fn serialize_i128(self, _v: i128) -> Result<Self::Ok> {
        Err(unsupported("i128"))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        Ok(Part::U8(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        Ok(Part::U16(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        Ok(Part::U32(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Ok(Part::U64(v))
    }

    fn serialize_u128(self, _v: u128) -> Result<Self::Ok> {
        Err(unsupported("u128"))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(Part::F32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(Part::F64(v))
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(unsupported("char"))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Part::Text(Cow::Owned(v.to_owned())))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        Ok(Part::Bytes(Cow::Owned(v.to_vec())))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(Part::Nil)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Part::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(Part::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(unsupported("enum variant"))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Err(unsupported("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(unsupported("nested tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(unsupported("nested tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(unsupported("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(unsupported("nested struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported("enum variant"))
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}
