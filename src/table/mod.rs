//! redb integration.
//!
//! [`LexKey`] implements [`redb::Key`] with plain byte-wise comparison, so it
//! can key any redb table. [`LexKeyRangeExt`] opens scans over the boundaries
//! built by [`RangeKey`].

use crate::composite::RangeKey;
use crate::error::Result;
use crate::key::LexKey;
use crate::{END_MARKER, SEPARATOR};
use redb::{Key, Range, ReadableTable, TypeName, Value};
use std::cmp::Ordering;
use tracing::trace;

impl Value for LexKey {
    type SelfType<'a>
        = LexKey
    where
        Self: 'a;

    type AsBytes<'a>
        = &'a [u8]
    where
        Self: 'a;

    fn fixed_width() -> Option<usize> {
        None // Variable width keys
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        LexKey::from_bytes(data)
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        value.as_bytes()
    }

    fn type_name() -> TypeName {
        TypeName::new("lexkey::LexKey")
    }
}

impl Key for LexKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        data1.cmp(data2)
    }
}

/// Range scans over tables keyed by [`LexKey`].
pub trait LexKeyRangeExt<V: Value + 'static> {
    /// Scans the half-open interval produced by [`RangeKey::encode`].
    fn scan_range(
        &self,
        range: &RangeKey,
        include_partition: bool,
    ) -> Result<Range<'_, LexKey, V>>;

    /// Scans the half-open byte range `[prefix ‖ 0x00, prefix ‖ 0xFF)`.
    ///
    /// Besides keys extending `prefix` with a separator, this also yields keys
    /// whose bytes continue `prefix` directly with anything below `0xFF`, such
    /// as `"users"` for the prefix `"user"`.
    fn scan_prefix(&self, prefix: &LexKey) -> Result<Range<'_, LexKey, V>>;
}

impl<V, T> LexKeyRangeExt<V> for T
where
    V: Value + 'static,
    T: ReadableTable<LexKey, V>,
{
    fn scan_range(
        &self,
        range: &RangeKey,
        include_partition: bool,
    ) -> Result<Range<'_, LexKey, V>> {
        let (lower, upper) = range.encode(include_partition);
        Ok(self.range(lower..upper)?)
    }

    fn scan_prefix(&self, prefix: &LexKey) -> Result<Range<'_, LexKey, V>> {
        let lower = prefix.with_suffix(SEPARATOR);
        let upper = prefix.with_suffix(END_MARKER);
        trace!(prefix_len = prefix.len(), "scanning key prefix");
        Ok(self.range(lower..upper)?)
    }
}
