//! Scan boundaries over composite keys.

use crate::key::LexKey;
use crate::{END_MARKER, SEPARATOR};
use tracing::trace;

/// A row-key interval inside one partition.
///
/// Either end may be absent, leaving that side of the interval open. An empty
/// row key counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeKey {
    pub partition_key: LexKey,
    pub start_row_key: Option<LexKey>,
    pub end_row_key: Option<LexKey>,
}

impl RangeKey {
    pub fn new(
        partition_key: LexKey,
        start_row_key: Option<LexKey>,
        end_row_key: Option<LexKey>,
    ) -> Self {
        Self {
            partition_key,
            start_row_key,
            end_row_key,
        }
    }

    /// Range covering every row of `partition_key`.
    pub fn prefix(partition_key: LexKey) -> Self {
        Self::new(partition_key, None, None)
    }

    /// Builds the `[lower, upper)` byte bounds of this range.
    ///
    /// A half-open scan over the bounds returns the keys whose row component
    /// lies between the start and end rows, both inclusive. With
    /// `include_partition` set, both bounds start with the partition bytes and
    /// the scan is confined to that partition.
    pub fn encode(&self, include_partition: bool) -> (LexKey, LexKey) {
        let lower = encode_boundary(
            &self.partition_key,
            self.start_row_key.as_ref(),
            false,
            include_partition,
        );
        let upper = encode_boundary(
            &self.partition_key,
            self.end_row_key.as_ref(),
            true,
            include_partition,
        );
        trace!(
            include_partition,
            lower_len = lower.len(),
            upper_len = upper.len(),
            "encoded range boundaries"
        );
        (lower, upper)
    }
}

fn encode_boundary(
    partition_key: &LexKey,
    row_key: Option<&LexKey>,
    is_upper: bool,
    include_partition: bool,
) -> LexKey {
    let row_key = row_key.filter(|row| !row.is_empty());
    let partition: &[u8] = if include_partition {
        partition_key.as_bytes()
    } else {
        &[]
    };

    let size = partition.len()
        + match row_key {
            Some(row) => 1 + row.len() + usize::from(is_upper),
            None => 1,
        };
    let mut buf = Vec::with_capacity(size);
    buf.extend_from_slice(partition);

    match row_key {
        Some(row) => {
            buf.push(SEPARATOR);
            buf.extend_from_slice(row);
            if is_upper {
                buf.push(END_MARKER);
            }
        }
        None if is_upper => buf.push(END_MARKER),
        None => buf.push(SEPARATOR),
    }

    LexKey::from_bytes(buf)
}
