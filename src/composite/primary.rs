//! Composite (partition, row) keys.

use crate::error::{Error, Result};
use crate::key::LexKey;
use crate::SEPARATOR;
use tracing::debug;

/// A key made of a partition component and a row component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimaryKey {
    partition_key: LexKey,
    row_key: LexKey,
}

impl PrimaryKey {
    /// Creates a primary key from already-encoded components.
    ///
    /// # Errors
    /// [`Error::MissingComponent`] naming the absent component(s).
    pub fn new(partition_key: Option<LexKey>, row_key: Option<LexKey>) -> Result<Self> {
        match (partition_key, row_key) {
            (Some(partition_key), Some(row_key)) => Ok(Self {
                partition_key,
                row_key,
            }),
            (partition_key, row_key) => {
                let missing = match (partition_key.is_none(), row_key.is_none()) {
                    (true, true) => "partition key and row key",
                    (true, false) => "partition key",
                    _ => "row key",
                };
                debug!(missing, "rejecting primary key with absent component");
                Err(Error::MissingComponent(missing))
            }
        }
    }

    pub fn partition_key(&self) -> &LexKey {
        &self.partition_key
    }

    pub fn row_key(&self) -> &LexKey {
        &self.row_key
    }

    /// Encodes as `partition ‖ 0x00 ‖ row`.
    pub fn encode(&self) -> LexKey {
        let mut buf = Vec::with_capacity(self.partition_key.len() + 1 + self.row_key.len());
        buf.extend_from_slice(&self.partition_key);
        buf.push(SEPARATOR);
        buf.extend_from_slice(&self.row_key);
        LexKey::from_bytes(buf)
    }
}

impl From<&PrimaryKey> for LexKey {
    fn from(value: &PrimaryKey) -> Self {
        value.encode()
    }
}
