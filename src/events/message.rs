//! Envelope encoding for row-level change messages.
//!
//! A delivered message is a small JSON object with two entries:
//! `{"change": <u32>, "item": <i64>}` for the bitmask form or
//! `{"key": <string>, "item": <i64>}` for the keyed form. The object
//! travels through the [`ResultBus`](super::ResultBus); delivery timing
//! belongs to the host.
//!
//! Decoding mirrors the host's primitive defaulting: an absent numeric
//! entry reads as 0, while an absent `"key"` is a hard error. A present
//! entry of the wrong type is always an error.

use serde_json::{json, Value};

use crate::error::{ShelfError, ShelfResult};

use super::flags::RowChange;

const ENTRY_CHANGE: &str = "change";
const ENTRY_KEY: &str = "key";
const ENTRY_ITEM: &str = "item";

/// Bitmask-form change message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowChangeMessage {
    /// What kind of entity changed.
    pub change: RowChange,
    /// Affected row id; 0 when no specific row is meant.
    pub item: i64,
}

impl RowChangeMessage {
    pub fn new(change: RowChange, item: i64) -> Self {
        Self { change, item }
    }

    /// Package into the two-entry envelope object.
    pub fn to_value(&self) -> Value {
        json!({ ENTRY_CHANGE: self.change.bits(), ENTRY_ITEM: self.item })
    }

    /// Decode a delivered envelope.
    ///
    /// Unknown bits in the `"change"` entry are dropped; a sender from
    /// a newer version may know flags this build does not.
    pub fn from_value(value: &Value) -> ShelfResult<Self> {
        let change = match value.get(ENTRY_CHANGE) {
            Some(entry) => entry
                .as_u64()
                .ok_or(ShelfError::InvalidEntry { entry: ENTRY_CHANGE })?,
            None => 0,
        };
        Ok(Self {
            change: RowChange::from_bits_truncate(change as u32),
            item: read_item(value)?,
        })
    }
}

/// Keyed-form change message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedChangeMessage {
    /// Field key naming what changed; see
    /// [`fields`](crate::models::fields).
    pub key: String,
    /// Affected row id; 0 when no specific row is meant.
    pub item: i64,
}

impl KeyedChangeMessage {
    pub fn new(key: impl Into<String>, item: i64) -> Self {
        Self {
            key: key.into(),
            item,
        }
    }

    /// Package into the two-entry envelope object.
    pub fn to_value(&self) -> Value {
        json!({ ENTRY_KEY: self.key, ENTRY_ITEM: self.item })
    }

    /// Decode a delivered envelope.
    ///
    /// A missing or non-string `"key"` entry is a hard error; a
    /// listener must never observe a keyed message without one.
    pub fn from_value(value: &Value) -> ShelfResult<Self> {
        let key = value
            .get(ENTRY_KEY)
            .ok_or(ShelfError::MissingEntry { entry: ENTRY_KEY })?
            .as_str()
            .ok_or(ShelfError::InvalidEntry { entry: ENTRY_KEY })?;
        Ok(Self {
            key: key.to_string(),
            item: read_item(value)?,
        })
    }
}

fn read_item(value: &Value) -> ShelfResult<i64> {
    match value.get(ENTRY_ITEM) {
        Some(entry) => entry
            .as_i64()
            .ok_or(ShelfError::InvalidEntry { entry: ENTRY_ITEM }),
        None => Ok(0),
    }
}
