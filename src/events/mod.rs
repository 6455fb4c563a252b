//! Change notification contracts and the request-keyed result bus.
//!
//! This module defines how the rest of the application learns that
//! catalogued data changed:
//!
//! - [`BookChangeListener`] - book-level callbacks (updated, deleted,
//!   needs remote sync)
//! - [`RowChangeListener`] / [`KeyedChangeListener`] - row-level
//!   broadcasts, bitmask-described or key-described
//! - [`RowChange`] / [`BookChange`] - the two disjoint change catalogs
//! - [`ResultBus`] - the decoupled publish/subscribe transport keyed by
//!   string request keys
//!
//! Producers never learn whether, or how, a subscriber reacted.

pub mod bus;
pub mod flags;
pub mod listener;
pub mod message;

pub use bus::{deliver_keyed_change, deliver_row_change, ResultBus};
pub use flags::{BookChange, RowChange};
pub use listener::{
    BookChangeListener, KeyedChangeListener, RowChangeListener, KEYED_CHANGE_REQUEST_KEY,
    ROW_CHANGE_REQUEST_KEY,
};
pub use message::{KeyedChangeMessage, RowChangeMessage};
