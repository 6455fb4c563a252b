//! Listener contracts for change notifications.
//!
//! All callbacks here are fire-and-forget: they return nothing, and a
//! failing subscriber is invisible to the producer. Implementors are
//! expected to update their own presentation state (re-query, drop a
//! cached row, scroll); the contracts do not prescribe how.

use crate::models::Book;

use super::flags::RowChange;

/// Request key for row-level bitmask change messages on the
/// [`ResultBus`](super::ResultBus).
pub const ROW_CHANGE_REQUEST_KEY: &str = "rk:row_changed";

/// Request key for row-level keyed change messages.
pub const KEYED_CHANGE_REQUEST_KEY: &str = "rk:keyed_row_changed";

/// Receives book-level change notifications.
pub trait BookChangeListener {
    /// A concrete book changed.
    ///
    /// `fields` names the changed fields using the
    /// [`fields`](crate::models::fields) catalog. An empty slice means
    /// every field of the book may have changed.
    fn on_book_updated(&mut self, book: &Book, fields: &[&str]);

    /// Same semantics as [`Self::on_book_updated`] when only the id is
    /// available.
    fn on_book_updated_by_id(&mut self, book_id: i64, fields: &[&str]);

    /// The identified book no longer exists. Subscribers must drop it
    /// from any cached view.
    fn on_book_deleted(&mut self, book_id: i64);

    /// Request to refresh the identified book from its authoritative
    /// remote source. A request rather than a notification: nothing has
    /// changed locally yet.
    fn on_sync_book(&mut self, book_id: i64);
}

/// Receives row-level changes described by a [`RowChange`] bitmask.
pub trait RowChangeListener {
    /// Invoked exactly once per delivered message.
    ///
    /// `item == 0` means no specific row: a global or inline-table
    /// change.
    fn on_change(&mut self, change: RowChange, item: i64);
}

/// Receives row-level changes described by a string field key, for
/// cases too open-ended to enumerate as bits.
///
/// In-progress contract: the one known consumer performs a full refresh
/// regardless of `key` and `item`, treating every message as an
/// "anything changed" edge trigger. Do not assume richer semantics
/// until the contract settles.
pub trait KeyedChangeListener {
    /// Invoked exactly once per delivered message. `key` is never
    /// empty; the envelope decoder rejects messages without one before
    /// this is called.
    fn on_change(&mut self, key: &str, item: i64);
}
