//! Book entity and the stable field-key catalog.
//!
//! The full book record lives with the database layer; this module
//! carries only what the notification contracts need: an identifier and
//! the handful of fields a subscriber might patch into a cached row
//! without re-querying.

use serde::{Deserialize, Serialize};

/// Stable string keys naming book fields in change notifications.
///
/// These are the values passed as `fields` to
/// [`BookChangeListener::on_book_updated`](crate::events::BookChangeListener::on_book_updated)
/// and as the `key` of a keyed row change. They are part of the
/// notification contract and never renamed.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const SERIES: &str = "series";
    pub const PUBLISHER: &str = "publisher";
    pub const BOOKSHELF: &str = "bookshelf";
    pub const TOC_ENTRY: &str = "toc_entry";
    pub const FORMAT: &str = "format";
    pub const COLOR: &str = "color";
    pub const GENRE: &str = "genre";
    pub const LANGUAGE: &str = "language";
    pub const LOCATION: &str = "location";
    pub const READ: &str = "read";
    pub const LOANEE: &str = "loanee";
}

/// A single catalogued book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Database row id. Always positive for a stored book.
    pub id: i64,
    pub title: String,
    /// Primary author, display form.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    /// Whether the user has marked the book as read.
    #[serde(default)]
    pub read: bool,
    /// Who the book is currently lent to, if anyone.
    #[serde(default)]
    pub loanee: Option<String>,
}

impl Book {
    /// Create a book with just an id and title; the optional fields
    /// start empty.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: None,
            series: None,
            read: false,
            loanee: None,
        }
    }
}
