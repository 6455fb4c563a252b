//! Prelude module for convenient imports.
//!
//! ```ignore
//! use shelf::prelude::*;
//! ```

// Notification contracts and transport
pub use crate::events::{
    BookChange, BookChangeListener, KeyedChangeListener, KeyedChangeMessage, ResultBus,
    RowChange, RowChangeListener, RowChangeMessage,
};

// Model types
pub use crate::models::{fields, Book};

// Preference-backed modes
pub use crate::modes::{ContextMenuMode, RebuildMode};

// Value types and settings
pub use crate::position::TopRowPosition;
pub use crate::settings::Settings;

// Errors
pub use crate::error::{ShelfError, ShelfResult};
