//! Saved scroll position for the book list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a scrollable list should resume: the index of the first
/// visible row plus that row's pixel offset from the top of the
/// viewport.
///
/// Pure immutable value with structural equality. The offset may be
/// negative when the layout anchors a partially scrolled-off row; it is
/// stored exactly as reported and never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopRowPosition {
    row: i32,
    offset: i32,
}

impl TopRowPosition {
    /// Sentinel row value used when the list is empty.
    pub const NO_POSITION: i32 = -1;

    pub const fn new(row: i32, offset: i32) -> Self {
        Self { row, offset }
    }

    /// The position reported for an empty list.
    pub const fn unpositioned() -> Self {
        Self {
            row: Self::NO_POSITION,
            offset: 0,
        }
    }

    /// Index of the first visible row, or [`Self::NO_POSITION`].
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Pixel offset of the top row. May be negative.
    pub const fn offset(self) -> i32 {
        self.offset
    }

    /// True when the position carries the empty-list sentinel.
    pub const fn is_unpositioned(self) -> bool {
        self.row == Self::NO_POSITION
    }
}

impl Default for TopRowPosition {
    fn default() -> Self {
        Self::unpositioned()
    }
}

impl fmt::Display for TopRowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unpositioned() {
            write!(f, "no position")
        } else {
            write!(f, "row {} ({}px)", self.row, self.offset)
        }
    }
}
