//! Change catalogs for row-level notifications.
//!
//! Two disjoint flag sets: [`RowChange`] names the non-book entity
//! kinds a row-level broadcast can report, [`BookChange`] names the
//! book-specific sub-changes. Keeping them as separate types restricts
//! each call site to the right catalog at compile time.
//!
//! Bit positions are an implementation detail. They are never persisted
//! and may be renumbered between versions; only the named constants are
//! contract.

bitflags::bitflags! {
    /// Which kind of non-book entity changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RowChange: u32 {
        const AUTHOR = 1 << 0;
        const SERIES = 1 << 1;
        const PUBLISHER = 1 << 2;
        const BOOKSHELF = 1 << 3;
        const TOC_ENTRY = 1 << 4;
        const FORMAT = 1 << 5;
        const COLOR = 1 << 6;
        const GENRE = 1 << 7;
        const LANGUAGE = 1 << 8;
        const LOCATION = 1 << 9;
    }
}

bitflags::bitflags! {
    /// Book-specific sub-changes, disjoint from [`RowChange`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BookChange: u32 {
        const READ = 1 << 0;
        const LOANEE = 1 << 1;
        const DELETED = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine_with_or() {
        let change = RowChange::AUTHOR | RowChange::SERIES;
        assert!(change.contains(RowChange::AUTHOR));
        assert!(change.contains(RowChange::SERIES));
        assert!(!change.contains(RowChange::PUBLISHER));
    }

    #[test]
    fn test_each_row_change_flag_is_a_single_bit() {
        for flag in RowChange::all().iter() {
            assert_eq!(flag.bits().count_ones(), 1);
        }
    }

    #[test]
    fn test_book_change_catalog() {
        let change = BookChange::READ | BookChange::LOANEE;
        assert!(change.contains(BookChange::READ));
        assert!(!change.contains(BookChange::DELETED));
    }
}
