//! List rebuild and context-menu display modes.
//!
//! Both enums map to a stable integer code used for persistence in
//! [`Settings`] and for transport across process boundaries. The codes
//! are part of the on-disk contract: existing codes never move, new
//! variants get new codes, and an unknown code silently normalizes to
//! the first-declared variant.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Strategy for reconstructing the displayed book list after an
/// invalidating change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RebuildMode {
    /// Restore the expand/collapse state saved with the previous list.
    #[default]
    FromSaved,
    /// Build with every level expanded.
    Expanded,
    /// Build with every level collapsed.
    Collapsed,
    /// Build according to the user's per-style preferred state.
    Preferred,
}

impl RebuildMode {
    /// The stable persisted code for this variant.
    pub const fn code(self) -> i64 {
        match self {
            RebuildMode::FromSaved => 0,
            RebuildMode::Expanded => 1,
            RebuildMode::Collapsed => 2,
            RebuildMode::Preferred => 3,
        }
    }

    /// Resolve a persisted code.
    ///
    /// Total: any code outside 0..=3 yields [`RebuildMode::FromSaved`]
    /// without raising an error.
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => RebuildMode::Expanded,
            2 => RebuildMode::Collapsed,
            3 => RebuildMode::Preferred,
            _ => RebuildMode::FromSaved,
        }
    }

    /// Read the user's preferred rebuild mode from settings.
    pub fn preferred(settings: &Settings) -> Self {
        Self::from_code(settings.rebuild_mode_code())
    }
}

impl From<i64> for RebuildMode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<RebuildMode> for i64 {
    fn from(mode: RebuildMode) -> i64 {
        mode.code()
    }
}

/// Display policy for the per-row context-menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ContextMenuMode {
    /// Always show the button.
    #[default]
    Button,
    /// Show the button when the row has room for it.
    ButtonIfSpace,
    /// Never show the button.
    NoButton,
}

impl ContextMenuMode {
    /// The stable persisted code for this variant.
    pub const fn code(self) -> i64 {
        match self {
            ContextMenuMode::Button => 0,
            ContextMenuMode::ButtonIfSpace => 1,
            ContextMenuMode::NoButton => 2,
        }
    }

    /// Resolve a persisted code; unknown codes yield
    /// [`ContextMenuMode::Button`].
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => ContextMenuMode::ButtonIfSpace,
            2 => ContextMenuMode::NoButton,
            _ => ContextMenuMode::Button,
        }
    }

    /// Read the user's preferred context-menu mode from settings.
    pub fn preferred(settings: &Settings) -> Self {
        Self::from_code(settings.context_menu_code())
    }
}

impl From<i64> for ContextMenuMode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<ContextMenuMode> for i64 {
    fn from(mode: ContextMenuMode) -> i64 {
        mode.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_mode_codes_are_stable() {
        assert_eq!(RebuildMode::FromSaved.code(), 0);
        assert_eq!(RebuildMode::Expanded.code(), 1);
        assert_eq!(RebuildMode::Collapsed.code(), 2);
        assert_eq!(RebuildMode::Preferred.code(), 3);
    }

    #[test]
    fn test_rebuild_mode_round_trip() {
        for mode in [
            RebuildMode::FromSaved,
            RebuildMode::Expanded,
            RebuildMode::Collapsed,
            RebuildMode::Preferred,
        ] {
            assert_eq!(RebuildMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn test_rebuild_mode_unknown_code_normalizes() {
        assert_eq!(RebuildMode::from_code(-1), RebuildMode::FromSaved);
        assert_eq!(RebuildMode::from_code(4), RebuildMode::FromSaved);
        assert_eq!(RebuildMode::from_code(i64::MAX), RebuildMode::FromSaved);
    }

    #[test]
    fn test_context_menu_mode_round_trip() {
        for mode in [
            ContextMenuMode::Button,
            ContextMenuMode::ButtonIfSpace,
            ContextMenuMode::NoButton,
        ] {
            assert_eq!(ContextMenuMode::from_code(mode.code()), mode);
        }
    }

    #[test]
    fn test_context_menu_mode_unknown_code_normalizes() {
        assert_eq!(ContextMenuMode::from_code(-7), ContextMenuMode::Button);
        assert_eq!(ContextMenuMode::from_code(3), ContextMenuMode::Button);
    }

    #[test]
    fn test_serde_uses_integer_codes() {
        let json = serde_json::to_string(&RebuildMode::Collapsed).unwrap();
        assert_eq!(json, "2");

        let mode: RebuildMode = serde_json::from_str("1").unwrap();
        assert_eq!(mode, RebuildMode::Expanded);

        // Transport normalizes the same way persistence does.
        let mode: RebuildMode = serde_json::from_str("99").unwrap();
        assert_eq!(mode, RebuildMode::FromSaved);
    }

    #[test]
    fn test_defaults_are_the_first_variants() {
        assert_eq!(RebuildMode::default(), RebuildMode::FromSaved);
        assert_eq!(ContextMenuMode::default(), ContextMenuMode::Button);
    }
}
