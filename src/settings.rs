//! Persisted user settings.
//!
//! A JSON-file-backed store covering the handful of preferences this
//! core reads: the two mode integers and the saved list position per
//! bookshelf. The file is read and written whole; a missing file loads
//! as defaults. Unknown mode integers are normalized when resolved (see
//! [`crate::modes`]), never rewritten on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ShelfResult;
use crate::modes::{ContextMenuMode, RebuildMode};
use crate::position::TopRowPosition;

/// User settings, mirrored to a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Raw integer code for the preferred [`RebuildMode`].
    #[serde(default)]
    booklist_rebuild_state: i64,
    /// Raw integer code for the preferred [`ContextMenuMode`].
    #[serde(default)]
    booklist_context_menu: i64,
    /// Saved list position per bookshelf id.
    #[serde(default)]
    list_positions: HashMap<i64, TopRowPosition>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings file under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shelf").join("settings.json"))
    }

    /// Load settings from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> ShelfResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Persist settings to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> ShelfResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Raw integer code of the rebuild-mode preference, as stored.
    ///
    /// External collaborators own writing this key; use
    /// [`RebuildMode::preferred`] to resolve it to a variant.
    pub fn rebuild_mode_code(&self) -> i64 {
        self.booklist_rebuild_state
    }

    pub fn set_rebuild_mode(&mut self, mode: RebuildMode) {
        self.booklist_rebuild_state = mode.code();
    }

    /// Overwrite the raw rebuild-mode integer without validation.
    pub fn set_rebuild_mode_code(&mut self, code: i64) {
        self.booklist_rebuild_state = code;
    }

    /// Raw integer code of the context-menu preference, as stored.
    pub fn context_menu_code(&self) -> i64 {
        self.booklist_context_menu
    }

    pub fn set_context_menu_mode(&mut self, mode: ContextMenuMode) {
        self.booklist_context_menu = mode.code();
    }

    /// Overwrite the raw context-menu integer without validation.
    pub fn set_context_menu_code(&mut self, code: i64) {
        self.booklist_context_menu = code;
    }

    /// Remember where the list for `bookshelf_id` was scrolled to.
    pub fn save_list_position(&mut self, bookshelf_id: i64, position: TopRowPosition) {
        self.list_positions.insert(bookshelf_id, position);
    }

    /// Saved position for `bookshelf_id`, if one was recorded.
    pub fn list_position(&self, bookshelf_id: i64) -> Option<TopRowPosition> {
        self.list_positions.get(&bookshelf_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_to_default_modes() {
        let settings = Settings::new();
        assert_eq!(RebuildMode::preferred(&settings), RebuildMode::FromSaved);
        assert_eq!(
            ContextMenuMode::preferred(&settings),
            ContextMenuMode::Button
        );
    }

    #[test]
    fn test_mode_setters_store_codes() {
        let mut settings = Settings::new();
        settings.set_rebuild_mode(RebuildMode::Collapsed);
        settings.set_context_menu_mode(ContextMenuMode::NoButton);
        assert_eq!(settings.rebuild_mode_code(), 2);
        assert_eq!(settings.context_menu_code(), 2);
    }

    #[test]
    fn test_out_of_range_code_normalizes_on_resolve() {
        let mut settings = Settings::new();
        settings.set_rebuild_mode_code(250);
        settings.set_context_menu_code(-3);
        assert_eq!(RebuildMode::preferred(&settings), RebuildMode::FromSaved);
        assert_eq!(
            ContextMenuMode::preferred(&settings),
            ContextMenuMode::Button
        );
        // The raw value stays untouched.
        assert_eq!(settings.rebuild_mode_code(), 250);
    }

    #[test]
    fn test_list_position_per_bookshelf() {
        let mut settings = Settings::new();
        settings.save_list_position(1, TopRowPosition::new(40, -6));
        settings.save_list_position(2, TopRowPosition::new(0, 0));

        assert_eq!(settings.list_position(1), Some(TopRowPosition::new(40, -6)));
        assert_eq!(settings.list_position(2), Some(TopRowPosition::new(0, 0)));
        assert_eq!(settings.list_position(3), None);
    }

    #[test]
    fn test_saving_again_replaces_the_position() {
        let mut settings = Settings::new();
        settings.save_list_position(1, TopRowPosition::new(10, 0));
        settings.save_list_position(1, TopRowPosition::new(25, -3));
        assert_eq!(
            settings.list_position(1),
            Some(TopRowPosition::new(25, -3))
        );
    }
}
