//! Local UI preferences (theme, sidebar).
//!
//! DESIGN
//! ======
//! Presentation-only and per-browser: persisted to `localStorage`, never
//! sent to the backend, and independent of who is signed in.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

use crate::util::{dark_mode, ui_persistence};

pub const STORAGE_KEY: &str = "lchaty_ui_prefs";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}

impl UiState {
    /// Stored preferences, or defaults seeded from the system theme.
    pub fn load() -> Self {
        ui_persistence::load_json(STORAGE_KEY).unwrap_or_else(|| Self {
            dark_mode: dark_mode::system_prefers_dark(),
            ..Self::default()
        })
    }

    pub fn save(&self) {
        ui_persistence::save_json(STORAGE_KEY, self);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
