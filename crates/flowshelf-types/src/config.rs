//! Browser configuration types.
//!
//! `BrowserConfig` represents the `config.toml` found in the flowshelf home
//! directory. Every field has a default so an empty or partial file works.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::view::{LayoutMode, SortKey, ViewState};

/// Fewest and most cards per row in grid layout.
pub const MIN_GRID_COLUMNS: u16 = 1;
pub const MAX_GRID_COLUMNS: u16 = 6;

/// Top-level configuration for the workflow browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Catalog source (JSON/TOML/YAML file or a directory of workflow docs).
    /// `None` uses the built-in sample catalog.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Sort key applied when a session starts. Unknown keys fall back to
    /// `titleAsc`.
    #[serde(default)]
    pub default_sort: SortKey,

    #[serde(default)]
    pub default_layout: LayoutMode,

    /// Cards per row in grid layout.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u16,

    #[serde(default = "default_page_title")]
    pub page_title: String,

    #[serde(default = "default_page_description")]
    pub page_description: String,
}

fn default_grid_columns() -> u16 {
    3
}

fn default_page_title() -> String {
    "Workflow Browser".to_string()
}

fn default_page_description() -> String {
    "Browse and discover automation workflows for n8n, Zapier, Make, and more.".to_string()
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_sort: SortKey::default(),
            default_layout: LayoutMode::default(),
            grid_columns: default_grid_columns(),
            page_title: default_page_title(),
            page_description: default_page_description(),
        }
    }
}

impl BrowserConfig {
    /// Grid columns clamped to the supported range.
    pub fn effective_grid_columns(&self) -> u16 {
        self.grid_columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    /// Initial view state for a new session.
    pub fn initial_view_state(&self) -> ViewState {
        ViewState {
            layout: self.default_layout,
            sort_key: self.default_sort,
            ..ViewState::default()
        }
    }
}
