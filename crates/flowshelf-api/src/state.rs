//! Application state shared by every command.
//!
//! Resolves configuration, picks the catalog source, and loads the catalog
//! once at startup.

use std::path::{Path, PathBuf};

use anyhow::Context;

use flowshelf_core::catalog::Catalog;
use flowshelf_core::present::PageMeta;
use flowshelf_core::session::BrowserSession;
use flowshelf_infra::catalog_source::CatalogSource;
use flowshelf_infra::config::load_browser_config;
use flowshelf_infra::home::default_config_path;
use flowshelf_types::config::BrowserConfig;
use flowshelf_types::view::ViewState;

pub struct AppState {
    pub config: BrowserConfig,
    pub source: CatalogSource,
    pub catalog: Catalog,
}

impl AppState {
    /// Load config and catalog. `catalog` and `config_path` come from CLI
    /// flags and take precedence over config file values.
    pub fn init(catalog: Option<PathBuf>, config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.unwrap_or_else(default_config_path);
        let config = load_browser_config(&config_path);

        let source = match (catalog, &config.catalog) {
            (Some(path), _) => CatalogSource::from_path_or_missing(path),
            (None, Some(path)) => {
                CatalogSource::from_path_or_missing(resolve_relative(&config_path, path))
            }
            (None, None) => CatalogSource::Sample,
        };

        let catalog = source
            .load()
            .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

        Ok(Self {
            config,
            source,
            catalog,
        })
    }

    /// Start a session over the loaded catalog. The view stays pending
    /// until the caller refreshes it.
    pub fn session(&self, state: ViewState) -> BrowserSession {
        BrowserSession::new(self.catalog.clone(), state)
    }

    pub fn page_meta(&self) -> PageMeta {
        PageMeta::from_config(&self.config)
    }
}

/// Paths in config.toml are relative to the file's directory.
fn resolve_relative(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    config_path
        .parent()
        .map(|dir| dir.join(path))
        .unwrap_or_else(|| path.to_path_buf())
}
