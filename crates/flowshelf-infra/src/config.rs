//! Browser configuration loader.
//!
//! Reads `config.toml` and deserializes it into [`BrowserConfig`]. Falls back
//! to defaults when the file is missing or malformed; configuration problems
//! never stop the browser from opening.

use std::path::Path;

use flowshelf_types::config::BrowserConfig;

/// Load configuration from `path`.
///
/// - Missing file: defaults.
/// - Unreadable or unparsable file: logs a warning and returns defaults.
pub fn load_browser_config(path: &Path) -> BrowserConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return BrowserConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return BrowserConfig::default();
        }
    };

    match toml::from_str::<BrowserConfig>(&content) {
        Ok(config) => {
            if config.grid_columns != config.effective_grid_columns() {
                tracing::warn!(
                    requested = config.grid_columns,
                    used = config.effective_grid_columns(),
                    "grid_columns out of range"
                );
            }
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            BrowserConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowshelf_types::view::{LayoutMode, SortKey};
    use tempfile::TempDir;

    #[test]
    fn load_browser_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_browser_config(&tmp.path().join("config.toml"));
        assert_eq!(config, BrowserConfig::default());
    }

    #[test]
    fn load_browser_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
catalog = "catalog.json"
default_sort = "platform"
default_layout = "list"
grid_columns = 2
"#,
        )
        .unwrap();

        let config = load_browser_config(&path);
        assert_eq!(config.catalog.as_deref(), Some(Path::new("catalog.json")));
        assert_eq!(config.default_sort, SortKey::Platform);
        assert_eq!(config.default_layout, LayoutMode::List);
        assert_eq!(config.grid_columns, 2);
    }

    #[test]
    fn load_browser_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "this is not { valid toml !!!").unwrap();

        assert_eq!(load_browser_config(&path), BrowserConfig::default());
    }

    #[test]
    fn load_browser_config_bad_layout_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "default_layout = \"carousel\"").unwrap();

        assert_eq!(load_browser_config(&path), BrowserConfig::default());
    }
}
