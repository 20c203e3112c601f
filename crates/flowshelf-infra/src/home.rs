use std::path::PathBuf;

/// Environment variable overriding the flowshelf home directory.
pub const HOME_ENV: &str = "FLOWSHELF_HOME";

/// Resolve the flowshelf home directory.
///
/// Priority:
/// 1. `FLOWSHELF_HOME` environment variable
/// 2. `~/.flowshelf`
/// 3. `./.flowshelf` when no home directory can be found
pub fn resolve_home_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".flowshelf");
    }

    PathBuf::from(".flowshelf")
}

/// Default location of `config.toml`.
pub fn default_config_path() -> PathBuf {
    resolve_home_dir().join("config.toml")
}
