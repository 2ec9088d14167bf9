use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::Config;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TICK_CONFIG";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Pick the config file: an explicit path wins, then `$TICK_CONFIG`.
pub fn config_path(explicit: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Load the effective config. Defaults apply when no file is named.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let env_value = std::env::var(CONFIG_ENV).ok();
    match config_path(explicit, env_value.as_deref()) {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::view::{Composition, SortOption};
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[view]
composition = "exclusive"
sticky_sort = false
default_sort = "z-a"

[ui]
show_key_hints = false

[ui.colors]
highlight = "#FF0000"
"##
    }

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tick.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.view.composition, Composition::Exclusive);
        assert!(!config.view.sticky_sort);
        assert_eq!(config.view.default_sort, SortOption::ZToA);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").map(String::as_str), Some("#FF0000"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.toml");
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[view]\ncomposition = \"sideways\"\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().starts_with("could not parse"));
    }

    #[test]
    fn test_config_path_precedence() {
        let explicit = Path::new("/tmp/a.toml");
        assert_eq!(
            config_path(Some(explicit), Some("/tmp/b.toml")),
            Some(PathBuf::from("/tmp/a.toml"))
        );
        assert_eq!(
            config_path(None, Some("/tmp/b.toml")),
            Some(PathBuf::from("/tmp/b.toml"))
        );
        assert_eq!(config_path(None, Some("")), None);
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn test_load_explicit_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tick.toml");
        fs::write(&path, "[view]\ndefault_sort = \"oldest\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.view.default_sort, SortOption::Oldest);
    }
}
