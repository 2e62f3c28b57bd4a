use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ToolError;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_icons")]
    pub icons: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icons: default_icons(),
        }
    }
}

fn default_icons() -> bool {
    true
}

#[derive(Debug, Deserialize, Default)]
pub struct LogConfig {
    pub filter: Option<String>,
    pub path: Option<PathBuf>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("amine").join("config.toml"))
}

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("amine")
        .join("am.log")
}

/// Loads the config.
///
/// An explicit path must exist and parse. Without one, the default location
/// is tried and any problem there falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ToolError> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)?;
        return parse_config(&content, path);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Ok(Config::default());
    };

    Ok(parse_config(&content, &path).unwrap_or_default())
}

fn parse_config(content: &str, path: &Path) -> Result<Config, ToolError> {
    toml::from_str(content).map_err(|source| ToolError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("", Path::new("config.toml")).unwrap();
        assert!(config.display.icons);
        assert!(config.log.filter.is_none());
        assert!(config.log.path.is_none());
    }

    #[test]
    fn reads_all_sections() {
        let content = r#"
            [display]
            icons = false

            [log]
            filter = "amine_core=debug"
            path = "/tmp/am.log"
        "#;
        let config = parse_config(content, Path::new("config.toml")).unwrap();
        assert!(!config.display.icons);
        assert_eq!(config.log.filter.as_deref(), Some("amine_core=debug"));
        assert_eq!(config.log.path, Some(PathBuf::from("/tmp/am.log")));
    }

    #[test]
    fn explicit_path_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(matches!(load_config(Some(path.as_path())), Err(ToolError::Io(_))));

        std::fs::write(&path, "[display]\nicons = \"maybe\"\n").unwrap();
        assert!(matches!(
            load_config(Some(path.as_path())),
            Err(ToolError::Config { .. })
        ));
    }
}
