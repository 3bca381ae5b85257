use crate::error::{DirectoryError, Result};
use crate::model::SortBy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use showroom::ColorMode;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Overrides the config directory (used by tests and portable installs).
pub const HOME_ENV: &str = "TOOLDIR_HOME";

/// Keys accepted by `tooldir config`.
pub const KEYS: [&str; 4] = ["theme", "debounce-ms", "default-sort", "catalog"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// The concrete mode to draw with. `System` asks the OS.
    pub fn resolve(self) -> ColorMode {
        self.resolve_with(ColorMode::detect)
    }

    pub fn resolve_with(self, detect: impl FnOnce() -> ColorMode) -> ColorMode {
        match self {
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
            ThemePreference::System => detect(),
        }
    }

    /// Flips between light and dark. From `System` the flip is relative to
    /// what the system currently shows.
    pub fn toggled(self) -> Self {
        self.toggled_with(ColorMode::detect)
    }

    pub fn toggled_with(self, detect: impl FnOnce() -> ColorMode) -> Self {
        match self.resolve_with(detect).toggled() {
            ColorMode::Light => ThemePreference::Light,
            ColorMode::Dark => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        })
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(format!(
                "Invalid theme '{}': expected light, dark or system",
                other
            )),
        }
    }
}

/// User preferences, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub theme: ThemePreference,

    /// Quiet window for live search, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub default_sort: SortBy,

    /// Catalog file to use instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_sort: SortBy::default(),
            catalog_path: None,
        }
    }
}

impl DirectoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DirectoryConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }

    /// Current value of a config key, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "theme" => Some(self.theme.to_string()),
            "debounce-ms" => Some(self.debounce_ms.to_string()),
            "default-sort" => Some(self.default_sort.to_string()),
            "catalog" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(bundled)".to_string()),
            ),
            _ => None,
        }
    }

    /// Parses and sets a config key. The error is a user-facing message.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "theme" => self.theme = value.parse()?,
            "debounce-ms" => {
                self.debounce_ms = value
                    .parse()
                    .map_err(|_| format!("Invalid debounce-ms '{}': expected milliseconds", value))?
            }
            "default-sort" => {
                self.default_sort = value.parse().map_err(|e| format!("{}", e))?;
            }
            "catalog" => {
                self.catalog_path = match value {
                    "" | "bundled" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

/// Where `config.json` lives: `$TOOLDIR_HOME` if set, else the platform
/// config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "tooldir", "tooldir")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DirectoryError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.theme, ThemePreference::System);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.default_sort, SortBy::Popular);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = DirectoryConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = DirectoryConfig::default();
        config.set("theme", "dark").unwrap();
        config.set("default-sort", "name").unwrap();
        config.save(dir.path().join("nested")).unwrap();

        let loaded = DirectoryConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded.theme, ThemePreference::Dark);
        assert_eq!(loaded.default_sort, SortBy::Name);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"theme":"light","somethingElse":1}"#,
        )
        .unwrap();
        let loaded = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.theme, ThemePreference::Light);
        assert_eq!(loaded.debounce_ms, 300);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = DirectoryConfig::default();
        assert!(config.set("theme", "sepia").is_err());
        assert!(config.set("debounce-ms", "soon").is_err());
        assert!(config.set("default-sort", "rating").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_catalog_key() {
        let mut config = DirectoryConfig::default();
        assert_eq!(config.get("catalog").unwrap(), "(bundled)");
        config.set("catalog", "/tmp/tools.json").unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/tools.json")));
        config.set("catalog", "bundled").unwrap();
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = DirectoryConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "{key}");
        }
        assert!(config.get("nope").is_none());
    }

    #[test]
    fn test_theme_resolution_and_toggle() {
        let dark = || ColorMode::Dark;
        assert_eq!(ThemePreference::System.resolve_with(dark), ColorMode::Dark);
        assert_eq!(ThemePreference::Light.resolve_with(dark), ColorMode::Light);
        assert_eq!(
            ThemePreference::System.toggled_with(dark),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::Light.toggled_with(dark),
            ThemePreference::Dark
        );
    }
}
