use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::{DirectoryConfig, ThemePreference};
use crate::error::Result;
use crate::store::fs::JsonFileSource;
use crate::store::CatalogSource;
use showroom::ColorMode;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(ThemePreference),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = DirectoryConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DirectoryConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DirectoryConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            // A saved catalog must load, or every later command would fail
            if let Some(path) = config.catalog_path.as_deref().filter(|_| key == "catalog") {
                if let Err(e) = JsonFileSource::new(path).load().and_then(Catalog::new) {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(format!(
                        "Cannot use catalog {}: {}",
                        path.display(),
                        e
                    )));
                    return Ok(result);
                }
            }
            config.save(dir)?;
            info!(key = %key, value = %value, "config updated");

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

/// Shows or changes the theme preference. `detect` reports the system
/// appearance and is only consulted when the preference is `system`.
pub fn theme(
    dir: &Path,
    action: ThemeAction,
    detect: impl FnOnce() -> ColorMode,
) -> Result<CmdResult> {
    let mut config = DirectoryConfig::load(dir)?;
    let next = match action {
        ThemeAction::Show => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("Theme: {}", config.theme)));
            return Ok(result.with_config(config));
        }
        ThemeAction::Toggle => config.theme.toggled_with(detect),
        ThemeAction::Set(preference) => preference,
    };

    config.theme = next;
    config.save(dir)?;
    info!(theme = %next, "theme updated");

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!("Theme set to {}", next)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::SortBy;
    use crate::store::memory::fixtures::scenario_tools;
    use crate::store::CatalogDocument;
    use tempfile::tempdir;

    #[test]
    fn show_all_returns_defaults_without_a_file() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(DirectoryConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("default-sort".into(), "newest".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "default-sort set to newest");

        let loaded = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_sort, SortBy::Newest);
    }

    #[test]
    fn invalid_values_are_reported_and_not_saved() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("debounce-ms".into(), "fast".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unreadable_catalog_path_is_not_saved() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let result = run(
            dir.path(),
            ConfigAction::Set("catalog".into(), missing.display().to_string()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(result.messages[0].content.starts_with("Cannot use catalog"));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn readable_catalog_path_is_saved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tools.json");
        let document = CatalogDocument::new(scenario_tools());
        std::fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("catalog".into(), path.display().to_string()),
        )
        .unwrap();
        assert!(!result.has_errors());
        let loaded = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.catalog_path, Some(path));

        run(
            dir.path(),
            ConfigAction::Set("catalog".into(), "bundled".into()),
        )
        .unwrap();
        let loaded = DirectoryConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.catalog_path, None);
    }

    #[test]
    fn show_key_reads_single_value() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("debounce-ms".into())).unwrap();
        assert_eq!(result.messages[0].content, "300");

        let result = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.has_errors());
    }

    #[test]
    fn toggle_from_system_flips_detected_mode() {
        let dir = tempdir().unwrap();
        let result = theme(dir.path(), ThemeAction::Toggle, || ColorMode::Dark).unwrap();
        assert_eq!(result.config.unwrap().theme, ThemePreference::Light);

        let result = theme(dir.path(), ThemeAction::Toggle, || ColorMode::Dark).unwrap();
        assert_eq!(result.config.unwrap().theme, ThemePreference::Dark);
    }

    #[test]
    fn explicit_theme_is_persisted() {
        let dir = tempdir().unwrap();
        theme(
            dir.path(),
            ThemeAction::Set(ThemePreference::Light),
            || ColorMode::Dark,
        )
        .unwrap();
        let result = theme(dir.path(), ThemeAction::Show, || ColorMode::Dark).unwrap();
        assert_eq!(result.messages[0].content, "Theme: light");
    }
}
