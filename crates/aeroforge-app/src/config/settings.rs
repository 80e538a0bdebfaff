//! Settings parser for the aeroforge config.toml

use std::path::{Path, PathBuf};

use aeroforge_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const AEROFORGE_DIR: &str = "aeroforge";

/// Path of the user config directory (`~/.config/aeroforge`).
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(AEROFORGE_DIR)
}

/// Load settings from the user config directory, falling back to defaults.
pub fn load_settings() -> Settings {
    load_settings_from(&config_dir())
}

/// Load settings from a specific directory.
///
/// Missing file and parse errors both fall back to defaults; a broken
/// config never prevents startup.
pub fn load_settings_from(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(temp.path());

        assert_eq!(settings.ui.syntax_theme, "base16-ocean.dark");
        assert!(settings.ui.highlight);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[ui]
highlight = false

[defaults]
text = "Launch"
"#;
        std::fs::write(temp.path().join(CONFIG_FILENAME), config).unwrap();

        let settings = load_settings_from(temp.path());
        assert!(!settings.ui.highlight);
        assert_eq!(settings.defaults.text, "Launch");
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "not [valid toml").unwrap();

        let settings = load_settings_from(temp.path());
        assert_eq!(settings.defaults.text, "Accept");
    }
}
