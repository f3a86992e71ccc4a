use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Startup options read from `config.toml` in the platform config
/// directory. Every field has a default so a missing or partial file
/// still yields a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collection opened when the command line names none.
    pub default_collection: Option<PathBuf>,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_collection: None,
            window_width: 1280,
            window_height: 860,
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vellum")
            .join("config.toml")
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("ignoring malformed config at {}: {err}", path.display());
                    Self::default()
                }
            },
            // A missing file is the normal first run.
            Err(_) => Self::default(),
        }
    }

    pub fn window_size(&self) -> iced::Size {
        iced::Size::new(self.window_width as f32, self.window_height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/vellum/config.toml"));
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 860);
        assert!(config.default_collection.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let path = temp_config(
            "vellum_config_full.toml",
            "default_collection = \"/tmp/apis.json\"\nwindow_width = 1600\nwindow_height = 1000\n",
        );
        let config = Config::load_from(&path);
        assert_eq!(
            config.default_collection,
            Some(PathBuf::from("/tmp/apis.json"))
        );
        assert_eq!(config.window_width, 1600);
        assert_eq!(config.window_height, 1000);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let path = temp_config("vellum_config_partial.toml", "window_width = 900\n");
        let config = Config::load_from(&path);
        assert_eq!(config.window_width, 900);
        assert_eq!(config.window_height, 860);
        assert!(config.default_collection.is_none());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let path = temp_config("vellum_config_bad.toml", "window_width = \"wide\"\n");
        let config = Config::load_from(&path);
        assert_eq!(config.window_width, 1280);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_config_path_is_scoped_to_the_app() {
        let path = Config::config_path();
        assert!(path.ends_with("vellum/config.toml"));
    }
}
