//! Layered settings.
//!
//! Values are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (`--config`)
//! 3. `APOD_*` environment variables (e.g. `APOD_URL`, `APOD_LOG_FILE`)
//! 4. Command-line flags, applied by the binary
//!
//! ```toml
//! url = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json"
//! log_file = "/tmp/apod-gallery.log"
//! tile_width = 30
//! tile_height = 9
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::source::DEFAULT_FEED_URL;

const DEFAULT_TILE_WIDTH: u16 = 30;
const DEFAULT_TILE_HEIGHT: u16 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Feed URL used when no local file is given.
    pub url: String,

    /// Local feed file. Takes precedence over `url`.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Where tracing output goes. Defaults to the temp dir.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Width of one gallery tile in terminal cells.
    pub tile_width: u16,

    /// Height of one gallery tile in terminal cells.
    pub tile_height: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            file: None,
            log_file: None,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("url", DEFAULT_FEED_URL)?
            .set_default("tile_width", i64::from(DEFAULT_TILE_WIDTH))?
            .set_default("tile_height", i64::from(DEFAULT_TILE_HEIGHT))?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix("APOD"))
            .build()?
            .try_deserialize()?;

        Ok(settings.clamped())
    }

    /// Log file path, falling back to `apod-gallery.log` in the temp dir.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("apod-gallery.log"))
    }

    /// Keep tile sizes large enough to draw a border, thumbnail, and caption.
    fn clamped(mut self) -> Self {
        self.tile_width = self.tile_width.max(12);
        self.tile_height = self.tile_height.max(5);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.url, DEFAULT_FEED_URL);
        assert!(settings.file.is_none());
        assert_eq!(settings.tile_width, 30);
        assert_eq!(settings.tile_height, 9);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
url = "http://localhost:8000/data.json"
file = "feed.json"
tile_width = 40
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.url, "http://localhost:8000/data.json");
        assert_eq!(settings.file, Some(PathBuf::from("feed.json")));
        assert_eq!(settings.tile_width, 40);
        assert_eq!(settings.tile_height, 9);
    }

    #[test]
    fn test_tiny_tiles_are_clamped() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "tile_width = 2\ntile_height = 1").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.tile_width, 12);
        assert_eq!(settings.tile_height, 5);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/apod.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_log_path_default() {
        let settings = Settings::default();
        assert!(settings.log_path().ends_with("apod-gallery.log"));
    }
}
