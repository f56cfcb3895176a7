//! Configuration file loading for the CLI
//!
//! Settings live in a TOML file with a single `[render]` table:
//!
//! ```toml
//! [render]
//! day_start = "09:00"
//! day_length = 720
//! width = 600
//! pixels_per_minute = 1.0
//! label_interval = 30
//! compact_height = 45.0
//! title = "Sample Event"
//! location = "Sample Location"
//! ```
//!
//! Every key is optional.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveTime;
use directories::ProjectDirs;
use log::{debug, info};
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;

/// Longest view the HTML renderer draws: one full day.
pub const MAX_DAY_LENGTH: i64 = 24 * 60;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Check value ranges that TOML types alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let render = &self.render;
        if render.day_length <= 0 || render.day_length > MAX_DAY_LENGTH {
            return Err(ConfigError::Validation(format!(
                "day_length must be between 1 and {MAX_DAY_LENGTH} minutes, got {}",
                render.day_length
            )));
        }
        if render.label_interval <= 0 {
            return Err(ConfigError::Validation(format!(
                "label_interval must be positive, got {}",
                render.label_interval
            )));
        }
        if render.width == 0 {
            return Err(ConfigError::Validation("width must be positive".to_string()));
        }
        if !render.pixels_per_minute.is_finite() || render.pixels_per_minute <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "pixels_per_minute must be a positive number, got {}",
                render.pixels_per_minute
            )));
        }
        if !render.compact_height.is_finite() || render.compact_height < 0.0 {
            return Err(ConfigError::Validation(format!(
                "compact_height must not be negative, got {}",
                render.compact_height
            )));
        }
        Ok(())
    }
}

/// How the HTML day view is drawn.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Wall-clock time of minute 0.
    #[serde(deserialize_with = "deserialize_clock_time")]
    day_start: NaiveTime,
    /// Minutes covered by the view.
    day_length: i64,
    /// Container width in pixels.
    width: u32,
    pixels_per_minute: f64,
    /// Minutes between time-gutter labels.
    label_interval: i64,
    /// Slots shorter than this many pixels show only the title.
    compact_height: f64,
    title: String,
    location: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            day_length: 720,
            width: 600,
            pixels_per_minute: 1.0,
            label_interval: 30,
            compact_height: 45.0,
            title: "Sample Event".to_string(),
            location: "Sample Location".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn day_start(&self) -> NaiveTime {
        self.day_start
    }

    pub fn day_length(&self) -> i64 {
        self.day_length
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn pixels_per_minute(&self) -> f64 {
        self.pixels_per_minute
    }

    pub fn label_interval(&self) -> i64 {
        self.label_interval
    }

    pub fn compact_height(&self) -> f64 {
        self.compact_height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

fn deserialize_clock_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, "%H:%M")
        .map_err(|e| de::Error::custom(format!("invalid day_start '{s}', expected HH:MM: {e}")))
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. `daylayout.toml` in the working directory
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read, parsed, or validated
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("daylayout.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "daylayout", "daylayout") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&content)?;
    Ok(config)
}

/// Parse and validate TOML configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_day_view() {
        let config = AppConfig::default();
        let render = config.render();
        assert_eq!(render.day_start(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(render.day_length(), 720);
        assert_eq!(render.width(), 600);
        assert_eq!(render.label_interval(), 30);
        assert_eq!(render.compact_height(), 45.0);
        assert_eq!(render.title(), "Sample Event");
        assert_eq!(render.location(), "Sample Location");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.render().day_length(), 720);
    }

    #[test]
    fn test_parse_partial_render_table() {
        let config = parse_config(
            r#"
            [render]
            day_start = "08:30"
            width = 800
            title = "Busy"
            "#,
        )
        .unwrap();
        let render = config.render();
        assert_eq!(render.day_start(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(render.width(), 800);
        assert_eq!(render.title(), "Busy");
        assert_eq!(render.location(), "Sample Location");
    }

    #[test]
    fn test_parse_rejects_bad_day_start() {
        let err = parse_config("[render]\nday_start = \"9am\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("day_start"));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(matches!(
            parse_config("[render]\ncolour = \"red\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_day_length_bounds() {
        assert!(parse_config("[render]\nday_length = 1440\n").is_ok());
        let err = parse_config("[render]\nday_length = 1441\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let err = parse_config(
            "[render]\nday_length = 9000000000000000000\nlabel_interval = 9000000000000000000\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("day_length"));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let err = parse_config("[render]\nlabel_interval = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let err = parse_config("[render]\npixels_per_minute = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = load_config(Some("/nonexistent/daylayout.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }
}
