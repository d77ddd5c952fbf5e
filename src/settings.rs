//! Game settings
//!
//! Defaults come from [`crate::consts`]. A JSON file may override any subset
//! of fields; its path is read from `LINES_INTERSECTION_CONFIG`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Environment variable naming an optional settings file
pub const CONFIG_ENV_VAR: &str = "LINES_INTERSECTION_CONFIG";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Logical screen size in pixels
    pub screen_width: u32,
    pub screen_height: u32,
    /// Background grid spacing
    pub cell_size: u32,
    /// Box displacement per tick while a key is held
    pub move_speed: i32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Player box edge length
    pub box_size: i32,
    /// Intersection marker edge length
    pub marker_size: f32,
    /// Optional render rate cap (frames per second); `None` spins freely
    pub frame_cap: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: GAME_TITLE.to_string(),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            move_speed: MOVE_SPEED,
            tick_rate: TICK_RATE,
            box_size: BOX_SIZE,
            marker_size: MARKER_SIZE,
            frame_cap: None,
        }
    }
}

impl Settings {
    /// Fixed timestep in seconds
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    /// Reject values the loop or layout can't work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, reason| Err(SettingsError::Invalid { field, reason });

        if self.screen_width == 0 {
            return invalid("screen_width", "must be positive");
        }
        if self.screen_height == 0 {
            return invalid("screen_height", "must be positive");
        }
        if self.cell_size == 0 {
            return invalid("cell_size", "must be positive");
        }
        if self.move_speed <= 0 {
            return invalid("move_speed", "must be positive");
        }
        if self.tick_rate == 0 {
            return invalid("tick_rate", "must be positive");
        }
        if self.box_size <= 0 {
            return invalid("box_size", "must be positive");
        }
        let size = self.box_size as u32;
        if size > self.screen_width / 3 || size > self.screen_height / 3 {
            return invalid("box_size", "boxes must fit between the starting thirds");
        }
        if !(self.marker_size.is_finite() && self.marker_size > 0.0) {
            return invalid("marker_size", "must be a positive number");
        }
        if self.frame_cap == Some(0) {
            return invalid("frame_cap", "must be positive when set");
        }
        Ok(())
    }

    /// Parse settings from JSON text; missing fields keep their defaults
    pub fn from_json(json: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.title, "Lines Intersection");
        assert_eq!((s.screen_width, s.screen_height), (960, 640));
        assert_eq!(s.cell_size, 32);
        assert_eq!(s.move_speed, 5);
        assert_eq!(s.tick_rate, 60);
        assert!((s.tick_duration() - 1.0 / 60.0).abs() < 1e-12);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "move_speed": 3, "frame_cap": 144 }"#;
        let s = Settings::from_json(json, Path::new("test.json")).unwrap();
        assert_eq!(s.move_speed, 3);
        assert_eq!(s.frame_cap, Some(144));
        assert_eq!(s.screen_width, SCREEN_WIDTH);
        assert_eq!(s.title, GAME_TITLE);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            tick_rate: 120,
            ..Default::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json, Path::new("x.json")).unwrap(), s);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Settings::from_json(r#"{ "tick_rate": 0 }"#, Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "tick_rate", .. }));

        let s = Settings {
            cell_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            s.validate(),
            Err(SettingsError::Invalid { field: "cell_size", .. })
        ));

        let s = Settings {
            box_size: 400,
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Settings::from_json("{ not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
