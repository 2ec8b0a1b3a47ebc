//! Host settings
//!
//! Loaded from a JSON file; gameplay rules are not configurable.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_H, VIEWPORT_W};

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport size in pixels (one pixel = one world unit)
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Frame rate the host loop aims for
    pub target_fps: u32,
    /// Session seed; `None` picks one at startup
    pub seed: Option<u64>,
    /// Extra margin around the viewport before food is culled
    pub cull_margin: f32,
    /// How long the headless demo runs (seconds of simulation)
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_W,
            viewport_height: VIEWPORT_H,
            target_fps: 60,
            seed: None,
            cull_margin: 10.0,
            demo_seconds: 60.0,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "BLOB_ARENA_SETTINGS";
    /// Settings file used when the environment variable is unset
    pub const DEFAULT_PATH: &'static str = "blob_arena.json";

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Fixed frame delta-time for the target frame rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode settings: {}", e);
                String::new()
            }
        }
    }

    /// Load settings from the configured file, falling back to defaults
    pub fn load() -> Self {
        let path = std::env::var(Self::PATH_ENV).unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "target_fps": 30 }"#).expect("parse");
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.target_fps, 30);
        assert_eq!(settings.viewport_width, VIEWPORT_W);
        assert!((settings.frame_dt() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            demo_seconds: 5.0,
            ..Default::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()).expect("parse"), settings);
    }

    #[test]
    fn test_to_json_is_never_empty() {
        let settings = Settings {
            cull_margin: f32::NAN,
            ..Default::default()
        };
        // Non-finite floats encode as null instead of failing
        let json = settings.to_json();
        assert!(json.contains("\"cull_margin\": null"));
        assert!(!Settings::default().to_json().is_empty());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/definitely/not/here.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_zero_fps_guarded() {
        let settings = Settings {
            target_fps: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_dt(), 1.0);
    }
}
