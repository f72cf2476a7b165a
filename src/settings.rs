//! Run settings
//!
//! Loaded from a JSON file by the native binary. Missing sections fall back
//! to their defaults, so a settings file only needs the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::Playfield;
use crate::tuning::Tuning;

/// Default seed so unconfigured runs are reproducible
pub const DEFAULT_SEED: u64 = 0x5EED_BA77_1E;

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("playfield must have positive dimensions, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
}

/// Simulation run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield bounds
    pub playfield: Playfield,
    /// RNG seed for the run
    pub seed: u64,
    /// Ticks the headless driver simulates
    pub demo_ticks: u32,
    /// Balance table
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            seed: DEFAULT_SEED,
            // One minute at 60 frames per second
            demo_ticks: 60 * 60,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let Playfield { width, height } = self.playfield;
        if !(width > 0.0 && height > 0.0) {
            return Err(SettingsError::InvalidPlayfield { width, height });
        }
        Ok(())
    }

    /// Serialize to pretty JSON (used to dump the effective settings)
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_yields_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides_playfield_and_seed() {
        let settings =
            Settings::from_json_str(r#"{ "playfield": { "width": 320, "height": 240 }, "seed": 7 }"#)
                .unwrap();
        assert_eq!(settings.playfield, Playfield::new(320.0, 240.0));
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_rejects_degenerate_playfield() {
        let err = Settings::from_json_str(r#"{ "playfield": { "width": 0, "height": 600 } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidPlayfield { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json_str("{ seed: }").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = Settings::default().to_json().unwrap();
        assert_eq!(Settings::from_json_str(&json).unwrap(), Settings::default());
    }
}
