//! Game settings
//!
//! Read once at startup from JSON: the canvas `data-config` attribute on the
//! web, a file named by `FUEL_RUSH_CONFIG` natively. Any field may be omitted.
//! Settings are never written back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::CarTuning;

/// Environment variable naming a JSON settings file (native only)
pub const CONFIG_ENV_VAR: &str = "FUEL_RUSH_CONFIG";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Entities of each kind placed at startup
    pub entity_count: usize,
    /// Car handling
    pub car: CarTuning,
    /// Fuel burned every frame
    pub fuel_drain_per_frame: f32,
    /// Score per frame while fuel remains
    pub survival_bonus: f32,

    // === Arena (headless only; the browser uses the canvas size) ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Frames the headless runner simulates
    pub headless_frames: u64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            entity_count: DEFAULT_ENTITY_COUNT,
            car: CarTuning::default(),
            fuel_drain_per_frame: FUEL_DRAIN_PER_FRAME,
            survival_bonus: SURVIVAL_BONUS,

            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            headless_frames: DEFAULT_HEADLESS_FRAMES,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Why settings could not be loaded
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse settings, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the file named by `FUEL_RUSH_CONFIG`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("{}; using default settings", SettingsError::from(e));
                Self::default()
            }
        }
    }

    /// Seed to generate the world with
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }
}
