//! Configuration system
//!
//! Tuning values for the placement core, loadable from TOML or RON files.
//! Defaults reproduce the literal values the demo shipped with.

use crate::foundation::math::{constants, Vec3};
use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Tuning values for placement, selection, and gesture actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Screen-space radius (in points) around the focus point within which an
    /// entity becomes selected
    pub selection_radius: f32,

    /// Divisor for the focus point's vertical position:
    /// `y = height - height / focus_bias`. The golden-ratio default biases
    /// the focus above true center.
    pub focus_bias: f32,

    /// Seconds of held gesture per applied action increment
    pub action_tick_interval: f32,

    /// Radians of Y-axis rotation applied per rotate tick
    pub rotate_step: f32,

    /// World units of vertical translation applied per move tick
    pub lift_step: f32,

    /// Uniform scale newly placed heroes start at
    pub initial_scale: f32,

    /// World-space offset from a hero's origin to its selection indicator
    pub indicator_offset: Vec3,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            selection_radius: 50.0,
            focus_bias: constants::GOLDEN_RATIO,
            action_tick_interval: 0.1,
            rotate_step: 0.1 * constants::PI,
            lift_step: 0.05,
            initial_scale: 0.1,
            indicator_offset: Vec3::new(0.0, 0.2, 0.0),
        }
    }
}

impl Config for PlacerConfig {}
