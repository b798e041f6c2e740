//! Canvas configuration.

use crate::error::ConfigError;
use crate::shapes::TintColor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default hit-test tolerance in view units.
pub const DEFAULT_HIT_TOLERANCE: f64 = 6.0;

/// When rotation input is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Rotation always applies to finished items.
    #[default]
    Always,
    /// Rotation applies only while the rotate tool is switched on.
    RotateToolGated,
}

/// Tunables for a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Tint for newly created items.
    pub default_tint: TintColor,
    pub rotation_policy: RotationPolicy,
    /// Initial state of the rotate tool toggle.
    pub rotate_tool_enabled: bool,
    /// Distance within which a point counts as touching an item.
    pub hit_tolerance: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_tint: TintColor::black(),
            rotation_policy: RotationPolicy::default(),
            rotate_tool_enabled: true,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
