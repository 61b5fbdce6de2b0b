//! Guard configuration loaded from JSON.
//!
//! Every field is optional and falls back to the prototype defaults.
//! Numeric values are clamped when converted into a [`Guard`], never
//! rejected, so a configuration file cannot produce an invalid guard; the
//! only failures are unreadable or unparseable files.

use std::fs;
use std::path::Path;

use bevy::prelude::Resource;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    DEFAULT_DETECTION_RADIUS, DEFAULT_INNER_ANGLE, DEFAULT_INNER_RADIUS_FACTOR,
    DEFAULT_OUTER_ANGLE, DEFAULT_PLAYER_TAG, MAX_CONE_ANGLE,
};
use crate::guard::Guard;

/// Errors raised while loading a guard configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read guard config from {path}: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file contents were not valid JSON for this schema.
    #[error("failed to parse guard config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deserialisable guard parameters.
///
/// Inserted as a resource so the demo scene can pick it up; absent fields
/// take the prototype defaults.
#[derive(Debug, Clone, Deserialize, Resource)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Detection radius. Clamped to the minimum when applied.
    pub radius: f32,
    /// Tag identifying the player.
    pub player_tag: String,
    /// Fraction of the radius lit at full intensity.
    pub inner_radius_factor: f32,
    /// Outer cone angle in degrees.
    pub outer_angle: f32,
    /// Inner cone angle in degrees.
    pub inner_angle: f32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DETECTION_RADIUS,
            player_tag: DEFAULT_PLAYER_TAG.to_owned(),
            inner_radius_factor: DEFAULT_INNER_RADIUS_FACTOR,
            outer_angle: DEFAULT_OUTER_ANGLE,
            inner_angle: DEFAULT_INNER_ANGLE,
        }
    }
}

impl GuardConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON for
    /// this schema.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Builds a [`Guard`] from this configuration, clamping the radius and
    /// keeping cone angles within `[0, 360]` degrees.
    #[must_use]
    pub fn to_guard(&self) -> Guard {
        let mut guard = Guard::new(self.radius);
        guard.player_tag.clone_from(&self.player_tag);
        guard.inner_radius_factor = self.inner_radius_factor;
        guard.outer_angle = self.outer_angle.clamp(0.0, MAX_CONE_ANGLE);
        guard.inner_angle = self.inner_angle.clamp(0.0, MAX_CONE_ANGLE);
        guard
    }
}
