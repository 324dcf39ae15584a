//! Configuration file support for shapeboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/shapeboard/config.toml`. Settings include the starting toolbar
//! selections, the color palette, and hit-test precision.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, HitTestConfig};

use crate::draw::{Color, FigureKind};
use crate::input::{InteractionMode, Options};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub drawing: DrawingConfig,

    #[serde(default)]
    pub hit_test: HitTestConfig,
}

impl Config {
    fn validate_and_clamp(&mut self) {
        if self.drawing.default_tool.parse::<FigureKind>().is_err() {
            warn!(
                "Invalid default_tool '{}', falling back to 'line'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "line".to_string();
        }

        if self.drawing.default_mode.parse::<InteractionMode>().is_err() {
            warn!(
                "Invalid default_mode '{}', falling back to 'draw'",
                self.drawing.default_mode
            );
            self.drawing.default_mode = "draw".to_string();
        }

        if self.drawing.palette.is_empty() {
            warn!("Empty palette, restoring the default colors");
            self.drawing.palette = DrawingConfig::default().palette;
        }

        // Flatten tolerance: 0.01 - 1.0
        let tolerance = self.hit_test.flatten_tolerance;
        if !(0.01..=1.0).contains(&tolerance) {
            warn!(
                "Invalid flatten_tolerance {:.3}, clamping to 0.01-1.0 range",
                tolerance
            );
            self.hit_test.flatten_tolerance = if tolerance.is_nan() {
                HitTestConfig::default().flatten_tolerance
            } else {
                tolerance.clamp(0.01, 1.0)
            };
        }
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("shapeboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the user config, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Reads, parses and validates the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Builds the starting toolbar options described by this config.
    ///
    /// Values are expected to have passed validation; anything unparsable
    /// falls back to the built-in default.
    pub fn options(&self) -> Options {
        let palette: Vec<Color> = self.drawing.palette.iter().map(ColorSpec::to_color).collect();
        let kind = self.drawing.default_tool.parse().unwrap_or(FigureKind::Line);
        let mode = self.drawing.default_mode.parse().unwrap_or_default();

        Options::with_defaults(palette, kind, self.drawing.default_fill, mode)
    }
}
