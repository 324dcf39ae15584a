//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::outline::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the toolbar selections when the board first opens. Users can
/// change all of them at runtime with toolbar commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initial figure kind: line, rectangle, ellipse, cross, triangle, heart or moon
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Whether new figures start filled
    #[serde(default)]
    pub default_fill: bool,

    /// Initial interaction mode: "draw" or "select"
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Colors cycled by the `color` command, first entry is the starting color.
    /// Each entry is a color name or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_fill: false,
            default_mode: default_mode(),
            palette: default_palette(),
        }
    }
}

/// Containment test settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitTestConfig {
    /// Maximum distance between a curve and its flattened polyline when
    /// testing whether a click lands on a figure (valid range: 0.01 - 1.0)
    #[serde(default = "default_flatten_tolerance")]
    pub flatten_tolerance: f64,
}

impl Default for HitTestConfig {
    fn default() -> Self {
        Self {
            flatten_tolerance: default_flatten_tolerance(),
        }
    }
}

fn default_tool() -> String {
    "line".to_string()
}

fn default_mode() -> String {
    "draw".to_string()
}

fn default_palette() -> Vec<ColorSpec> {
    ["orange", "blue", "pink", "green", "red"]
        .into_iter()
        .map(|name| ColorSpec::Name(name.to_string()))
        .collect()
}

fn default_flatten_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
