//! Utility functions for color names and damage rectangles.
//!
//! This module provides:
//! - Color name lookup for the configuration file and CLI output
//! - The integer rectangle used for dirty region tracking

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse palette entries.
///
/// # Supported Names (case-insensitive)
/// - "orange", "blue", "pink", "green", "red", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "orange" => Some(ORANGE),
        "blue" => Some(BLUE),
        "pink" => Some(PINK),
        "green" => Some(GREEN),
        "red" => Some(RED),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Only exact palette matches are named; anything else is "custom".
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMED: [(Color, &str); 7] = [
        (ORANGE, "orange"),
        (BLUE, "blue"),
        (PINK, "pink"),
        (GREEN, "green"),
        (RED, "red"),
        (WHITE, "white"),
        (BLACK, "black"),
    ];
    NAMED
        .iter()
        .find(|(named, _)| named == color)
        .map_or("custom", |(_, name)| *name)
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Extents wider than `i32::MAX` are clamped to it.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_color_mappings_agree() {
        assert_eq!(name_to_color("Orange").unwrap(), ORANGE);
        assert_eq!(name_to_color("black").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());

        for color in DEFAULT_PALETTE {
            assert_eq!(name_to_color(color_to_name(&color)), Some(color));
        }
    }

    #[test]
    fn color_to_name_falls_back_to_custom() {
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42, 1.0)), "custom");
    }

    #[test]
    fn rect_extent_saturates_instead_of_overflowing() {
        let rect = Rect::from_min_max(i32::MIN, -3, i32::MAX, i32::MAX).unwrap();
        assert_eq!((rect.width, rect.height), (i32::MAX, i32::MAX));
        assert!(Rect::from_min_max(i32::MAX, 0, i32::MIN, 5).is_none());
    }

    #[test]
    fn rect_rejects_empty_extent() {
        assert!(Rect::new(0, 0, 0, 5).is_none());
        assert!(Rect::from_min_max(4, 4, 2, 8).is_none());
        assert_eq!(
            Rect::from_min_max(1, 2, 4, 6),
            Some(Rect {
                x: 1,
                y: 2,
                width: 3,
                height: 4
            })
        );
    }
}
