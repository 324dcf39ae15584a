//! Drawing options chosen on the toolbar.

use super::mode::InteractionMode;
use crate::draw::{Color, DEFAULT_PALETTE, FigureKind};
use crate::error::{DrawError, DrawResult};
use log::warn;

/// Current tool, palette position, fill flag and mode, plus the last pointer
/// anchor used to compute incremental drag deltas.
#[derive(Debug, Clone)]
pub struct Options {
    palette: Vec<Color>,
    color_index: usize,
    fill: bool,
    mode: InteractionMode,
    figure_kind: FigureKind,
    anchor_x: f64,
    anchor_y: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Options with the default palette, no fill, draw mode and the line tool.
    pub fn new() -> Self {
        Self::with_defaults(
            DEFAULT_PALETTE.to_vec(),
            FigureKind::Line,
            false,
            InteractionMode::Draw,
        )
    }

    /// Creates options with a custom palette and starting selections.
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn with_defaults(
        palette: Vec<Color>,
        figure_kind: FigureKind,
        fill: bool,
        mode: InteractionMode,
    ) -> Self {
        let palette = if palette.is_empty() {
            warn!("Empty palette, using the default colors");
            DEFAULT_PALETTE.to_vec()
        } else {
            palette
        };

        Self {
            palette,
            color_index: 0,
            fill,
            mode,
            figure_kind,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }

    /// Advances to the next palette color, wrapping around, and returns it.
    pub fn toggle_color(&mut self) -> Color {
        self.color_index = (self.color_index + 1) % self.palette.len();
        self.color()
    }

    /// Flips the fill flag and returns the new value.
    pub fn toggle_fill(&mut self) -> bool {
        self.fill = !self.fill;
        self.fill
    }

    /// Switches between draw and select mode and returns the new mode.
    pub fn toggle_mode(&mut self) -> InteractionMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Selects the figure kind by its toolbar name.
    ///
    /// # Errors
    /// Returns [`DrawError::UnsupportedType`] for names outside
    /// {line, rectangle, ellipse, cross, triangle, heart, moon}.
    pub fn set_figure_type(&mut self, name: &str) -> DrawResult<()> {
        self.figure_kind = name.parse()?;
        Ok(())
    }

    pub fn set_figure_kind(&mut self, kind: FigureKind) {
        self.figure_kind = kind;
    }

    /// Records the pointer-down position as the gesture anchor.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidArgument`] if either coordinate is negative.
    pub fn set_start_point(&mut self, x: f64, y: f64) -> DrawResult<()> {
        if x >= 0.0 && y >= 0.0 {
            self.anchor_x = x;
            self.anchor_y = y;
            Ok(())
        } else {
            Err(DrawError::InvalidArgument(format!(
                "start point ({x}, {y}) must be non-negative"
            )))
        }
    }

    /// Returns `x2` minus the stored anchor x, then stores `x2` as the new anchor x.
    pub fn take_x_diff(&mut self, x2: f64) -> f64 {
        let diff = x2 - self.anchor_x;
        self.anchor_x = x2;
        diff
    }

    /// Returns `y2` minus the stored anchor y, then stores `y2` as the new anchor y.
    pub fn take_y_diff(&mut self, y2: f64) -> f64 {
        let diff = y2 - self.anchor_y;
        self.anchor_y = y2;
        diff
    }

    pub fn color(&self) -> Color {
        self.palette[self.color_index]
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_draw_mode(&self) -> bool {
        self.mode == InteractionMode::Draw
    }

    pub fn figure_kind(&self) -> FigureKind {
        self.figure_kind
    }

    pub fn anchor(&self) -> (f64, f64) {
        (self.anchor_x, self.anchor_y)
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}
