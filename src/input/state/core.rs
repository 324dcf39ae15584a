//! Input state shared by the pointer and toolbar handlers.

use crate::config::Config;
use crate::draw::{DirtyTracker, Frame};
use crate::input::Options;
use crate::util::Rect;

/// Main input state containing the drawing session.
///
/// Holds the frame (all figures plus history), the toolbar options, and the
/// redraw bookkeeping. Pointer and toolbar events mutate it; the rendering
/// surface polls `needs_redraw` and drains [`InputState::take_dirty_regions`]
/// whenever it repaints.
pub struct InputState {
    /// Figures, current figure and undo/redo history
    pub frame: Frame,
    /// Current tool, color, fill, mode and gesture anchor
    pub options: Options,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the surface after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by the surface after configuration)
    pub screen_height: u32,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_defaults(Options::new(), Frame::new())
    }
}

impl InputState {
    /// Creates an input state from explicit options and an existing frame.
    ///
    /// Screen dimensions default to 0 and should be updated by the surface
    /// (see `update_screen_dimensions`).
    pub fn with_defaults(options: Options, frame: Frame) -> Self {
        Self {
            frame,
            options,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
            dirty_tracker: DirtyTracker::new(),
        }
    }

    /// Creates an input state with the toolbar defaults and hit-test
    /// precision taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.options(),
            Frame::with_hit_tolerance(config.hit_test.flatten_tolerance),
        )
    }

    /// Updates the surface dimensions used for full-surface damage.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Marks the current figure's area dirty, if there is one.
    pub(crate) fn mark_current_dirty(&mut self) {
        if let Some(figure) = self.frame.current_figure() {
            self.dirty_tracker.mark_figure(figure);
        }
    }

    /// Marks the whole surface dirty and requests a redraw.
    pub(crate) fn mark_everything_dirty(&mut self) {
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
    }
}
