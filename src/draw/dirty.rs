//! Dirty region tracking for incremental redraws.
//!
//! Collects axis-aligned rectangles that need repainting between frames. The
//! owning surface drains them on its own schedule, so several mutations may be
//! coalesced into a single repaint.

use super::Figure;
use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the damage box for the given figure, or full damage if it has none.
    pub fn mark_figure(&mut self, figure: &Figure) {
        match figure.bounding_box() {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true if anything has been marked since the last drain.
    pub fn is_dirty(&self) -> bool {
        self.force_full || !self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            Rect::new(0, 0, width, height).into_iter().collect()
        } else {
            self.regions.drain(..).collect()
        }
    }
}
