use crate::draw::FigureKind;
use crate::input::InteractionMode;
use log::debug;

use super::InputState;

/// Signed extent of a line dragged from `anchor` to `(x2, y2)`.
///
/// With `aspect_lock` the smaller component is zeroed, snapping the line to
/// horizontal or vertical.
pub(crate) fn line_extent(anchor: (f64, f64), x2: f64, y2: f64, aspect_lock: bool) -> (f64, f64) {
    let dx = x2 - anchor.0;
    let dy = y2 - anchor.1;
    if !aspect_lock {
        (dx, dy)
    } else if dx.abs() > dy.abs() {
        (dx, 0.0)
    } else {
        (0.0, dy)
    }
}

/// Box `(x, y, width, height)` spanned by dragging from `anchor` to `(x2, y2)`.
///
/// Width and height are non-negative and `(x, y)` is always the top-left
/// corner of the dragged rectangle. With `aspect_lock` both sides take the
/// smaller extent, measured from the anchor.
pub(crate) fn drag_box(
    anchor: (f64, f64),
    x2: f64,
    y2: f64,
    aspect_lock: bool,
) -> (f64, f64, f64, f64) {
    let (ax, ay) = anchor;
    let mut width = (x2 - ax).abs();
    let mut height = (y2 - ay).abs();
    if aspect_lock {
        let side = width.min(height);
        width = side;
        height = side;
    }

    let (x, y) = if x2 <= ax && y2 <= ay {
        (ax - width, ay - height)
    } else if x2 <= ax && y2 >= ay {
        (ax - width, ay)
    } else if x2 >= ax && y2 <= ay {
        (ax, ay - height)
    } else {
        (ax, ay)
    };
    (x, y, width, height)
}

impl InputState {
    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Records `(x, y)` as the gesture anchor
    /// - Draw mode: snapshots history, then creates a figure of the current
    ///   kind at the anchor with the current color and fill
    /// - Select mode: selects the topmost figure under the pointer, or clears
    ///   the selection if nothing is there
    ///
    /// Rejected coordinates are logged and the event is dropped.
    pub fn on_pointer_press(&mut self, x: f64, y: f64) {
        if let Err(err) = self.options.set_start_point(x, y) {
            debug!("Ignoring pointer press: {err}");
            return;
        }

        match self.options.mode() {
            InteractionMode::Draw => {
                self.frame.save_history();
                let created = self.frame.create_figure(
                    self.options.figure_kind(),
                    x,
                    y,
                    self.options.color(),
                    self.options.fill(),
                );
                if created.is_ok() {
                    self.mark_current_dirty();
                    self.needs_redraw = true;
                }
            }
            InteractionMode::Select => {
                if self.frame.select_top_contains(x, y).is_ok() {
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// Processes pointer motion with the button held.
    ///
    /// # Arguments
    /// * `x2`, `y2` - Current pointer position
    /// * `aspect_lock` - Whether the aspect-lock modifier is held
    ///
    /// # Behavior
    /// - No current figure: nothing happens
    /// - Draw mode: resizes the current figure between the anchor and the
    ///   pointer (lines keep their direction, other kinds are normalized)
    /// - Select mode: moves the current figure by the pointer's movement
    ///   since the previous event
    pub fn on_pointer_drag(&mut self, x2: f64, y2: f64, aspect_lock: bool) {
        if !self.frame.has_current() {
            return;
        }

        // Damage the old area before the figure changes
        self.mark_current_dirty();

        let result = match self.options.mode() {
            InteractionMode::Draw => {
                let anchor = self.options.anchor();
                if self.options.figure_kind() == FigureKind::Line {
                    let (dx, dy) = line_extent(anchor, x2, y2, aspect_lock);
                    self.frame.update_current_bound(anchor.0, anchor.1, dx, dy)
                } else {
                    let (x, y, width, height) = drag_box(anchor, x2, y2, aspect_lock);
                    self.frame.update_current_bound(x, y, width, height)
                }
            }
            InteractionMode::Select => {
                let dx = self.options.take_x_diff(x2);
                let dy = self.options.take_y_diff(y2);
                self.frame.shift_current(dx, dy)
            }
        };

        if result.is_ok() {
            self.mark_current_dirty();
            self.needs_redraw = true;
        }
    }

    /// Processes the pointer release.
    ///
    /// Ends the draw gesture by clearing the current figure; a selection made
    /// in select mode stays current.
    pub fn on_pointer_release(&mut self) {
        if self.options.is_draw_mode() {
            self.frame.clear_current();
        }
    }
}
