//! Frame container for the figure sequence, the current figure, and history.

use super::color::Color;
use super::figure::{Figure, FigureKind};
use super::history::History;
use super::outline::DEFAULT_TOLERANCE;
use crate::error::{DrawError, DrawResult};
use log::{debug, warn};

/// All figures in the drawing plus the editing state around them.
///
/// Figures are stored newest first: index 0 is the most recently created
/// figure and is painted last (on top). The current figure is held as an index
/// into the live sequence and is dropped whenever the sequence is replaced.
#[derive(Debug, Clone)]
pub struct Frame {
    figures: Vec<Figure>,
    current: Option<usize>,
    history: History,
    hit_tolerance: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Creates an empty frame with no history.
    pub fn new() -> Self {
        Self::with_hit_tolerance(DEFAULT_TOLERANCE)
    }

    /// Creates an empty frame whose hit-tests flatten curves to `tolerance`.
    pub fn with_hit_tolerance(tolerance: f64) -> Self {
        Self {
            figures: Vec::new(),
            current: None,
            history: History::new(),
            hit_tolerance: tolerance,
        }
    }

    /// Creates a figure at the front of the sequence and makes it current.
    ///
    /// On failure the error is logged and the frame is unchanged.
    pub fn create_figure(
        &mut self,
        kind: FigureKind,
        x: f64,
        y: f64,
        color: Color,
        fill: bool,
    ) -> DrawResult<()> {
        let figure = Figure::new(kind, x, y, color, fill)
            .inspect_err(|err| warn!("Could not create {kind}: {err}"))?;
        self.figures.insert(0, figure);
        self.current = Some(0);
        debug!("Created {kind} at ({x}, {y})");
        Ok(())
    }

    /// Replaces the current figure's bounding box.
    pub fn update_current_bound(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> DrawResult<()> {
        self.with_current("bound update", |figure| {
            figure.update_bound(x, y, width, height)
        })
    }

    pub fn update_current_color(&mut self, color: Color) -> DrawResult<()> {
        self.with_current("color update", |figure| {
            figure.update_color(color);
            Ok(())
        })
    }

    pub fn update_current_fill(&mut self, fill: bool) -> DrawResult<()> {
        self.with_current("fill update", |figure| {
            figure.update_fill(fill);
            Ok(())
        })
    }

    /// Moves the current figure by `(dx, dy)`.
    pub fn shift_current(&mut self, dx: f64, dy: f64) -> DrawResult<()> {
        self.with_current("shift", |figure| figure.shift(dx, dy))
    }

    fn with_current<F>(&mut self, what: &str, apply: F) -> DrawResult<()>
    where
        F: FnOnce(&mut Figure) -> DrawResult<()>,
    {
        let Some(figure) = self.current.and_then(|index| self.figures.get_mut(index)) else {
            warn!("Ignoring {what}: no current figure");
            return Err(DrawError::NoSelection);
        };
        apply(figure).inspect_err(|err| warn!("Rejected {what}: {err}"))
    }

    /// Makes the topmost figure meeting the probe at `(x, y)` current.
    ///
    /// The sequence is scanned newest first, so the most recently created
    /// figure wins. When nothing is hit the selection is cleared.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidArgument`] for negative coordinates; the
    /// selection is left as it was.
    pub fn select_top_contains(&mut self, x: f64, y: f64) -> DrawResult<()> {
        if !(x >= 0.0 && y >= 0.0) {
            let err = DrawError::InvalidArgument(format!(
                "selection point ({x}, {y}) must be non-negative"
            ));
            warn!("{err}");
            return Err(err);
        }

        let tolerance = self.hit_tolerance;
        self.current = self
            .figures
            .iter()
            .position(|figure| figure.contains_with_tolerance(x, y, tolerance));

        match self.current_figure() {
            Some(figure) => debug!("Selected {} at ({x}, {y})", figure.kind()),
            None => debug!("Nothing to select at ({x}, {y})"),
        }
        Ok(())
    }

    /// Ends the current edit gesture.
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Removes every figure. History is kept, so the removal can be undone
    /// only if the caller saved a snapshot first.
    pub fn clear_all(&mut self) {
        self.figures.clear();
        self.current = None;
    }

    /// Records a deep copy of the live sequence for a later undo.
    pub fn save_history(&mut self) {
        self.history.record(self.figures.clone());
    }

    /// Restores the previous snapshot. The selection is always dropped.
    pub fn undo(&mut self) -> DrawResult<()> {
        self.history
            .step_back(&mut self.figures)
            .inspect_err(|err| debug!("Undo ignored: {err}"))?;
        self.current = None;
        debug!("Undo: {} figures restored", self.figures.len());
        Ok(())
    }

    /// Re-applies the most recently undone snapshot. The selection is always dropped.
    pub fn redo(&mut self) -> DrawResult<()> {
        self.history
            .step_forward(&mut self.figures)
            .inspect_err(|err| debug!("Redo ignored: {err}"))?;
        self.current = None;
        debug!("Redo: {} figures restored", self.figures.len());
        Ok(())
    }

    /// Figures, newest first.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn current_figure(&self) -> Option<&Figure> {
        self.current.and_then(|index| self.figures.get(index))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn has_current(&self) -> bool {
        self.current_figure().is_some()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, PINK};
    use crate::draw::history::MAX_UNDO_DEPTH;

    fn frame_with_rectangle() -> Frame {
        let mut frame = Frame::new();
        frame
            .create_figure(FigureKind::Rectangle, 10.0, 10.0, BLACK, true)
            .unwrap();
        frame
    }

    #[test]
    fn create_figure_inserts_at_front_and_selects() {
        let mut frame = frame_with_rectangle();
        assert_eq!(frame.current_index(), Some(0));
        let current = frame.current_figure().unwrap();
        assert_eq!(current.kind(), FigureKind::Rectangle);
        assert_eq!(current.attributes(), (10.0, 10.0, 0.0, 0.0, BLACK, true));

        frame
            .create_figure(FigureKind::Moon, 3.0, 4.0, PINK, false)
            .unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.figures()[0].kind(), FigureKind::Moon);
        assert_eq!(frame.figures()[1].kind(), FigureKind::Rectangle);
        assert_eq!(frame.current_index(), Some(0));
    }

    #[test]
    fn create_figure_with_negative_anchor_changes_nothing() {
        let mut frame = frame_with_rectangle();
        frame.clear_current();
        let err = frame
            .create_figure(FigureKind::Line, -1.0, 5.0, BLACK, false)
            .unwrap_err();
        assert!(matches!(err, DrawError::InvalidArgument(_)));
        assert_eq!(frame.len(), 1);
        assert!(!frame.has_current());
    }

    #[test]
    fn update_current_applies_every_overload() {
        let mut frame = frame_with_rectangle();
        frame.update_current_bound(0.0, 0.0, 10.0, 10.0).unwrap();
        frame.update_current_color(PINK).unwrap();
        frame.update_current_fill(false).unwrap();
        assert_eq!(
            frame.current_figure().unwrap().attributes(),
            (0.0, 0.0, 10.0, 10.0, PINK, false)
        );
    }

    #[test]
    fn updates_without_selection_fail() {
        let mut frame = frame_with_rectangle();
        frame.clear_current();
        assert!(frame.current_figure().is_none());
        assert_eq!(
            frame.update_current_bound(10.0, 10.0, 10.0, 10.0),
            Err(DrawError::NoSelection)
        );
        assert_eq!(frame.update_current_color(PINK), Err(DrawError::NoSelection));
        assert_eq!(frame.update_current_fill(false), Err(DrawError::NoSelection));
        assert_eq!(frame.shift_current(1.0, 1.0), Err(DrawError::NoSelection));
        assert_eq!(
            frame.figures()[0].attributes(),
            (10.0, 10.0, 0.0, 0.0, BLACK, true)
        );
    }

    #[test]
    fn rejected_bound_update_leaves_figure_untouched() {
        let mut frame = frame_with_rectangle();
        assert!(frame.update_current_bound(-1.0, 0.0, 5.0, 5.0).is_err());
        assert_eq!(
            frame.current_figure().unwrap().attributes(),
            (10.0, 10.0, 0.0, 0.0, BLACK, true)
        );
        assert!(frame.has_current());
    }

    #[test]
    fn shift_current_rejects_moves_off_canvas() {
        let mut frame = frame_with_rectangle();
        assert!(matches!(
            frame.shift_current(-15.0, -15.0),
            Err(DrawError::InvalidArgument(_))
        ));
        let figure = frame.current_figure().unwrap();
        assert_eq!((figure.x(), figure.y()), (10.0, 10.0));

        frame.shift_current(15.0, 15.0).unwrap();
        let figure = frame.current_figure().unwrap();
        assert_eq!((figure.x(), figure.y()), (25.0, 25.0));
    }

    #[test]
    fn select_top_contains_prefers_newest() {
        let mut frame = frame_with_rectangle();
        frame
            .create_figure(FigureKind::Ellipse, 10.0, 10.0, PINK, false)
            .unwrap();
        frame.update_current_bound(10.0, 10.0, 10.0, 10.0).unwrap();
        frame
            .create_figure(FigureKind::DiagonalCross, 10.0, 10.0, PINK, false)
            .unwrap();
        frame.update_current_bound(10.0, 10.0, 10.0, 10.0).unwrap();

        // Cross on top at its center.
        frame.select_top_contains(15.0, 15.0).unwrap();
        assert_eq!(frame.current_index(), Some(0));
        assert_eq!(
            frame.current_figure().unwrap().kind(),
            FigureKind::DiagonalCross
        );

        // Between the cross arms the ellipse underneath is hit.
        frame.select_top_contains(11.0, 15.0).unwrap();
        assert_eq!(frame.current_figure().unwrap().kind(), FigureKind::Ellipse);

        // The zero-sized rectangle at the bottom is never hit; neither is empty canvas.
        frame.select_top_contains(0.0, 0.0).unwrap();
        assert!(frame.current_figure().is_none());
    }

    #[test]
    fn select_rejects_negative_point() {
        let mut frame = frame_with_rectangle();
        assert!(matches!(
            frame.select_top_contains(-1.0, -1.0),
            Err(DrawError::InvalidArgument(_))
        ));
        assert_eq!(frame.current_index(), Some(0));
    }

    #[test]
    fn save_history_stores_independent_copy() {
        let mut frame = frame_with_rectangle();
        frame.save_history();
        assert_eq!(frame.history().undo_len(), 1);

        frame.update_current_bound(1.0, 1.0, 5.0, 5.0).unwrap();
        let saved = frame.history().undo_snapshots().next().unwrap();
        assert_eq!(saved[0].attributes(), (10.0, 10.0, 0.0, 0.0, BLACK, true));
        assert_ne!(saved[0], frame.figures()[0]);
    }

    #[test]
    fn undo_then_redo_round_trips_a_mutation() {
        let mut frame = frame_with_rectangle();
        let before = frame.figures().to_vec();

        frame.save_history();
        frame.update_current_bound(40.0, 40.0, 3.0, 3.0).unwrap();
        let after = frame.figures().to_vec();

        frame.undo().unwrap();
        assert_eq!(frame.figures(), before.as_slice());
        assert!(!frame.has_current());

        frame.redo().unwrap();
        assert_eq!(frame.figures(), after.as_slice());
        assert!(!frame.has_current());
    }

    #[test]
    fn history_scenario_caps_and_navigates() {
        let mut frame = frame_with_rectangle();
        frame.save_history();
        frame
            .create_figure(FigureKind::Rectangle, 0.0, 0.0, PINK, true)
            .unwrap();
        for i in 1..=11 {
            frame.save_history();
            frame
                .update_current_bound(i as f64, i as f64, 0.0, 0.0)
                .unwrap();
        }

        assert_eq!(frame.history().undo_len(), MAX_UNDO_DEPTH);
        assert_eq!(frame.history().redo_len(), 0);
        assert_eq!(frame.current_figure().unwrap().x(), 11.0);

        frame.undo().unwrap();
        frame.undo().unwrap();
        let state9 = frame.figures().to_vec();
        frame.undo().unwrap();
        assert_eq!(frame.figures()[0].x(), 8.0);
        assert_eq!(frame.history().undo_len(), 7);
        assert_eq!(frame.history().redo_len(), 3);

        frame.redo().unwrap();
        assert_eq!(frame.figures(), state9.as_slice());
        assert_eq!(frame.figures()[0].x(), 9.0);

        frame.save_history();
        frame
            .create_figure(FigureKind::Rectangle, 12.0, 12.0, PINK, true)
            .unwrap();
        assert_eq!(frame.history().undo_len(), 9);
        assert_eq!(frame.history().redo_len(), 0);
    }

    #[test]
    fn oldest_snapshot_is_evicted() {
        let mut frame = frame_with_rectangle();
        for i in 1..=11 {
            frame.save_history();
            frame
                .update_current_bound(i as f64, 0.0, 0.0, 0.0)
                .unwrap();
        }
        assert_eq!(frame.history().undo_len(), MAX_UNDO_DEPTH);
        // The untouched rectangle (x = 10) is gone from the tail; the newest
        // snapshot also reads 10 because it was taken after the tenth update.
        let xs: Vec<f64> = frame
            .history()
            .undo_snapshots()
            .map(|snapshot| snapshot[0].x())
            .collect();
        assert_eq!(xs, vec![10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn undo_and_redo_on_empty_history_fail_without_change() {
        let mut frame = frame_with_rectangle();
        assert!(matches!(frame.undo(), Err(DrawError::HistoryEmpty(_))));
        assert!(matches!(frame.redo(), Err(DrawError::HistoryEmpty(_))));
        assert_eq!(frame.len(), 1);
        assert!(frame.has_current());
    }

    #[test]
    fn clear_all_empties_figures_but_keeps_history() {
        let mut frame = frame_with_rectangle();
        frame.save_history();
        frame.clear_all();
        assert!(frame.is_empty());
        assert!(!frame.has_current());
        assert_eq!(frame.history().undo_len(), 1);

        frame.undo().unwrap();
        assert_eq!(frame.len(), 1);
    }
}
