use crate::draw::Frame;
use crate::error::DrawResult;
use crate::input::Action;
use log::{debug, info, warn};

use super::InputState;

impl InputState {
    /// Processes a toolbar command by name.
    ///
    /// # Errors
    /// Returns [`crate::error::DrawError::UnsupportedType`] for an unknown
    /// command; nothing changes. Every recognized command succeeds, with any
    /// failure inside it logged and ignored.
    pub fn handle_command(&mut self, name: &str) -> DrawResult<()> {
        let action = name
            .parse::<Action>()
            .inspect_err(|err| warn!("Ignoring toolbar command: {err}"))?;
        self.handle_action(action);
        Ok(())
    }

    /// Applies a toolbar action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::ToggleFill => {
                let fill = self.options.toggle_fill();
                self.apply_to_current(|frame| frame.update_current_fill(fill));
                self.needs_redraw = true;
            }
            Action::CycleColor => {
                let color = self.options.toggle_color();
                self.apply_to_current(|frame| frame.update_current_color(color));
                self.needs_redraw = true;
            }
            Action::ToggleMode => {
                let mode = self.options.toggle_mode();
                info!("Switched to {mode} mode");
                self.needs_redraw = true;
            }
            Action::Undo => {
                if self.frame.undo().is_ok() {
                    self.mark_everything_dirty();
                }
            }
            Action::Redo => {
                if self.frame.redo().is_ok() {
                    self.mark_everything_dirty();
                }
            }
            Action::ClearAll => {
                self.frame.clear_all();
                self.mark_everything_dirty();
            }
            Action::SelectTool(kind) => {
                self.options.set_figure_kind(kind);
                debug!("Selected the {kind} tool");
                self.needs_redraw = true;
            }
        }
    }

    /// Snapshots history and applies `update` to the current figure, if any.
    fn apply_to_current<F>(&mut self, update: F)
    where
        F: FnOnce(&mut Frame) -> DrawResult<()>,
    {
        if !self.frame.has_current() {
            return;
        }

        self.frame.save_history();
        if update(&mut self.frame).is_ok() {
            self.mark_current_dirty();
        }
    }
}
