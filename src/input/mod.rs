//! Input handling and toolbar state.
//!
//! This module translates pointer gestures and toolbar commands into edits on
//! the drawing frame. It keeps the options chosen on the toolbar (figure kind,
//! color, fill, draw or select mode) and the anchor of the gesture in progress.

pub mod action;
pub mod mode;
pub mod options;
pub mod state;

// Re-export commonly used types at module level
pub use action::Action;
pub use mode::InteractionMode;
pub use options::Options;
pub use state::InputState;
