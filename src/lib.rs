//! Drawing-state engine for an interactive 2-D shape editor.
//!
//! Exposes the figure model and history-backed frame ([`draw`]), the pointer
//! and toolbar handling that edits them ([`input`]), configuration, and the
//! gesture-script replay used by the `shapeboard` binary.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;

pub use config::Config;
pub use error::{DrawError, DrawResult};
