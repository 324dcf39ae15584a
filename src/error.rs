//! Error kinds reported by the drawing engine.

use thiserror::Error;

/// Which history stack an undo/redo request tried to pop from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStack {
    Undo,
    Redo,
}

impl std::fmt::Display for HistoryStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryStack::Undo => f.write_str("undo"),
            HistoryStack::Redo => f.write_str("redo"),
        }
    }
}

/// Failures raised by figure geometry, the figure frame, and the options model.
///
/// None of these are fatal: the operation that produced them leaves the
/// drawing exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// Negative anchor coordinates or a shift that would move the anchor off-canvas
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Figure or tool name outside the supported set
    #[error("figure type '{0}' is not supported")]
    UnsupportedType(String),

    /// A mutation targeted the current figure while none was selected
    #[error("no current figure selected")]
    NoSelection,

    /// Undo or redo with nothing left on the stack
    #[error("{0} stack is empty")]
    HistoryEmpty(HistoryStack),
}

pub type DrawResult<T> = Result<T, DrawError>;
