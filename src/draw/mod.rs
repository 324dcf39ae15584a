//! Figure model, geometry, and the drawing frame.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`Figure`]: one shape kind inside a signed bounding box
//! - [`Outline`]: the concrete geometry a figure resolves to, with hit-testing
//! - [`Frame`]: the ordered figure sequence, current figure, and undo/redo history
//! - [`DirtyTracker`]: damage regions for the rendering surface

pub mod color;
pub mod dirty;
pub mod figure;
pub mod frame;
pub mod history;
pub mod outline;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use figure::{Figure, FigureKind};
pub use frame::Frame;
pub use history::{History, MAX_UNDO_DEPTH};
pub use outline::Outline;

pub use color::{BLACK, BLUE, DEFAULT_PALETTE, GREEN, ORANGE, PINK, RED, WHITE};
