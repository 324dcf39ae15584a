//! Interaction mode selection.

use std::fmt;
use std::str::FromStr;

/// What a pointer gesture on the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// Pointer-down creates a new figure and dragging sizes it (default)
    #[default]
    Draw,
    /// Pointer-down picks the topmost figure and dragging moves it
    Select,
}

impl InteractionMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Draw => Self::Select,
            Self::Select => Self::Draw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InteractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draw" => Ok(Self::Draw),
            "select" => Ok(Self::Select),
            other => Err(format!("unknown interaction mode '{other}'")),
        }
    }
}
