//! Toolbar commands.

use crate::draw::FigureKind;
use crate::error::DrawError;
use std::str::FromStr;

/// A command sent by the options surface.
///
/// Parsed from the toolbar's command names: `fill`, `color`, `select`, `undo`,
/// `redo`, `clear`, or the name of a figure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleFill,
    CycleColor,
    /// Switch between draw and select mode
    ToggleMode,
    Undo,
    Redo,
    ClearAll,
    SelectTool(FigureKind),
}

impl FromStr for Action {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill" => Ok(Self::ToggleFill),
            "color" => Ok(Self::CycleColor),
            "select" => Ok(Self::ToggleMode),
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            "clear" => Ok(Self::ClearAll),
            other => other.parse::<FigureKind>().map(Self::SelectTool),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toolbar_names() {
        assert_eq!("fill".parse::<Action>(), Ok(Action::ToggleFill));
        assert_eq!("select".parse::<Action>(), Ok(Action::ToggleMode));
        assert_eq!("clear".parse::<Action>(), Ok(Action::ClearAll));
        assert_eq!(
            "cross".parse::<Action>(),
            Ok(Action::SelectTool(FigureKind::DiagonalCross))
        );
    }

    #[test]
    fn unknown_name_is_unsupported() {
        assert_eq!(
            "lasso".parse::<Action>(),
            Err(DrawError::UnsupportedType("lasso".to_string()))
        );
    }
}
