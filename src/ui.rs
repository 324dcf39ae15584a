//! Text rendering of the board: status line and figure listing
use crate::draw::{Figure, Frame};
use crate::input::InputState;

/// Describes the current toolbar selections, e.g.
/// `[draw] [rectangle] [orange] [outline]`.
pub fn status_text(input_state: &InputState) -> String {
    let options = &input_state.options;
    let color_name = crate::util::color_to_name(&options.color());
    let fill = if options.fill() { "filled" } else { "outline" };

    format!(
        "[{}] [{}] [{}] [{}]",
        options.mode(),
        options.figure_kind(),
        color_name,
        fill
    )
}

/// One line describing a figure's kind, box, color and fill.
pub fn describe_figure(figure: &Figure) -> String {
    format!(
        "{} x={} y={} w={} h={} color={} fill={}",
        figure.kind(),
        figure.x(),
        figure.y(),
        figure.width(),
        figure.height(),
        crate::util::color_to_name(&figure.color()),
        figure.fill()
    )
}

/// Lists the frame's figures in paint order (oldest first), marking the
/// current figure with `*`.
pub fn render_figures(frame: &Frame) -> Vec<String> {
    let current = frame.current_index();
    frame
        .figures()
        .iter()
        .enumerate()
        .rev()
        .map(|(index, figure)| {
            let marker = if Some(index) == current { '*' } else { ' ' };
            format!("{marker} {}", describe_figure(figure))
        })
        .collect()
}
