//! Bordered text rendering of a grid.

use crate::grid::Grid;

/// Character used for the top and bottom border.
pub const HORIZONTAL_BORDER: char = '-';

/// Character used at the start and end of every row.
pub const VERTICAL_BORDER: char = '|';

/// Render the current state, or an empty string when no canvas exists yet.
pub fn render(grid: Option<&Grid>) -> String {
    grid.map(render_grid).unwrap_or_default()
}

/// Wrap the grid in a one-character border.
///
/// The top and bottom lines are `width + 2` dashes; each content row is
/// framed with `|`. Lines are joined with `\n` and there is no trailing
/// newline.
pub fn render_grid(grid: &Grid) -> String {
    let edge: String = std::iter::repeat_n(HORIZONTAL_BORDER, grid.width() + 2).collect();
    let mut lines = Vec::with_capacity(grid.height() + 2);
    lines.push(edge.clone());
    for row in grid.rows() {
        lines.push(format!("{VERTICAL_BORDER}{row}{VERTICAL_BORDER}"));
    }
    lines.push(edge);
    lines.join("\n")
}
