//! `C <width> <height>`: create or replace the canvas.

use super::args::parse_ints;
use crate::error::{CommandResult, InvalidInput};
use crate::grid::Grid;

/// Build a fresh blank canvas. Any existing canvas is discarded.
pub(super) fn run(input: &str) -> CommandResult<Grid> {
    let [width, height] = parse_ints::<2>(input)?;
    let grid = Grid::new(width, height).map_err(|_| InvalidInput::Canvas(input.to_string()))?;
    log::info!("Created {}x{} canvas", grid.width(), grid.height());
    Ok(grid)
}
