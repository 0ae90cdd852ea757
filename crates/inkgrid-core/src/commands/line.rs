//! `L <x1> <y1> <x2> <y2>`: draw a horizontal or vertical line.

use super::args::{Span, parse_ints, require_canvas};
use crate::error::{CommandResult, InvalidInput};
use crate::grid::{Grid, MARKER, Pos};

/// Axis of a line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Vertical wins when both endpoints coincide.
    fn of(x1: i64, y1: i64, x2: i64, y2: i64) -> Option<Self> {
        if x1 == x2 {
            Some(Orientation::Vertical)
        } else if y1 == y2 {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }
}

pub(super) fn run(input: &str, state: Option<&Grid>) -> CommandResult<Grid> {
    let grid = require_canvas(state, input)?;
    let [x1, y1, x2, y2] = parse_ints::<4>(input)?;
    let orientation =
        Orientation::of(x1, y1, x2, y2).ok_or_else(|| InvalidInput::NotALine(input.to_string()))?;

    let span = Span::normalized(x1, y1, x2, y2);
    if !span.fits(grid) {
        return Err(InvalidInput::Overflowed {
            target: "line",
            line: input.to_string(),
        }
        .into());
    }

    let (start, end) = span.corners();
    let mut next = grid.clone();
    match orientation {
        Orientation::Vertical => {
            for y in start.y..=end.y {
                next.set(Pos::new(start.x, y), MARKER);
            }
        }
        Orientation::Horizontal => {
            for x in start.x..=end.x {
                next.set(Pos::new(x, start.y), MARKER);
            }
        }
    }
    Ok(next)
}
