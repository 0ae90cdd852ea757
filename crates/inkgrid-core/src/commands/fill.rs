//! `B <x> <y> <color>`: flood-fill a blank region.

use std::collections::{HashSet, VecDeque};

use super::args::{Span, parse_int, require_canvas, split_args};
use crate::error::{CommandResult, InvalidInput};
use crate::grid::{Grid, Pos};

pub(super) fn run(input: &str, state: Option<&Grid>) -> CommandResult<Grid> {
    let grid = require_canvas(state, input)?;
    let [x, y, color] = split_args::<3>(input)?;
    let x = parse_int(x, input)?;
    let y = parse_int(y, input)?;

    let target = Span::point(x, y);
    if !target.fits(grid) {
        return Err(InvalidInput::Overflowed {
            target: "point",
            line: input.to_string(),
        }
        .into());
    }
    let (start, _) = target.corners();
    if !grid.is_blank(start) {
        return Err(InvalidInput::NotFillable(input.to_string()).into());
    }

    let mut chars = color.chars();
    let color = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(InvalidInput::Color(input.to_string()).into()),
    };

    Ok(flood_fill(grid, start, color))
}

/// Breadth-first, 4-connected fill of the blank region containing `start`.
///
/// Non-blank cells reached by the traversal are marked visited but neither
/// recoloured nor expanded.
fn flood_fill(grid: &Grid, start: Pos, color: char) -> Grid {
    let mut next = grid.clone();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([start]);
    let mut filled = 0usize;

    while let Some(pos) = queue.pop_front() {
        if visited.contains(&pos) || !next.in_bounds(pos) {
            continue;
        }
        visited.insert(pos);
        if !next.is_blank(pos) {
            continue;
        }
        next.set(pos, color);
        filled += 1;
        queue.extend(pos.neighbors());
    }

    log::trace!("Filled {} cells from ({}, {}) with {:?}", filled, start.x, start.y, color);
    next
}
