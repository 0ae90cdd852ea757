//! Argument parsing and coordinate normalisation shared by the commands.

use crate::error::InvalidInput;
use crate::grid::{Grid, Pos};

/// Split `line` into exactly `N` arguments following the keyword.
pub(crate) fn split_args<const N: usize>(line: &str) -> Result<[&str; N], InvalidInput> {
    let format_error = || InvalidInput::Format(line.to_string());
    let mut tokens = line.split_whitespace().skip(1);
    let mut args = [""; N];
    for slot in args.iter_mut() {
        *slot = tokens.next().ok_or_else(format_error)?;
    }
    if tokens.next().is_some() {
        return Err(format_error());
    }
    Ok(args)
}

/// Parse one integer argument.
pub(crate) fn parse_int(token: &str, line: &str) -> Result<i64, InvalidInput> {
    token
        .parse::<i64>()
        .map_err(|_| InvalidInput::Format(line.to_string()))
}

/// Split and parse exactly `N` integer arguments.
pub(crate) fn parse_ints<const N: usize>(line: &str) -> Result<[i64; N], InvalidInput> {
    let tokens = split_args::<N>(line)?;
    let mut values = [0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = parse_int(token, line)?;
    }
    Ok(values)
}

/// Borrow the current canvas, failing if none has been created.
pub(crate) fn require_canvas<'a>(state: Option<&'a Grid>, line: &str) -> Result<&'a Grid, InvalidInput> {
    state.ok_or_else(|| InvalidInput::Uninitialized(line.to_string()))
}

/// An inclusive box in 1-based canvas coordinates with `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Span {
    /// Build a span from two corners given in any order.
    pub fn normalized(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// A span covering a single point.
    pub fn point(x: i64, y: i64) -> Self {
        Self::normalized(x, y, x, y)
    }

    /// Check the span against the grid extents using 1-based inclusive bounds.
    pub fn fits(&self, grid: &Grid) -> bool {
        let width = i64::try_from(grid.width()).unwrap_or(i64::MAX);
        let height = i64::try_from(grid.height()).unwrap_or(i64::MAX);
        self.x1 >= 1 && self.x2 <= width && self.y1 >= 1 && self.y2 <= height
    }

    /// The top-left and bottom-right corners in 0-based grid coordinates.
    ///
    /// Only meaningful once [`Span::fits`] has accepted the span.
    pub fn corners(&self) -> (Pos, Pos) {
        let to_index = |v: i64| (v - 1).max(0) as usize;
        (
            Pos::new(to_index(self.x1), to_index(self.y1)),
            Pos::new(to_index(self.x2), to_index(self.y2)),
        )
    }
}
