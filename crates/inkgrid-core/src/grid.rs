//! Character canvas grid.

use std::fmt;
use thiserror::Error;

/// Value of a cell that has never been drawn on or filled.
pub const BLANK: char = ' ';

/// Character used for line and rectangle edges.
pub const MARKER: char = 'x';

/// Grid construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
}

/// A cell position in 0-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours, skipping those that would underflow.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        [
            self.x.checked_sub(1).map(|x| Pos::new(x, self.y)),
            self.x.checked_add(1).map(|x| Pos::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Pos::new(self.x, y)),
            self.y.checked_add(1).map(|y| Pos::new(self.x, y)),
        ]
        .into_iter()
        .flatten()
    }
}

/// A rectangular, row-major buffer of single-character cells.
///
/// Cells are stored flat, `width * height` of them, so every row has exactly
/// `width` cells. Grids are treated as snapshots: commands clone the grid
/// they were given and mutate only the clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a blank grid of `width` columns by `height` rows.
    ///
    /// Fails when either dimension is below 1 or the cell buffer cannot be
    /// allocated.
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidDimensions { width, height };
        if width < 1 || height < 1 {
            return Err(invalid());
        }
        let w = usize::try_from(width).map_err(|_| invalid())?;
        let h = usize::try_from(height).map_err(|_| invalid())?;
        let area = w.checked_mul(h).ok_or_else(invalid)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(area).map_err(|e| {
            log::warn!("Cannot allocate {}x{} canvas: {}", w, h, e);
            invalid()
        })?;
        cells.resize(area, BLANK);
        Ok(Self {
            width: w,
            height: h,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether a 0-based position lies inside the grid.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.y * self.width + pos.x)
    }

    /// Get the character at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Pos) -> Option<char> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Check whether the cell at `pos` is blank. Out-of-bounds cells are not.
    pub fn is_blank(&self, pos: Pos) -> bool {
        self.get(pos) == Some(BLANK)
    }

    /// Overwrite the cell at `pos`.
    ///
    /// Callers must pass an in-bounds position; anything else is ignored.
    pub(crate) fn set(&mut self, pos: Pos, ch: char) {
        debug_assert!(self.in_bounds(pos), "write outside grid at {:?}", pos);
        if let Some(i) = self.index(pos) {
            self.cells[i] = ch;
        }
    }

    /// Iterate over rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width).map(|row| row.iter().collect())
    }

    /// Number of cells holding `ch`.
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&c| c == ch).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_grid(self))
    }
}
