//! Board grid with fit testing and rectangular region fill
//!
//! A board is a dense `height x width` grid of cells. Rows are indexed by `x`
//! and columns by `y`, so a placement at `(x, y)` with shape `h x w` covers
//! rows `x..x + h` and columns `y..y + w`.

use std::fmt;

use ndarray::{Array2, s};

use crate::spatial::piece::Shape;

/// Content of a single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Unoccupied position, rendered with the background marker
    #[default]
    Empty,
    /// Position covered by the piece carrying this identifier
    Piece(char),
}

impl Cell {
    /// Character used when printing this cell
    pub const fn symbol(self, background: char) -> char {
        match self {
            Self::Empty => background,
            Self::Piece(id) => id,
        }
    }
}

/// Rectangular target area being tiled
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Create an empty board of the given dimensions
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::Empty),
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Check whether `shape` can be placed with its top-left corner at `(x, y)`
    ///
    /// True iff the footprint lies within the board and every covered cell is
    /// currently empty. Never mutates the board.
    pub fn fits(&self, shape: Shape, x: usize, y: usize) -> bool {
        let (Some(bottom), Some(right)) = (x.checked_add(shape.height), y.checked_add(shape.width))
        else {
            return false;
        };
        if bottom > self.height() || right > self.width() {
            return false;
        }

        self.cells
            .slice(s![x..bottom, y..right])
            .iter()
            .all(|cell| *cell == Cell::Empty)
    }

    /// Set every cell of the `shape` footprint at `(x, y)` to `value`
    ///
    /// # Panics
    ///
    /// Panics if the footprint exceeds the board. Callers establish this with
    /// [`Board::fits`] first, so a violation is a bug in the caller.
    pub fn fill_region(&mut self, value: Cell, x: usize, y: usize, shape: Shape) {
        assert!(
            x + shape.height <= self.height() && y + shape.width <= self.width(),
            "region {}x{} at ({x}, {y}) exceeds {}x{} board",
            shape.height,
            shape.width,
            self.height(),
            self.width()
        );

        self.cells
            .slice_mut(s![x..x + shape.height, y..y + shape.width])
            .fill(value);
    }

    /// Number of empty cells
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Empty).count()
    }

    /// Rows rendered as strings, empty cells shown as `background`
    pub fn rows(&self, background: char) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.symbol(background)).collect())
            .collect()
    }

    /// Display adapter printing one row per line
    pub const fn display(&self, background: char) -> BoardDisplay<'_> {
        BoardDisplay {
            board: self,
            background,
        }
    }
}

/// Renders a [`Board`] with a chosen background marker
#[derive(Debug, Clone, Copy)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    background: char,
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.rows(self.background) {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
