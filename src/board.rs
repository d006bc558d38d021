//! Board model: a runtime-sized square grid of ship-labelled cells.

use core::fmt;

use crate::common::BoardError;

/// Smallest accepted board dimension.
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest accepted board dimension.
pub const MAX_BOARD_SIZE: usize = 10;
/// Dimension used when the caller does not specify one.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// An N×N grid where each cell is empty or labelled with the occupying
/// ship's name. Always square; never resized after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    // row-major, cells[row * size + col]
    cells: Vec<Option<String>>,
}

impl Board {
    /// Create an empty `size`×`size` board. Size must lie in [5, 10].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether (`row`, `col`) lies on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Occupant of (`row`, `col`), if any.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds; check [`Board::in_bounds`]
    /// first when the coordinate is untrusted.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) out of bounds");
        self.cells[row * self.size + col].as_deref()
    }

    /// Write `name` into (`row`, `col`).
    pub(crate) fn set(&mut self, row: usize, col: usize, name: &str) {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) out of bounds");
        self.cells[row * self.size + col] = Some(name.to_owned());
    }

    /// Clear (`row`, `col`), returning the previous occupant if any.
    pub(crate) fn take(&mut self, row: usize, col: usize) -> Option<String> {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) out of bounds");
        self.cells[row * self.size + col].take()
    }

    /// `true` when no cell holds a ship segment.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterate occupied cells as (`row`, `col`, ship name).
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_deref().map(|name| (i / size, i % size, name)))
    }
}

impl Default for Board {
    /// Empty board of the default dimension.
    fn default() -> Self {
        Board {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

impl fmt::Display for Board {
    /// Renders the grid with `~` for water and names padded to the widest
    /// ship name so columns line up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .occupied_cells()
            .map(|(_, _, name)| name.len())
            .max()
            .unwrap_or(1);
        for row in 0..self.size {
            for col in 0..self.size {
                match self.cell(row, col) {
                    Some(name) => write!(f, " {:<width$}", name)?,
                    None => write!(f, " {:<width$}", "~")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.size, self.size)?;
        for (row, col, name) in self.occupied_cells() {
            writeln!(f, "  ({}, {}): {}", row, col, name)?;
        }
        write!(f, "}}")
    }
}
