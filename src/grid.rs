use crate::cell::Cell;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid needs {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Grid must have at least one cell per axis")]
    ZeroDimension,
}

/// A cell address. Only built in range, either checked through
/// [`Grid::coordinate`] or clamped through [`Coordinate::from_pointer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    /// Maps a pointer position on a `surface_width` x `surface_height` surface
    /// to the cell under it, clamped into the grid.
    pub fn from_pointer(
        x: f64,
        y: f64,
        surface_width: f64,
        surface_height: f64,
        cells_per_axis: usize,
    ) -> Self {
        let cell_width = surface_width / cells_per_axis as f64;
        let cell_height = surface_height / cells_per_axis as f64;

        Self {
            row: clamp_axis(y / cell_height, cells_per_axis),
            column: clamp_axis(x / cell_width, cells_per_axis),
        }
    }

    pub fn index(&self, cells_per_axis: usize) -> usize {
        self.row * cells_per_axis + self.column
    }

    /// Up, down, left and right neighbours. Edges clamp back onto themselves
    /// instead of being dropped.
    pub fn clamped_neighbours(&self, cells_per_axis: usize) -> [Coordinate; 4] {
        let last = cells_per_axis.saturating_sub(1);
        [
            Coordinate { row: self.row, column: self.column.saturating_sub(1) },
            Coordinate { row: self.row, column: (self.column + 1).min(last) },
            Coordinate { row: self.row.saturating_sub(1), column: self.column },
            Coordinate { row: (self.row + 1).min(last), column: self.column },
        ]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

fn clamp_axis(scaled: f64, cells_per_axis: usize) -> usize {
    // NaN.max(0.0) is 0.0, and the cast saturates for huge values
    let cell = scaled.floor().max(0.0) as usize;
    cell.min(cells_per_axis.saturating_sub(1))
}

/// One snapshot of the board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    cells_per_axis: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn empty(cells_per_axis: usize) -> Self {
        Self {
            cells_per_axis,
            cells: vec![Cell::Empty; cells_per_axis * cells_per_axis],
        }
    }

    pub fn filled(cells_per_axis: usize, cell: Cell) -> Self {
        Self {
            cells_per_axis,
            cells: vec![cell; cells_per_axis * cells_per_axis],
        }
    }

    pub fn from_cells(cells_per_axis: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells_per_axis == 0 {
            return Err(GridError::ZeroDimension);
        }
        let expected = cells_per_axis * cells_per_axis;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells_per_axis,
            cells,
        })
    }

    pub fn cells_per_axis(&self) -> usize {
        self.cells_per_axis
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn coordinate(&self, row: usize, column: usize) -> Option<Coordinate> {
        if row < self.cells_per_axis && column < self.cells_per_axis {
            Some(Coordinate { row, column })
        } else {
            None
        }
    }

    pub fn get(&self, at: Coordinate) -> Cell {
        debug_assert!(at.row < self.cells_per_axis && at.column < self.cells_per_axis);
        self.cells[at.index(self.cells_per_axis)]
    }

    pub fn set(&mut self, at: Coordinate, cell: Cell) {
        debug_assert!(at.row < self.cells_per_axis && at.column < self.cells_per_axis);
        let index = at.index(self.cells_per_axis);
        self.cells[index] = cell;
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cells_per_axis.max(1))
    }

    /// Number of positions where `self` and `other` hold different cells.
    pub fn diff_count(&self, other: &Grid) -> usize {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let names: Vec<&str> = row.iter().map(|c| c.name()).collect();
            write!(f, "{}", names.join(" "))?;
        }
        Ok(())
    }
}
