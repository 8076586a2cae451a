//! Maze grid storage with symmetric passage carving
//!
//! The grid owns one passage mask per cell in a row-major `ndarray` array.
//! Every carve opens the edge on both endpoints, so a passage is always
//! visible from either side.

use std::fmt;

use ndarray::Array2;
use num_traits::ToPrimitive;

use crate::io::error::{MazeError, Result};
use crate::spatial::cell::{Cell, Direction, Passages};
use crate::spatial::region::GridRegion;

/// Rectangular maze of `length` rows by `width` columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Passages>,
}

impl Grid {
    /// Create a fully walled grid
    ///
    /// Accepts any primitive integer so signed user input can be passed
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero, negative, or
    /// does not fit in `usize`, or if `length * width` exceeds `isize::MAX`.
    pub fn new<T>(length: T, width: T) -> Result<Self>
    where
        T: ToPrimitive + fmt::Display,
    {
        let rows = positive_dimension("length", &length)?;
        let cols = positive_dimension("width", &width)?;

        // ndarray requires the element count to fit in isize
        let too_large = rows
            .checked_mul(cols)
            .is_none_or(|count| isize::try_from(count).is_err());
        if too_large {
            return Err(MazeError::InvalidDimension {
                dimension: "width",
                value: width.to_string(),
            });
        }

        Ok(Self {
            cells: Array2::from_elem((rows, cols), Passages::CLOSED),
        })
    }

    /// Number of rows
    pub fn length(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether a cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.length() && cell.col < self.width()
    }

    /// Row-major linear index of a cell
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.width() + cell.col
    }

    /// Cell at a row-major linear index
    pub fn cell_at(&self, index: usize) -> Cell {
        let width = self.width();
        Cell::new(index / width, index % width)
    }

    /// Passage mask of a cell, `None` outside the grid
    pub fn passages(&self, cell: Cell) -> Option<Passages> {
        self.cells.get([cell.row, cell.col]).copied()
    }

    /// In-bounds neighbours of a cell in `North, South, East, West` order
    ///
    /// Ignores walls. Cells outside the grid have no neighbours.
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        Neighbors::new(cell, self.length(), self.width())
    }

    /// Whether an open passage joins two cells
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        self.contains(b)
            && a.direction_to(b)
                .zip(self.passages(a))
                .is_some_and(|(direction, passages)| passages.is_open(direction))
    }

    /// Open the passage between two adjacent cells
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either cell lies outside the grid and
    /// `NotAdjacent` if the cells do not share an edge.
    pub fn carve(&mut self, a: Cell, b: Cell) -> Result<()> {
        self.region_mut().carve(a, b)
    }

    /// Number of open passages, each counted once
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|passages| passages.count() as usize)
            .sum::<usize>()
            / 2
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let width = self.width();
        (0..self.length()).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }

    /// Mutable region spanning the whole grid
    pub fn region_mut(&mut self) -> GridRegion<'_> {
        GridRegion::new(self.cells.view_mut(), Cell::new(0, 0))
    }
}

fn positive_dimension<T>(dimension: &'static str, value: &T) -> Result<usize>
where
    T: ToPrimitive + fmt::Display,
{
    value
        .to_usize()
        .filter(|&size| size > 0)
        .ok_or_else(|| MazeError::InvalidDimension {
            dimension,
            value: value.to_string(),
        })
}

/// Lazy, restartable iterator over the in-bounds neighbours of a cell
#[derive(Debug, Clone)]
pub struct Neighbors {
    cell: Cell,
    rows: usize,
    cols: usize,
    next_direction: usize,
}

impl Neighbors {
    /// Neighbours of `cell` within a `rows` by `cols` rectangle
    pub const fn new(cell: Cell, rows: usize, cols: usize) -> Self {
        // Out-of-bounds cells start exhausted
        let next_direction = if cell.row < rows && cell.col < cols {
            0
        } else {
            Direction::ALL.len()
        };

        Self {
            cell,
            rows,
            cols,
            next_direction,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while let Some(&direction) = Direction::ALL.get(self.next_direction) {
            self.next_direction += 1;
            let neighbor = self
                .cell
                .step(direction)
                .filter(|step| step.row < self.rows && step.col < self.cols);
            if neighbor.is_some() {
                return neighbor;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Direction::ALL.len().saturating_sub(self.next_direction)))
    }
}
