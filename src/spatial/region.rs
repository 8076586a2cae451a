//! Exclusive mutable views over rectangular parts of a grid
//!
//! Algorithms carve through a `GridRegion` using region-local coordinates.
//! Splitting a region hands out disjoint views of the same storage, which is
//! what lets partition workers carve concurrently without locks.

use ndarray::{ArrayViewMut2, Axis};

use crate::io::error::{MazeError, Result};
use crate::spatial::cell::{Cell, Passages};
use crate::spatial::grid::Neighbors;

/// Mutable window onto a rectangle of grid cells
#[derive(Debug)]
pub struct GridRegion<'a> {
    cells: ArrayViewMut2<'a, Passages>,
    origin: Cell,
}

impl<'a> GridRegion<'a> {
    /// Wrap a view whose top-left cell sits at `origin` in grid coordinates
    pub fn new(cells: ArrayViewMut2<'a, Passages>, origin: Cell) -> Self {
        Self { cells, origin }
    }

    /// Number of rows in the region
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the region
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells in the region
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Grid coordinates of the region's top-left cell
    pub const fn origin(&self) -> Cell {
        self.origin
    }

    /// Whether a local cell lies inside the region
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols()
    }

    /// Translate a local cell to grid coordinates
    pub const fn to_grid(&self, cell: Cell) -> Cell {
        Cell::new(self.origin.row + cell.row, self.origin.col + cell.col)
    }

    /// Row-major linear index of a local cell
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols() + cell.col
    }

    /// Local cell at a row-major linear index
    pub fn cell_at(&self, index: usize) -> Cell {
        let cols = self.cols().max(1);
        Cell::new(index / cols, index % cols)
    }

    /// Passage mask of a local cell, `None` outside the region
    pub fn passages(&self, cell: Cell) -> Option<Passages> {
        self.cells.get([cell.row, cell.col]).copied()
    }

    /// Neighbours of a local cell that stay inside the region
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        Neighbors::new(cell, self.rows(), self.cols())
    }

    /// Whether an open passage joins two local cells
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        self.contains(b)
            && a.direction_to(b)
                .zip(self.passages(a))
                .is_some_and(|(direction, passages)| passages.is_open(direction))
    }

    /// Open the passage between two adjacent local cells
    ///
    /// Both endpoints must lie in this region, so edges crossing into a
    /// neighbouring region can never be carved from here.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either cell lies outside the region and
    /// `NotAdjacent` if the cells do not share an edge.
    pub fn carve(&mut self, a: Cell, b: Cell) -> Result<()> {
        for cell in [a, b] {
            if !self.contains(cell) {
                return Err(MazeError::OutOfBounds {
                    cell,
                    dimensions: (self.rows(), self.cols()),
                });
            }
        }

        let direction = a.direction_to(b).ok_or(MazeError::NotAdjacent {
            from: self.to_grid(a),
            to: self.to_grid(b),
        })?;

        if let Some(passages) = self.cells.get_mut([a.row, a.col]) {
            passages.open(direction);
        }
        if let Some(passages) = self.cells.get_mut([b.row, b.col]) {
            passages.open(direction.opposite());
        }
        Ok(())
    }

    /// Split into consecutive disjoint regions along `axis`
    ///
    /// Each entry of `sizes` is the extent of one sub-region along the
    /// axis. Sizes are clamped to what remains; cells beyond the sum of
    /// `sizes` are not covered by any returned region.
    pub fn split(self, axis: Axis, sizes: &[usize]) -> Vec<Self> {
        let mut regions = Vec::with_capacity(sizes.len());
        let mut rest = self.cells;
        let mut origin = self.origin;

        for &size in sizes {
            let size = size.min(rest.len_of(axis));
            let (head, tail) = rest.split_at(axis, size);
            regions.push(Self::new(head, origin));

            origin = if axis == Axis(0) {
                Cell::new(origin.row + size, origin.col)
            } else {
                Cell::new(origin.row, origin.col + size)
            };
            rest = tail;
        }

        regions
    }
}
