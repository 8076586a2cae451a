//! Flood-fill verification that every cell is reachable
//!
//! Ground truth for all generators: a finished maze must let a breadth-first
//! fill from any start cell reach the whole grid through open passages.

use std::collections::VecDeque;

use crate::algorithm::visited::VisitedSet;
use crate::spatial::{Cell, Grid};

/// Detailed outcome of a connectivity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Whether every cell was reached
    pub connected: bool,
    /// Number of cells reached from the start
    pub reached: usize,
    /// Number of cells in the grid
    pub total: usize,
    /// Adjacent pairs where the first cell was reached and the second was not
    ///
    /// Ordered by the reached cell (row-major), then neighbour order. Empty
    /// when the grid is connected.
    pub unreachable_pairs: Vec<(Cell, Cell)>,
}

/// Whether every cell is reachable from `start`
///
/// A start outside the grid reaches nothing and fails.
pub fn check(grid: &Grid, start: Cell) -> bool {
    flood_fill(grid, start).is_some_and(|reached| reached.is_complete())
}

/// Connectivity check with the reachability frontier for diagnostics
pub fn check_verbose(grid: &Grid, start: Cell) -> VerificationReport {
    let total = grid.cell_count();
    let Some(reached) = flood_fill(grid, start) else {
        return VerificationReport {
            connected: false,
            reached: 0,
            total,
            unreachable_pairs: Vec::new(),
        };
    };

    let reached_cells = &reached;
    let unreachable_pairs = grid
        .cells()
        .filter(|&cell| reached_cells.contains(grid.index(cell)))
        .flat_map(|cell| {
            grid.neighbors(cell)
                .filter(move |&neighbor| !reached_cells.contains(grid.index(neighbor)))
                .map(move |neighbor| (cell, neighbor))
        })
        .collect();

    VerificationReport {
        connected: reached.is_complete(),
        reached: reached.count(),
        total,
        unreachable_pairs,
    }
}

fn flood_fill(grid: &Grid, start: Cell) -> Option<VisitedSet> {
    if !grid.contains(start) {
        return None;
    }

    let mut reached = VisitedSet::new(grid.cell_count());
    reached.insert(grid.index(start));
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        for neighbor in grid.neighbors(cell) {
            if grid.is_open(cell, neighbor) && reached.insert(grid.index(neighbor)) {
                queue.push_back(neighbor);
            }
        }
    }

    Some(reached)
}
