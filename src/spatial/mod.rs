//! Spatial data structures for the maze
//!
//! This module contains:
//! - Cell coordinates, directions and passage masks
//! - The grid and its mutable regions
//! - Strip partitioning for parallel generation

/// Cell coordinates and passage masks
pub mod cell;
/// Grid storage and symmetric carving
pub mod grid;
/// Strip partitioning of the grid
pub mod partition;
/// Mutable rectangular views of the grid
pub mod region;

pub use cell::{Cell, Direction, Passages};
pub use grid::{Grid, Neighbors};
pub use partition::{Boundary, Partition, PartitionPlan, SplitAxis};
pub use region::GridRegion;
