//! Perfect maze generation on rectangular grids
//!
//! Mazes are uniform or biased random spanning trees of the grid graph, carved
//! by Wilson's loop-erased random walk or by hunt-and-kill. Large grids can be
//! split into strips that are carved on worker threads and stitched back
//! together with one passage per boundary.

#![forbid(unsafe_code)]

/// Spanning tree algorithms, random sources and partitioned generation
pub mod algorithm;
/// Connectivity verification of finished mazes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Cells, the grid, regions and strip partitioning
pub mod spatial;

pub use io::error::{MazeError, Result};
