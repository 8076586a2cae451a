//! Spanning-tree algorithm interface and algorithm selection

use std::fmt;

use clap::ValueEnum;

use crate::algorithm::hunt_and_kill::HuntAndCarve;
use crate::algorithm::random::{RandomSource, Seed};
use crate::algorithm::wilson::LoopErasedWalk;
use crate::io::error::Result;
use crate::spatial::{Grid, GridRegion};

/// Carves a spanning tree over every cell of a region
///
/// Implementations only carve edges whose endpoints both lie inside the
/// region and must leave the region's passage graph as a single tree.
pub trait SpanningTreeAlgorithm: Sync {
    /// Carve a spanning tree into `region` using `rng` for every choice
    ///
    /// # Errors
    ///
    /// Propagates carve failures, which indicate a broken algorithm
    fn carve(&self, region: &mut GridRegion<'_>, rng: &mut RandomSource) -> Result<()>;
}

/// Selectable generation algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Wilson's algorithm: uniform spanning trees via loop-erased random walks
    #[value(name = "wilsons", alias = "loop-erased-walk")]
    LoopErasedWalk,
    /// Hunt-and-kill: long corridors, few branches
    #[value(name = "hk", alias = "hunt-and-carve")]
    HuntAndCarve,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoopErasedWalk => write!(f, "Wilson's Algorithm (loop-erased walk)"),
            Self::HuntAndCarve => write!(f, "Hunt-and-Kill"),
        }
    }
}

impl SpanningTreeAlgorithm for Algorithm {
    fn carve(&self, region: &mut GridRegion<'_>, rng: &mut RandomSource) -> Result<()> {
        match self {
            Self::LoopErasedWalk => LoopErasedWalk.carve(region, rng),
            Self::HuntAndCarve => HuntAndCarve.carve(region, rng),
        }
    }
}

/// Generate a perfect maze over the whole grid
///
/// Runs single-threaded and returns once every cell is connected. The same
/// algorithm, dimensions and seed always produce the same passages.
///
/// # Errors
///
/// Propagates carve failures from the algorithm
pub fn generate(grid: &mut Grid, algorithm: Algorithm, seed: Seed) -> Result<()> {
    let mut rng = RandomSource::new(seed);
    let mut region = grid.region_mut();
    algorithm.carve(&mut region, &mut rng)
}
