//! Parallel generation over disjoint strips, stitched into one maze
//!
//! Each strip is carved by its own worker thread with its own derived random
//! source. Workers only ever see their own strip's storage, so no locking is
//! needed. Once every worker has joined, boundary edges are carved between
//! consecutive strips to connect their trees.

use crate::algorithm::random::{RandomSource, Seed};
use crate::algorithm::spanning_tree::{Algorithm, SpanningTreeAlgorithm};
use crate::io::configuration::STITCH_STREAM;
use crate::io::error::{MazeError, Result};
use crate::spatial::{Grid, GridRegion, PartitionPlan};

/// How strips are joined after the parallel phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StitchPolicy {
    /// One edge per boundary, keeping the maze a spanning tree
    #[default]
    Perfect,
    /// Up to `openings` distinct edges per boundary, adding cycles
    Braided {
        /// Edges carved across each boundary, clamped to its length
        openings: usize,
    },
}

impl StitchPolicy {
    /// Edges to carve per boundary, before clamping to boundary length
    pub fn openings(self) -> usize {
        match self {
            Self::Perfect => 1,
            Self::Braided { openings } => openings.max(1),
        }
    }
}

/// Outcome of a partitioned run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionReport {
    /// Strips actually carved (surplus workers are not counted)
    pub partitions: usize,
    /// Boundary edges carved while stitching
    pub stitches: usize,
}

/// Runs an algorithm per strip on worker threads, then stitches strips
#[derive(Debug, Clone, Copy)]
pub struct PartitionedGenerator {
    algorithm: Algorithm,
    worker_count: usize,
    stitch_policy: StitchPolicy,
}

impl PartitionedGenerator {
    /// Create a generator for `worker_count` workers with perfect stitching
    pub const fn new(algorithm: Algorithm, worker_count: usize) -> Self {
        Self {
            algorithm,
            worker_count,
            stitch_policy: StitchPolicy::Perfect,
        }
    }

    /// Replace the stitch policy
    #[must_use]
    pub const fn with_stitch_policy(mut self, stitch_policy: StitchPolicy) -> Self {
        self.stitch_policy = stitch_policy;
        self
    }

    /// Generate a maze over the whole grid
    ///
    /// Partition `i` draws from `RandomSource::new(seed).derive_child(i)`,
    /// so a fixed seed and worker count always reproduce the same maze.
    ///
    /// # Errors
    ///
    /// Returns `WorkerPanicked` if a worker thread panics and propagates
    /// carve failures from the algorithm or the stitching phase
    pub fn generate(&self, grid: &mut Grid, seed: Seed) -> Result<PartitionReport> {
        let plan = PartitionPlan::new(grid.length(), grid.width(), self.worker_count);
        let root = RandomSource::new(seed);

        tracing::debug!(
            requested = self.worker_count,
            partitions = plan.len(),
            axis = ?plan.axis(),
            "partitioning grid"
        );
        for partition in plan.partitions() {
            tracing::trace!(
                partition = partition.index,
                rows = ?partition.rows,
                cols = ?partition.cols,
                cells = partition.cell_count(),
                "planned partition"
            );
        }

        let regions = grid
            .region_mut()
            .split(plan.axis().ndarray_axis(), plan.sizes());
        carve_partitions(self.algorithm, regions, &root)?;

        let mut stitch_rng = root.derive_child(STITCH_STREAM);
        let stitches = self.stitch(grid, &plan, &mut stitch_rng)?;

        Ok(PartitionReport {
            partitions: plan.len(),
            stitches,
        })
    }

    // Runs after the barrier, on the calling thread only
    fn stitch(
        &self,
        grid: &mut Grid,
        plan: &PartitionPlan,
        rng: &mut RandomSource,
    ) -> Result<usize> {
        let mut stitches = 0;

        for boundary in plan.boundaries() {
            let openings = self.stitch_policy.openings().min(boundary.span);

            // Partial Fisher-Yates: the first `openings` slots end up distinct
            let mut positions: Vec<usize> = (0..boundary.span).collect();
            for slot in 0..openings {
                let pick = slot + rng.index(boundary.span - slot);
                positions.swap(slot, pick);

                if let Some(&position) = positions.get(slot) {
                    let (a, b) = boundary.edge(position);
                    grid.carve(a, b)?;
                    stitches += 1;
                }
            }

            tracing::debug!(boundary = boundary.index, openings, "stitched strips");
        }

        Ok(stitches)
    }
}

/// Carve every region on its own scoped thread and wait for all of them
fn carve_partitions(
    algorithm: Algorithm,
    regions: Vec<GridRegion<'_>>,
    root: &RandomSource,
) -> Result<()> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = regions
            .into_iter()
            .enumerate()
            .map(|(index, mut region)| {
                let mut rng = root.derive_child(index as u64);
                scope.spawn(move || {
                    tracing::debug!(
                        partition = index,
                        origin = %region.origin(),
                        rows = region.rows(),
                        cols = region.cols(),
                        "carving partition"
                    );
                    algorithm.carve(&mut region, &mut rng)
                })
            })
            .collect();

        // Join every handle before reporting so no panic escapes the scope
        let results: Vec<Result<()>> = handles
            .into_iter()
            .enumerate()
            .map(|(partition, handle)| match handle.join() {
                Ok(result) => result,
                Err(_payload) => Err(MazeError::WorkerPanicked { partition }),
            })
            .collect();

        results.into_iter().collect()
    })
}
