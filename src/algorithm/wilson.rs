//! Wilson's algorithm over a grid region
//!
//! Grows a uniformly random spanning tree from a random root. Each remaining
//! cell starts a random walk that wanders until it hits the tree; whenever
//! the walk crosses its own path, the loop is erased. The surviving path is
//! carved and joins the tree.

use crate::algorithm::random::RandomSource;
use crate::algorithm::spanning_tree::SpanningTreeAlgorithm;
use crate::algorithm::visited::VisitedSet;
use crate::io::error::Result;
use crate::spatial::GridRegion;

/// Loop-erased random walk generator (Wilson's algorithm)
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopErasedWalk;

impl SpanningTreeAlgorithm for LoopErasedWalk {
    fn carve(&self, region: &mut GridRegion<'_>, rng: &mut RandomSource) -> Result<()> {
        let total = region.cell_count();
        if total <= 1 {
            return Ok(());
        }

        let mut in_tree = VisitedSet::new(total);
        in_tree.insert(rng.index(total));

        let mut walk = LoopErasedPath::new(total);
        let mut steps = 0_usize;

        while let Some(start) = in_tree.first_unvisited() {
            steps += walk.wander(region, rng, &in_tree, start);

            for pair in walk.path.windows(2) {
                if let [from, to] = *pair {
                    let (from, to) = (region.cell_at(from), region.cell_at(to));
                    region.carve(from, to)?;
                }
            }
            for &index in &walk.path {
                in_tree.insert(index);
            }
            walk.clear();
        }

        tracing::debug!(
            origin = %region.origin(),
            cells = total,
            steps,
            "loop-erased walk complete"
        );
        Ok(())
    }
}

/// Walk path with O(1) lookup of where a cell already occurs
struct LoopErasedPath {
    path: Vec<usize>,
    position: Vec<Option<usize>>,
}

impl LoopErasedPath {
    fn new(total: usize) -> Self {
        Self {
            path: Vec::new(),
            position: vec![None; total],
        }
    }

    fn push(&mut self, index: usize) {
        if let Some(slot) = self.position.get_mut(index) {
            *slot = Some(self.path.len());
        }
        self.path.push(index);
    }

    // Drops everything after `keep`, forgetting the erased positions
    fn truncate_after(&mut self, keep: usize) {
        let erased = self.path.get(keep + 1..).unwrap_or(&[]);
        for &index in erased {
            if let Some(slot) = self.position.get_mut(index) {
                *slot = None;
            }
        }
        self.path.truncate(keep + 1);
    }

    fn clear(&mut self) {
        for &index in &self.path {
            if let Some(slot) = self.position.get_mut(index) {
                *slot = None;
            }
        }
        self.path.clear();
    }

    /// Random walk from `start` until the tree is reached
    ///
    /// Leaves the loop-erased path in `self.path`, ending with the tree cell
    /// that absorbed it. Returns the number of steps taken.
    fn wander(
        &mut self,
        region: &GridRegion<'_>,
        rng: &mut RandomSource,
        in_tree: &VisitedSet,
        start: usize,
    ) -> usize {
        self.push(start);
        let mut current = start;
        let mut steps = 0;

        loop {
            let mut neighbors = region.neighbors(region.cell_at(current));
            let choice = rng.index(neighbors.clone().count());
            let Some(next) = neighbors.nth(choice).map(|cell| region.index(cell)) else {
                return steps;
            };
            steps += 1;

            if in_tree.contains(next) {
                // Tree cells never get a position entry
                self.path.push(next);
                return steps;
            }

            match self.position.get(next).copied().flatten() {
                Some(earlier) => self.truncate_after(earlier),
                None => self.push(next),
            }
            current = next;
        }
    }
}
