//! Hunt-and-kill over a grid region
//!
//! Alternates a random walk that carves into unvisited cells with a
//! row-major hunt for the first unvisited cell bordering the visited area.

use crate::algorithm::random::RandomSource;
use crate::algorithm::spanning_tree::SpanningTreeAlgorithm;
use crate::algorithm::visited::VisitedSet;
use crate::io::error::Result;
use crate::spatial::{Cell, GridRegion};

/// Hunt-and-kill generator, biased towards long corridors
#[derive(Debug, Clone, Copy, Default)]
pub struct HuntAndCarve;

impl SpanningTreeAlgorithm for HuntAndCarve {
    fn carve(&self, region: &mut GridRegion<'_>, rng: &mut RandomSource) -> Result<()> {
        let total = region.cell_count();
        if total == 0 {
            return Ok(());
        }

        let mut visited = VisitedSet::new(total);
        let start = region.cell_at(rng.index(total));
        visited.insert(region.index(start));

        let mut current = Some(start);
        let mut hunts = 0_usize;
        while let Some(cell) = current {
            random_walk(region, rng, &mut visited, cell)?;
            current = hunt(region, &mut visited)?;
            hunts += usize::from(current.is_some());
        }

        tracing::debug!(
            origin = %region.origin(),
            cells = total,
            hunts,
            "hunt-and-kill complete"
        );
        Ok(())
    }
}

/// Carve into random unvisited neighbours until reaching a dead end
fn random_walk(
    region: &mut GridRegion<'_>,
    rng: &mut RandomSource,
    visited: &mut VisitedSet,
    start: Cell,
) -> Result<()> {
    let mut current = start;

    loop {
        let next = {
            let mut unvisited = region
                .neighbors(current)
                .filter(|&neighbor| !visited.contains(region.index(neighbor)));
            let count = unvisited.clone().count();
            if count == 0 {
                return Ok(());
            }
            unvisited.nth(rng.index(count))
        };

        let Some(next) = next else {
            return Ok(());
        };
        region.carve(current, next)?;
        visited.insert(region.index(next));
        current = next;
    }
}

/// Connect the first unvisited cell (row-major) that touches the visited area
///
/// The link goes to its first visited neighbour in `North, South, East,
/// West` order. Returns the newly connected cell, or `None` once every cell
/// is visited.
fn hunt(region: &mut GridRegion<'_>, visited: &mut VisitedSet) -> Result<Option<Cell>> {
    let Some(first) = visited.first_unvisited() else {
        return Ok(None);
    };

    // Everything before the first unvisited index is already visited
    for index in first..region.cell_count() {
        if visited.contains(index) {
            continue;
        }

        let cell = region.cell_at(index);
        let anchor = region
            .neighbors(cell)
            .find(|&neighbor| visited.contains(region.index(neighbor)));

        if let Some(anchor) = anchor {
            region.carve(cell, anchor)?;
            visited.insert(index);
            return Ok(Some(cell));
        }
    }

    Ok(None)
}
