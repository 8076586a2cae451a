//! Strip partitioning of a grid for parallel generation
//!
//! The grid is cut into contiguous strips along its longer dimension so the
//! boundaries that need stitching are as short as possible. Strips never
//! overlap and together cover every cell exactly once.

use std::ops::Range;

use ndarray::Axis;

use crate::spatial::cell::Cell;

/// Which grid dimension the strips divide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Horizontal bands, each holding a run of whole rows
    Rows,
    /// Vertical bands, each holding a run of whole columns
    Columns,
}

impl SplitAxis {
    /// Matching `ndarray` axis of the row-major cell storage
    pub const fn ndarray_axis(self) -> Axis {
        match self {
            Self::Rows => Axis(0),
            Self::Columns => Axis(1),
        }
    }
}

/// One strip of the grid assigned to a single worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Position of the strip in the plan
    pub index: usize,
    /// Rows covered by the strip
    pub rows: Range<usize>,
    /// Columns covered by the strip
    pub cols: Range<usize>,
}

impl Partition {
    /// Number of cells in the strip
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.cols.len()
    }
}

/// Shared edge line between two consecutive strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Index of the earlier strip; the later one is `index + 1`
    pub index: usize,
    /// First row or column of the later strip
    pub offset: usize,
    /// Number of crossing edges along the boundary
    pub span: usize,
    axis: SplitAxis,
}

impl Boundary {
    /// The crossing edge at `position` along the boundary
    ///
    /// Returns the cell in the earlier strip followed by its neighbour in the
    /// later strip.
    pub const fn edge(&self, position: usize) -> (Cell, Cell) {
        match self.axis {
            SplitAxis::Rows => (
                Cell::new(self.offset - 1, position),
                Cell::new(self.offset, position),
            ),
            SplitAxis::Columns => (
                Cell::new(position, self.offset - 1),
                Cell::new(position, self.offset),
            ),
        }
    }
}

/// Disjoint strip layout for a grid and a requested worker count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    length: usize,
    width: usize,
    axis: SplitAxis,
    sizes: Vec<usize>,
}

impl PartitionPlan {
    /// Plan strips for a `length` by `width` grid
    ///
    /// The effective strip count is `worker_count` clamped to at least one
    /// and at most the number of lines along the split axis; surplus
    /// workers stay idle. Strip sizes differ by at most one line, with the
    /// leading strips taking the remainder.
    pub fn new(length: usize, width: usize, worker_count: usize) -> Self {
        let axis = if width >= length {
            SplitAxis::Columns
        } else {
            SplitAxis::Rows
        };
        let extent = match axis {
            SplitAxis::Rows => length,
            SplitAxis::Columns => width,
        };

        let count = worker_count.clamp(1, extent.max(1));
        let base = extent / count;
        let remainder = extent % count;
        let sizes = (0..count)
            .map(|strip| base + usize::from(strip < remainder))
            .collect();

        Self {
            length,
            width,
            axis,
            sizes,
        }
    }

    /// Dimension the strips divide
    pub const fn axis(&self) -> SplitAxis {
        self.axis
    }

    /// Extent of each strip along the split axis
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of strips
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the plan holds no strips
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Strips in order along the split axis
    pub fn partitions(&self) -> Vec<Partition> {
        let mut start = 0;
        self.sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| {
                let span = start..start + size;
                start += size;
                match self.axis {
                    SplitAxis::Rows => Partition {
                        index,
                        rows: span,
                        cols: 0..self.width,
                    },
                    SplitAxis::Columns => Partition {
                        index,
                        rows: 0..self.length,
                        cols: span,
                    },
                }
            })
            .collect()
    }

    /// Boundaries between consecutive strips
    pub fn boundaries(&self) -> Vec<Boundary> {
        let span = match self.axis {
            SplitAxis::Rows => self.width,
            SplitAxis::Columns => self.length,
        };

        let mut offset = 0;
        self.sizes
            .iter()
            .enumerate()
            .take(self.sizes.len().saturating_sub(1))
            .map(|(index, &size)| {
                offset += size;
                Boundary {
                    index,
                    offset,
                    span,
                    axis: self.axis,
                }
            })
            .collect()
    }
}
