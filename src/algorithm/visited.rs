use bitvec::prelude::*;

/// Fixed-size set of cells already absorbed by a generation run
///
/// Indexed by row-major cell index. Discarded when the run finishes.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
}

impl VisitedSet {
    /// Create a set over `len` cells with nothing visited
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
        }
    }

    /// Mark a cell visited
    ///
    /// Returns `true` if the cell was not visited before. Out-of-range
    /// indices are ignored and return `false`.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(mut bit) => {
                let newly_visited = !*bit;
                *bit = true;
                newly_visited
            }
            None => false,
        }
    }

    /// Test cell membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of cells tracked
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test if the set tracks no cells at all
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if every tracked cell is visited
    pub fn is_complete(&self) -> bool {
        self.bits.all()
    }

    /// Lowest index not yet visited
    pub fn first_unvisited(&self) -> Option<usize> {
        self.bits.first_zero()
    }

    /// Indices not yet visited, in ascending order
    pub fn unvisited(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_zeros()
    }
}
