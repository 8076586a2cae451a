//! Cell coordinates, compass directions and per-cell passage masks

use std::fmt;

/// Grid coordinates of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub col: usize,
}

impl Cell {
    /// Create a cell at the given coordinates
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell one unit away in `direction`
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the caller's concern.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::South => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
            Direction::East => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
            Direction::West => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
        }
    }

    /// Direction leading from this cell to `other` when they share an edge
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == Some(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four edges of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    North,
    /// Towards row + 1
    South,
    /// Towards col + 1
    East,
    /// Towards col - 1
    West,
}

impl Direction {
    /// Fixed enumeration order used wherever neighbour order matters
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Bit recording an open passage on this edge
    pub const fn bit(self) -> u8 {
        match self {
            Self::North => 0b1000,
            Self::South => 0b0100,
            Self::East => 0b0010,
            Self::West => 0b0001,
        }
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Whether the edge runs between cells of the same row
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

/// 4-bit mask of the open edges of a cell
///
/// A cleared bit is a wall. Masks start fully walled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Passages(u8);

impl Passages {
    /// No open edges
    pub const CLOSED: Self = Self(0);

    /// Build a mask from raw bits, ignoring anything above the low nibble
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Raw mask bits (North = 8, South = 4, East = 2, West = 1)
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the edge in `direction` is open
    pub const fn is_open(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Open the edge in `direction`
    pub const fn open(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Number of open edges
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Open directions in enumeration order
    pub fn directions(self) -> impl Iterator<Item = Direction> + Clone {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.is_open(direction))
    }
}
