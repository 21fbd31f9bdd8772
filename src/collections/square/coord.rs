use std::fmt;
use std::fmt::Debug;

/// The position of an element in a `Square`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// The coordinate one column to the right
    pub fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    pub(crate) fn to_index(self, width: usize) -> usize {
        debug_assert!(self.row < width && self.col < width);
        self.row * width + self.col
    }

    pub(crate) fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}
