//! Cell coordinates on the 9×9 grid.

use std::fmt::{self, Display};

/// A cell position on the 9×9 grid.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). The 3×3 box containing a position is derived, not stored.
///
/// # Examples
///
/// ```
/// use brutoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    y: u8,
    x: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { y, x }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3×3 box containing this position,
    /// numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }

    /// Returns the row-major cell index (0-80) of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns an iterator over all 81 positions in row-major order: left to
    /// right within a row, top to bottom across rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use brutoku_core::Position;
    ///
    /// let mut iter = Position::row_major();
    /// assert_eq!(iter.next(), Some(Position::new(0, 0)));
    /// assert_eq!(iter.next(), Some(Position::new(1, 0)));
    /// assert_eq!(iter.last(), Some(Position::new(8, 8)));
    /// ```
    pub fn row_major() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|y| (0..9).map(move |x| Self::new(x, y)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
