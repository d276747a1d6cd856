//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// The wrapped value is validated at construction, so every `Digit` in
/// circulation holds a legal cell value. Blank cells are represented as
/// `Option::<Digit>::None` by [`Grid`](crate::Grid) rather than by a
/// sentinel digit.
///
/// # Examples
///
/// ```
/// use brutoku_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit.value(), 5);
///
/// assert!(Digit::new(0).is_none());
/// assert!(Digit::new(10).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use brutoku_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0].value(), 1);
    /// assert_eq!(Digit::ALL[8].value(), 9);
    /// ```
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit from a `u8` value, returning `None` if the value is
    /// outside the range 1-9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if matches!(value, 1..=9) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from a `u8` value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match Self::new(value) {
            Some(digit) => digit,
            None => panic!("digit value out of range 1-9"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the bit index of this digit (0-8), used by
    /// [`DigitSet`](crate::DigitSet).
    pub(crate) const fn index(self) -> u8 {
        self.0 - 1
    }

    /// Creates a digit from a bit index (0-8).
    pub(crate) const fn from_index(index: u8) -> Self {
        assert!(index < 9);
        Self(index + 1)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
