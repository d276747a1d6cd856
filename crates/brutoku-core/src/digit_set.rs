//! A set of digits 1-9, backed by a 9-bit mask.
//!
//! This module provides [`DigitSet`], the representation used for "digits
//! already placed in this house" and "digits still legal for this cell".
//! Iteration always yields digits in ascending order, which is what makes
//! the solver's branching order deterministic.
//!
//! # Examples
//!
//! ```
//! use brutoku_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::new();
//! set.insert(Digit::from_value(1));
//! set.insert(Digit::from_value(5));
//! set.insert(Digit::from_value(9));
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::from_value(5)));
//! ```

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::digit::Digit;

/// A set of digits 1-9.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing cheap copies and fast set operations.
///
/// # Set Operations
///
/// ```
/// use brutoku_core::{Digit, DigitSet};
///
/// let a: DigitSet = [1, 2, 3].into_iter().map(Digit::from_value).collect();
/// let b: DigitSet = [2, 3, 4].into_iter().map(Digit::from_value).collect();
///
/// assert_eq!((a | b).len(), 4);
/// assert_eq!((a & b).len(), 2);
/// assert_eq!(a.difference(b).len(), 1);
/// assert_eq!((!a).len(), 6);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates a new empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= 1 << digit.index();
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !(1 << digit.index());
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << digit.index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the single digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use brutoku_core::{Digit, DigitSet};
    ///
    /// let mut set = DigitSet::new();
    /// assert_eq!(set.as_single(), None);
    ///
    /// set.insert(Digit::from_value(7));
    /// assert_eq!(set.as_single(), Digit::new(7));
    ///
    /// set.insert(Digit::from_value(2));
    /// assert_eq!(set.as_single(), None);
    /// ```
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        Some(Digit::from_index(index))
    }

    /// Returns the union of the two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & MASK,
        }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits in a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
