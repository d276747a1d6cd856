//! Core data structures for the brutoku Sudoku solver.
//!
//! This crate provides the puzzle representation shared by the solver and the
//! command-line frontend:
//!
//! - [`Digit`]: type-safe Sudoku digit in the range 1-9
//! - [`DigitSet`]: a set of digits backed by a 9-bit mask
//! - [`Position`]: a cell coordinate with its derived box index
//! - [`Grid`]: the 9×9 puzzle grid, including parsing, rendering, and
//!   duplicate-conflict validation
//!
//! # Examples
//!
//! ```
//! use brutoku_core::{Digit, Grid, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert_eq!(grid.get(Position::new(0, 0)), Digit::new(5));
//! assert!(grid.is_consistent());
//! # Ok::<(), brutoku_core::ParseGridError>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    position::Position,
};
