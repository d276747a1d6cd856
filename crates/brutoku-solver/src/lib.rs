//! Brute-force Sudoku solving.
//!
//! This crate implements the search core of brutoku, composed of two parts:
//!
//! - [`CandidateGrid`]: a single-pass candidate computation that derives, for
//!   every cell, either its fixed digit or the set of digits still legal for
//!   it, and detects immediate dead ends.
//! - [`BacktrackSolver`]: a depth-first backtracking search that recomputes
//!   candidates at every level, branches on the first unresolved cell in
//!   row-major order, and tries digits in ascending order.
//!
//! Deeper propagation is deliberately absent: candidates are computed in one
//! pass per recursion level, never iterated to a fixpoint. Narrowing emerges
//! only because each recursive call sees a grid with one more cell filled.
//!
//! # Examples
//!
//! ```
//! use brutoku_core::Grid;
//! use brutoku_solver::BacktrackSolver;
//!
//! let mut grid: Grid = "
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
//! let solver = BacktrackSolver::new();
//! assert!(solver.solve(&mut grid));
//! assert!(grid.is_solved());
//! # Ok::<(), brutoku_core::ParseGridError>(())
//! ```

pub use self::{
    backtrack::{BacktrackSolver, SolveStats},
    candidates::{CandidateGrid, CellCandidates},
};

mod backtrack;
mod candidates;
