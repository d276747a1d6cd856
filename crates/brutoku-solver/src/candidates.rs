//! Single-pass candidate computation.
//!
//! [`CandidateGrid::compute`] takes a grid snapshot and derives the candidate
//! entry for every cell in one non-iterative constraint pass: the digits used
//! by filled cells are collected per row, column, and box, and each blank
//! cell's legal set is the complement of the digits used by its three houses.
//!
//! Resolving one cell's candidates never narrows another cell's candidates
//! within the same call. The backtracking solver gets deeper propagation by
//! recomputing candidates on a grid with one more cell filled at each
//! recursion level.

use brutoku_core::{Digit, DigitSet, Grid, Position};

/// The candidate entry for a single cell.
///
/// A filled cell is `Fixed` and carries its grid value; a blank cell is
/// `Open` and carries the set of digits consistent with the filled cells in
/// its row, column, and box. An `Open` entry with a single digit is still
/// unresolved: the solver treats it as a branch point with one branch rather
/// than promoting it to `Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCandidates {
    /// The cell is filled with this digit.
    Fixed(Digit),
    /// The cell is blank; these digits are still legal for it.
    Open(DigitSet),
}

impl CellCandidates {
    /// Returns the open candidate set, or `None` if the cell is fixed.
    #[must_use]
    pub const fn open_set(self) -> Option<DigitSet> {
        match self {
            Self::Open(set) => Some(set),
            Self::Fixed(_) => None,
        }
    }

    /// Returns the fixed digit, or `None` if the cell is open.
    #[must_use]
    pub const fn fixed_digit(self) -> Option<Digit> {
        match self {
            Self::Fixed(digit) => Some(digit),
            Self::Open(_) => None,
        }
    }
}

/// Candidate entries for all 81 cells, derived from one grid snapshot.
///
/// A `CandidateGrid` is transient: the solver builds one per recursion level
/// and discards it after choosing a branch point. It is never updated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [CellCandidates; 81],
}

impl CandidateGrid {
    /// Computes candidate entries for every cell of `grid`.
    ///
    /// Returns `None` as soon as some blank cell has no legal digit left: the
    /// grid is a dead end and no assignment can complete it. Cells after the
    /// failing one are not evaluated.
    ///
    /// # Examples
    ///
    /// ```
    /// use brutoku_core::{Digit, Grid, Position};
    /// use brutoku_solver::CandidateGrid;
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Digit::new(5));
    ///
    /// let candidates = CandidateGrid::compute(&grid).unwrap();
    /// let open = candidates.entry(Position::new(1, 0)).open_set().unwrap();
    /// assert!(!open.contains(Digit::from_value(5))); // 5 used in row 0
    /// assert_eq!(open.len(), 8);
    /// ```
    #[must_use]
    pub fn compute(grid: &Grid) -> Option<Self> {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for (pos, cell) in grid.cells() {
            if let Some(digit) = cell {
                rows[usize::from(pos.y())].insert(digit);
                cols[usize::from(pos.x())].insert(digit);
                boxes[usize::from(pos.box_index())].insert(digit);
            }
        }

        let mut cells = [CellCandidates::Open(DigitSet::EMPTY); 81];
        for (pos, cell) in grid.cells() {
            let entry = match cell {
                Some(digit) => CellCandidates::Fixed(digit),
                None => {
                    let used = rows[usize::from(pos.y())]
                        | cols[usize::from(pos.x())]
                        | boxes[usize::from(pos.box_index())];
                    let open = !used;
                    if open.is_empty() {
                        return None;
                    }
                    CellCandidates::Open(open)
                }
            };
            cells[pos.index()] = entry;
        }
        Some(Self { cells })
    }

    /// Returns the candidate entry for the cell at `pos`.
    #[must_use]
    pub const fn entry(&self, pos: Position) -> CellCandidates {
        self.cells[pos.index()]
    }

    /// Returns the first `Open` cell in row-major order together with its
    /// candidate set, or `None` if every cell is fixed.
    ///
    /// This is the solver's branch-point selection rule; combined with
    /// ascending digit order it makes the search deterministic.
    #[must_use]
    pub fn first_open(&self) -> Option<(Position, DigitSet)> {
        Position::row_major().find_map(|pos| match self.entry(pos) {
            CellCandidates::Open(set) => Some((pos, set)),
            CellCandidates::Fixed(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_empty_grid_has_full_candidates_everywhere() {
        let candidates = CandidateGrid::compute(&Grid::new()).unwrap();
        for pos in Position::row_major() {
            assert_eq!(candidates.entry(pos), CellCandidates::Open(DigitSet::FULL));
        }
    }

    #[test]
    fn test_filled_cell_is_fixed() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 3), Digit::new(8));

        let candidates = CandidateGrid::compute(&grid).unwrap();
        assert_eq!(
            candidates.entry(Position::new(3, 3)),
            CellCandidates::Fixed(Digit::from_value(8))
        );
    }

    #[test]
    fn test_candidates_exclude_row_column_and_box() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Digit::new(1)); // same row as (8, 0)
        grid.set(Position::new(8, 8), Digit::new(2)); // same column as (8, 0)
        grid.set(Position::new(7, 1), Digit::new(3)); // same box as (8, 0)

        let candidates = CandidateGrid::compute(&grid).unwrap();
        let open = candidates.entry(Position::new(8, 0)).open_set().unwrap();
        assert_eq!(open.len(), 6);
        for value in [1, 2, 3] {
            assert!(!open.contains(Digit::from_value(value)));
        }
        for value in [4, 5, 6, 7, 8, 9] {
            assert!(open.contains(Digit::from_value(value)));
        }
    }

    #[test]
    fn test_single_candidate_stays_open() {
        // Fill row 0 except the last cell; the hole keeps a one-digit Open
        // entry instead of being promoted to Fixed.
        let mut grid = Grid::new();
        for (x, value) in (0..8).zip(1..) {
            grid.set(Position::new(x, 0), Digit::new(value));
        }

        let candidates = CandidateGrid::compute(&grid).unwrap();
        let entry = candidates.entry(Position::new(8, 0));
        assert_eq!(entry.fixed_digit(), None);
        assert_eq!(entry.open_set().unwrap().as_single(), Digit::new(9));
    }

    #[test]
    fn test_dead_end_is_detected() {
        // Surround (8, 0) so that all nine digits are used by its houses:
        // row 0 gets 1-6, column 8 gets 7 and 8, the corner box gets 9.
        let mut grid = Grid::new();
        for (x, value) in (0..6).zip(1..) {
            grid.set(Position::new(x, 0), Digit::new(value));
        }
        grid.set(Position::new(8, 4), Digit::new(7));
        grid.set(Position::new(8, 5), Digit::new(8));
        grid.set(Position::new(7, 1), Digit::new(9));

        assert_eq!(CandidateGrid::compute(&grid), None);
    }

    #[test]
    fn test_first_open_scans_row_major() {
        let grid = Grid::from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        )
        .unwrap();

        let candidates = CandidateGrid::compute(&grid).unwrap();
        let (pos, set) = candidates.first_open().unwrap();
        // (0, 0) and (1, 0) are givens, so the first blank is (2, 0).
        assert_eq!(pos, Position::new(2, 0));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_first_open_is_none_for_complete_grid() {
        let grid = Grid::from_str(
            "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        ",
        )
        .unwrap();

        let candidates = CandidateGrid::compute(&grid).unwrap();
        assert_eq!(candidates.first_open(), None);
    }

    #[test]
    fn test_compute_does_not_mutate_input() {
        let mut grid = Grid::new();
        grid.set(Position::new(4, 4), Digit::new(5));
        let before = grid.clone();

        let _ = CandidateGrid::compute(&grid);
        assert_eq!(grid, before);
    }
}
