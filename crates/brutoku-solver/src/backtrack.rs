//! Depth-first backtracking search.

use brutoku_core::Grid;

use crate::candidates::CandidateGrid;

/// Statistics collected during a backtracking solve.
///
/// # Examples
///
/// ```
/// use brutoku_core::Grid;
/// use brutoku_solver::BacktrackSolver;
///
/// let mut grid = Grid::new();
/// let (solved, stats) = BacktrackSolver::new().solve_with_stats(&mut grid);
/// assert!(solved);
/// assert!(stats.nodes >= 81);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of search nodes visited (recursive calls entered).
    pub nodes: usize,
    /// Number of dead ends hit: candidate computation failed, or every
    /// candidate digit of the branch cell was exhausted.
    pub dead_ends: usize,
}

/// A brute-force Sudoku solver.
///
/// The search recomputes candidates from scratch at every recursion level
/// (see [`CandidateGrid::compute`]), branches on the first unresolved cell in
/// row-major order, and tries that cell's candidate digits in ascending
/// order. The first completion found wins; alternative solutions are never
/// enumerated. Each branch operates on its own copy of the grid, so sibling
/// branches never observe one another's speculative assignments.
///
/// With a fixed cell-selection rule and a fixed digit order the search is
/// fully deterministic: solving the same grid twice yields the identical
/// solution. Recursion depth is bounded by the 81 cells, but the branching
/// factor can make runtime exponential in the number of blanks.
///
/// # Examples
///
/// ```
/// use brutoku_core::Grid;
/// use brutoku_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
///
/// let mut grid = Grid::new();
/// assert!(solver.solve(&mut grid));
/// assert!(grid.is_solved());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Searches for a completion of `grid`.
    ///
    /// On success, returns `true` and overwrites `grid` with the solution.
    /// On failure, returns `false` and leaves `grid` untouched.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        self.solve_with_stats(grid).0
    }

    /// Like [`solve`](Self::solve), additionally reporting search
    /// statistics.
    pub fn solve_with_stats(&self, grid: &mut Grid) -> (bool, SolveStats) {
        let mut stats = SolveStats::default();
        match search(grid.clone(), &mut stats) {
            Some(solved) => {
                *grid = solved;
                (true, stats)
            }
            None => (false, stats),
        }
    }
}

/// One level of the depth-first search.
///
/// Takes the grid by value: every branch owns an independent copy, which is
/// what isolates sibling branches from one another.
fn search(grid: Grid, stats: &mut SolveStats) -> Option<Grid> {
    stats.nodes += 1;

    let Some(candidates) = CandidateGrid::compute(&grid) else {
        stats.dead_ends += 1;
        return None;
    };

    // No open cell left means every cell is filled; the current grid is the
    // solution.
    let Some((pos, open)) = candidates.first_open() else {
        return Some(grid);
    };

    // An empty open set was already rejected by compute, so this loop runs
    // at least once for any candidate grid it produced.
    for digit in open {
        let mut next = grid.clone();
        next.set(pos, Some(digit));
        if let Some(solved) = search(next, stats) {
            return Some(solved);
        }
    }

    stats.dead_ends += 1;
    None
}
