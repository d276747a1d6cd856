//! The 9×9 puzzle grid.
//!
//! [`Grid`] stores one `Option<Digit>` per cell in row-major order. It owns
//! parsing ([`FromStr`]), rendering ([`Display`]), and the pre-solve
//! duplicate-conflict check ([`Grid::is_consistent`]). The solver itself
//! lives in the `brutoku-solver` crate and treats the grid as a value it can
//! clone freely.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// An error produced when parsing a grid from text.
///
/// Both variants correspond to malformed input: the grid never reaches the
/// solver when parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum ParseGridError {
    /// A character that is neither a digit, a blank marker, nor whitespace.
    #[display("invalid character {_0:?} in grid")]
    InvalidCharacter(#[error(not(source))] char),
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

/// A 9×9 Sudoku grid.
///
/// Cells hold `Some(digit)` when filled and `None` when blank. The grid is a
/// plain value: cloning it copies all 81 cells, which is what the
/// backtracking solver relies on for branch isolation.
///
/// # Text format
///
/// [`Grid::from_str`] accepts digits `1`-`9` for filled cells and `.`, `_`,
/// or `0` for blanks; all whitespace is ignored. [`Display`] renders nine
/// lines with a space between each group of three columns:
///
/// ```
/// use brutoku_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert!(grid.to_string().starts_with("53_ _7_ ___"));
/// # Ok::<(), brutoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid with all 81 cells blank.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the value of the cell at `pos`, or `None` if it is blank.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos` to `value` (`None` blanks the cell).
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Digit>)> + '_ {
        Position::row_major().map(|pos| (pos, self.get(pos)))
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if no digit appears twice in any row, column, or 3×3
    /// box among the filled cells.
    ///
    /// Blank cells are ignored: an empty grid is consistent. This is the
    /// pre-solve validation step; a grid that fails it has no solution and
    /// the solver need not be invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use brutoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Digit::new(5));
    /// grid.set(Position::new(8, 0), Digit::new(5));
    /// assert!(!grid.is_consistent()); // two 5s in row 0
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for (pos, cell) in self.cells() {
            let Some(digit) = cell else { continue };
            let row = &mut rows[usize::from(pos.y())];
            let col = &mut cols[usize::from(pos.x())];
            let bx = &mut boxes[usize::from(pos.box_index())];
            if row.contains(digit) || col.contains(digit) || bx.contains(digit) {
                return false;
            }
            row.insert(digit);
            col.insert(digit);
            bx.insert(digit);
        }
        true
    }

    /// Returns `true` if the grid is a valid complete solution: every cell
    /// filled and every row, column, and box containing each digit exactly
    /// once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0usize;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = (u32::from(ch) - u32::from('0')) as u8;
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::InvalidCharacter(ch)),
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    f.write_char(' ')?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('_')?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    #[test]
    fn test_parse_known_puzzle() {
        let grid: Grid = PUZZLE.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Digit::new(5));
        assert_eq!(grid.get(Position::new(1, 0)), Digit::new(3));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Digit::new(9));
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_parse_accepts_all_blank_markers() {
        let dots = ".".repeat(81);
        let zeros = "0".repeat(81);
        let underscores = "_".repeat(81);
        for text in [dots, zeros, underscores] {
            let grid: Grid = text.parse().unwrap();
            assert_eq!(grid, Grid::new());
        }
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let text = format!("x{}", ".".repeat(80));
        assert_eq!(
            text.parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert_eq!(
            ".".repeat(80).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount(80))
        );
        assert_eq!(
            ".".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount(82))
        );
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::WrongCellCount(0)));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let grid: Grid = PUZZLE.parse().unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), 9);
        assert_eq!(rendered.lines().next(), Some("53_ _7_ ___"));
        assert_eq!(rendered.parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn test_empty_grid_is_consistent_but_incomplete() {
        let grid = Grid::new();
        assert!(grid.is_consistent());
        assert!(!grid.is_complete());
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_detects_row_conflict() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Digit::new(5));
        grid.set(Position::new(4, 0), Digit::new(5));
        assert!(!grid.is_consistent());
    }

    #[test]
    fn test_detects_column_conflict() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 1), Digit::new(2));
        grid.set(Position::new(3, 8), Digit::new(2));
        assert!(!grid.is_consistent());
    }

    #[test]
    fn test_detects_box_conflict() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Digit::new(7));
        grid.set(Position::new(2, 2), Digit::new(7));
        assert!(!grid.is_consistent());
    }

    #[test]
    fn test_distinct_digits_do_not_conflict() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Digit::new(1));
        grid.set(Position::new(1, 0), Digit::new(2));
        grid.set(Position::new(0, 1), Digit::new(3));
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_set_overwrites_and_blanks() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 4);
        grid.set(pos, Digit::new(9));
        assert_eq!(grid.get(pos), Digit::new(9));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }
}
