//! Win detection for multi-player tic-tac-toe.
//!
//! A move can only create or extend a run through its own cell, so only
//! the four lines crossing the last placement are inspected.

use super::super::{Grid, Token};
use tracing::{debug, instrument};

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Line {
    /// Horizontal line.
    #[strum(to_string = "row")]
    Row,
    /// Vertical line.
    #[strum(to_string = "column")]
    Column,
    /// Top-left to bottom-right.
    #[strum(to_string = "diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Extracts the tokens of this line through storage cell `(row, col)`.
    pub fn extract(self, grid: &Grid, row: usize, col: usize) -> String {
        match self {
            Line::Row => grid.get_row(row),
            Line::Column => grid.get_column(col),
            Line::Diagonal => grid.get_diagonal(row, col),
            Line::AntiDiagonal => grid.get_anti_diagonal(row, col),
        }
    }
}

/// Returns the first line through `(row, col)` that holds `run_length`
/// consecutive `token`s.
#[instrument(skip(grid, token), fields(token = %token))]
pub fn winning_line(
    grid: &Grid,
    token: Token,
    run_length: usize,
    row: usize,
    col: usize,
) -> Option<Line> {
    let run: String = std::iter::repeat_n(token.as_char(), run_length).collect();

    <Line as strum::IntoEnumIterator>::iter().find(|line| {
        let tokens = line.extract(grid, row, col);
        debug!(%line, %tokens, "Checking line");
        tokens.contains(&run)
    })
}

/// Checks whether `token` has a run of `run_length` through storage cell
/// `(row, col)`.
pub fn has_winner(grid: &Grid, token: Token, run_length: usize, row: usize, col: usize) -> bool {
    winning_line(grid, token, run_length, row, col).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(c: char) -> Token {
        Token::new(c).unwrap()
    }

    fn place(grid: &mut Grid, c: char, row: usize, col: usize) {
        grid.place(token(c), Grid::to_index(row), Grid::to_index(col))
            .unwrap();
    }

    fn wins(grid: &Grid, c: char, run: usize, row: usize, col: usize) -> Option<Line> {
        winning_line(grid, token(c), run, Grid::to_index(row), Grid::to_index(col))
    }

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::new(3);
        assert!(!has_winner(&grid, token('X'), 3, 2, 2));
    }

    #[test]
    fn test_row_win() {
        let mut grid = Grid::new(3);
        for col in 0..3 {
            place(&mut grid, 'X', 0, col);
        }
        assert_eq!(wins(&grid, 'X', 3, 0, 2), Some(Line::Row));
        assert_eq!(wins(&grid, 'X', 4, 0, 2), None);
    }

    #[test]
    fn test_column_win() {
        let mut grid = Grid::new(4);
        for row in 1..5 {
            place(&mut grid, 'Q', row, 3);
        }
        assert_eq!(wins(&grid, 'Q', 4, 4, 3), Some(Line::Column));
    }

    #[test]
    fn test_diagonal_win() {
        let mut grid = Grid::new(5);
        for k in 0..3 {
            place(&mut grid, 'O', 2 + k, 1 + k);
        }
        assert_eq!(wins(&grid, 'O', 3, 3, 2), Some(Line::Diagonal));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut grid = Grid::new(3);
        place(&mut grid, 'Y', 1, 3);
        place(&mut grid, 'Y', 2, 2);
        place(&mut grid, 'Y', 3, 1);
        assert_eq!(wins(&grid, 'Y', 3, 3, 1), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_run_must_be_contiguous() {
        let mut grid = Grid::new(4);
        place(&mut grid, 'X', 0, 0);
        place(&mut grid, 'X', 0, 1);
        place(&mut grid, 'Y', 0, 2);
        place(&mut grid, 'X', 0, 3);
        assert_eq!(wins(&grid, 'X', 3, 0, 3), None);
    }

    #[test]
    fn test_other_token_does_not_win() {
        let mut grid = Grid::new(3);
        for col in 0..3 {
            place(&mut grid, 'X', 1, col);
        }
        assert!(!has_winner(&grid, token('Y'), 3, Grid::to_index(1), Grid::to_index(2)));
    }

    #[test]
    fn test_line_display() {
        assert_eq!(Line::AntiDiagonal.to_string(), "anti-diagonal");
        assert_eq!(Line::Row.to_string(), "row");
    }
}
