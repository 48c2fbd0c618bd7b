//! Labelled storage grid for multi-player tic-tac-toe.
//!
//! The grid keeps playable cells and their decoration in one square matrix
//! so it prints as a ruled table. Playable cells sit on a 2:1 stride:
//!
//! ```text
//!  |0|1|2|3|
//! ----------
//! 0| | | | |
//! ----------
//! 1| | | | |
//! ```
//!
//! Storage index `0` is the label gutter, odd indices hold separators and
//! logical position `p` lives at storage index `2p + 2`. Callers convert
//! with [`Grid::to_index`] before calling [`Grid::place`] or
//! [`Grid::validate_position`].

use super::action::MoveError;
use super::types::{Cell, Position, Token};
use tracing::{debug, instrument, warn};

/// Square board of `number_of_players + 1` playable positions per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    storage_extent: usize,
    filled_count: usize,
}

impl Grid {
    /// Creates an empty grid sized for `number_of_players`.
    ///
    /// The 3..=10 player range is enforced by the caller.
    #[instrument]
    pub fn new(number_of_players: usize) -> Self {
        let storage_extent = 2 * (number_of_players + 1) + 2;
        let cells = (0..storage_extent)
            .map(|row| {
                (0..storage_extent)
                    .map(|col| Self::initial_cell(row, col))
                    .collect()
            })
            .collect();

        debug!(storage_extent, "Grid initialized");
        Self {
            cells,
            storage_extent,
            filled_count: 0,
        }
    }

    fn initial_cell(row: usize, col: usize) -> Cell {
        match (row, col) {
            (0, 0) => Cell::Blank,
            (0, c) if c % 2 == 0 => Cell::Label(c / 2 - 1),
            (0, _) => Cell::ColumnRule,
            (r, 0) if r % 2 == 0 => Cell::Label(r / 2 - 1),
            (_, 0) => Cell::RowRule,
            (r, _) if r % 2 == 1 => Cell::RowRule,
            (_, c) if c % 2 == 1 => Cell::ColumnRule,
            _ => Cell::Blank,
        }
    }

    /// Maps a logical row or column to its storage index (`2p + 2`).
    pub const fn to_index(position: usize) -> usize {
        Position::to_index(position)
    }

    /// Side length of the storage matrix, decoration included.
    pub fn storage_extent(&self) -> usize {
        self.storage_extent
    }

    /// Number of playable positions per axis.
    pub fn logical_extent(&self) -> usize {
        self.storage_extent / 2 - 1
    }

    /// Number of tokens placed so far.
    pub fn filled_count(&self) -> usize {
        self.filled_count
    }

    /// Returns the storage cell at `(row, col)`, decoration included.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// True iff `(row, col)` addresses a playable cell, whatever it holds.
    fn is_playable(&self, row: usize, col: usize) -> bool {
        let on_axis = |i: usize| i >= 2 && i % 2 == 0 && i < self.storage_extent;
        on_axis(row) && on_axis(col)
    }

    /// Checks that `(row, col)` is a playable cell that is still empty.
    #[instrument(skip(self))]
    pub fn validate_position(&self, row: usize, col: usize) -> bool {
        self.is_playable(row, col) && self.cells[row][col] == Cell::Blank
    }

    /// Places `token` at storage coordinates `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if the coordinate is not a playable cell.
    /// - [`MoveError::CellOccupied`] if a token is already there.
    #[instrument(skip(self, token), fields(token = %token))]
    pub fn place(&mut self, token: Token, row: usize, col: usize) -> Result<(), MoveError> {
        if !self.is_playable(row, col) {
            warn!(row, col, "Rejected placement outside the playable grid");
            return Err(MoveError::OutOfRange { row, col });
        }
        if self.cells[row][col] != Cell::Blank {
            warn!(row, col, "Rejected placement on an occupied cell");
            return Err(MoveError::CellOccupied { row, col });
        }

        self.cells[row][col] = Cell::Token(token);
        self.filled_count += 1;
        debug!(filled = self.filled_count, "Token placed");
        Ok(())
    }

    /// True once every playable cell holds a token.
    pub fn is_full(&self) -> bool {
        let side = self.logical_extent();
        self.filled_count == side * side
    }

    /// Tokens on storage row `row`, left to right.
    #[instrument(skip(self))]
    pub fn get_row(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| tokens_only(cells.iter().skip(2).step_by(2).copied()))
            .unwrap_or_default()
    }

    /// Tokens on storage column `col`, top to bottom.
    #[instrument(skip(self))]
    pub fn get_column(&self, col: usize) -> String {
        tokens_only(
            self.cells
                .iter()
                .skip(2)
                .step_by(2)
                .filter_map(|row| row.get(col).copied()),
        )
    }

    /// Tokens on the top-left to bottom-right diagonal through `(row, col)`.
    ///
    /// Returns an empty string if `(row, col)` is not a playable cell.
    #[instrument(skip(self))]
    pub fn get_diagonal(&self, row: usize, col: usize) -> String {
        let Some((r, c)) = self.to_logical(row, col) else {
            return String::new();
        };
        let back = r.min(c);
        let (first_row, first_col) = (r - back, c - back);
        let len = self.logical_extent() - first_row.max(first_col);

        self.logical_tokens((0..len).map(|k| (first_row + k, first_col + k)))
    }

    /// Tokens on the top-right to bottom-left diagonal through `(row, col)`.
    ///
    /// Returns an empty string if `(row, col)` is not a playable cell.
    #[instrument(skip(self))]
    pub fn get_anti_diagonal(&self, row: usize, col: usize) -> String {
        let Some((r, c)) = self.to_logical(row, col) else {
            return String::new();
        };
        let last = self.logical_extent() - 1;
        let sum = r + c;

        self.logical_tokens((sum.saturating_sub(last)..=sum.min(last)).map(|r| (r, sum - r)))
    }

    fn to_logical(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        self.is_playable(row, col)
            .then(|| (row / 2 - 1, col / 2 - 1))
    }

    fn logical_tokens(&self, positions: impl Iterator<Item = (usize, usize)>) -> String {
        tokens_only(
            positions.map(|(r, c)| self.cells[Self::to_index(r)][Self::to_index(c)]),
        )
    }

    /// Renders the whole grid, labels and separators included.
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::to_string).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn tokens_only(cells: impl Iterator<Item = Cell>) -> String {
    cells.filter_map(Cell::token).map(Token::as_char).collect()
}
