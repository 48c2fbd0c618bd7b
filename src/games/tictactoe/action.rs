//! First-class action types for multi-player tic-tac-toe.
//!
//! Moves are domain events, not side effects. A rejected move is reported
//! back to the caller as a [`MoveError`] so the turn loop can re-prompt.

use super::{Position, Token};
use serde::{Deserialize, Serialize};

/// A move: a player placing their token at a logical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The token that was placed.
    pub token: Token,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.token, self.position)
    }
}

/// Error that can occur when applying a move.
///
/// Coordinates are storage indices, as passed to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is not a playable cell of the grid.
    #[display("Position ({}, {}) is out of range", row, col)]
    OutOfRange {
        /// Storage row.
        row: usize,
        /// Storage column.
        col: usize,
    },

    /// The cell already holds a token.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Storage row.
        row: usize,
        /// Storage column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
