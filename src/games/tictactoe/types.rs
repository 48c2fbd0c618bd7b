//! Core domain types for multi-player tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A player's mark on the board: a single ASCII letter.
///
/// Tokens are the only cell content that survives line extraction, so
/// anything that is not a letter (digits, `|`, `-`, blanks) is rejected
/// at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "char", into = "char")]
#[display("{}", _0)]
pub struct Token(char);

impl Token {
    /// Creates a token from a letter.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] if `c` is not an ASCII letter.
    pub fn new(c: char) -> Result<Self, TokenError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c))
        } else {
            Err(TokenError(c))
        }
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Token {
    type Error = TokenError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Token> for char {
    fn from(token: Token) -> Self {
        token.0
    }
}

/// A character that cannot be used as a player token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("'{}' is not a letter", _0)]
pub struct TokenError(#[error(not(source))] pub char);

/// A player-facing board coordinate.
///
/// Logical rows and columns run from `0` to `number_of_players` inclusive.
/// The grid stores them at `2p + 2`; see [`Position::to_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Logical row.
    pub row: usize,
    /// Logical column.
    pub col: usize,
}

impl Position {
    /// Creates a position from logical row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps one logical axis value to its storage index.
    pub const fn to_index(position: usize) -> usize {
        2 * position + 2
    }

    /// Returns the storage `(row, col)` pair for this position.
    pub fn to_storage(self) -> (usize, usize) {
        (Self::to_index(self.row), Self::to_index(self.col))
    }
}

/// One entry of the grid's storage matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty playable cell, or the gutter corner.
    Blank,
    /// A placed token.
    Token(Token),
    /// Axis label in the top row or left column.
    Label(usize),
    /// Vertical separator `|`.
    ColumnRule,
    /// Horizontal separator `-`.
    RowRule,
}

impl Cell {
    /// Returns the token held by this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Blank => write!(f, " "),
            Cell::Token(token) => write!(f, "{}", token),
            Cell::Label(n) => write!(f, "{}", n),
            Cell::ColumnRule => write!(f, "|"),
            Cell::RowRule => write!(f, "-"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the token.
    Won(Token),
    /// Every cell is filled and nobody won.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_accepts_letters() {
        assert_eq!(Token::new('X').map(Token::as_char), Ok('X'));
        assert_eq!(Token::new('q').map(Token::as_char), Ok('q'));
    }

    #[test]
    fn test_token_rejects_decoration() {
        for c in ['|', '-', ' ', '3', 'é'] {
            assert_eq!(Token::new(c), Err(TokenError(c)));
        }
    }

    #[test]
    fn test_to_index() {
        assert_eq!(Position::to_index(0), 2);
        assert_eq!(Position::to_index(3), 8);
        assert_eq!(Position::new(1, 2).to_storage(), (4, 6));
    }

    #[test]
    fn test_cell_display() {
        let x = Token::new('X').unwrap();
        assert_eq!(Cell::Token(x).to_string(), "X");
        assert_eq!(Cell::Label(10).to_string(), "10");
        assert_eq!(Cell::ColumnRule.to_string(), "|");
        assert_eq!(Cell::RowRule.to_string(), "-");
        assert_eq!(Cell::Blank.to_string(), " ");
    }
}
