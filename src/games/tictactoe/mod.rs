//! Multi-player tic-tac-toe on a labelled, variable-size grid.

mod action;
mod game;
mod grid;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use grid::Grid;
pub use rules::{Line, has_winner, is_draw, winning_line};
pub use types::{Cell, GameStatus, Position, Token, TokenError};
