//! Game rules for multi-player tic-tac-toe.
//!
//! Pure predicates over a [`Grid`](super::Grid) snapshot. Rules hold no
//! state; each check depends only on the grid and the most recent move.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, has_winner, winning_line};
