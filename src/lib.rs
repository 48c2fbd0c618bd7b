//! Multiplayer tic-tac-toe for the text console.
//!
//! Three to ten players share a square board with one more playable
//! position per axis than there are players. The winning run length is
//! configurable between 3 and the board's side length.
//!
//! # Architecture
//!
//! - **Grid**: labelled storage matrix, placement and line extraction
//! - **Rules**: stateless win and draw predicates over a grid
//! - **Game**: turn rotation and move application
//! - **Settings**: validated configuration from TOML, flags or prompts
//! - **Console**: prompts, retry loops and banners
//!
//! # Example
//!
//! ```
//! use multi_tictactoe::{Game, GameSettings, GameStatus, Position, parse_tokens};
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = GameSettings::new(3, parse_tokens("XYZ")?, 3)?;
//! let mut game = Game::new(settings);
//!
//! assert_eq!(game.play(Position::new(0, 0))?, GameStatus::InProgress);
//! println!("{}", game.grid());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
pub mod games;
mod settings;

// Crate-level exports - Console front end
pub use console::{Console, END_BANNER, INTRO_BANNER};

// Crate-level exports - Settings
pub use settings::{
    ConfigError, ConfigErrorKind, GameSettings, MAX_PLAYERS, MIN_PLAYERS, MIN_WIN_LENGTH,
    PartialSettings, check_player_count, max_win_length, parse_tokens,
};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Cell, Game, GameStatus, Grid, Line, Move, MoveError, Position, Token, TokenError, has_winner,
    is_draw, winning_line,
};
