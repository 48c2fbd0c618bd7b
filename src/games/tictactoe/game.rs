//! Turn rotation and move application for multi-player tic-tac-toe.

use super::action::{Move, MoveError};
use super::grid::Grid;
use super::rules::{self, Line};
use super::types::{GameStatus, Position, Token};
use crate::settings::GameSettings;
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// A single game: the grid plus whose turn it is and how it ended.
///
/// Tokens take turns in the order given by [`GameSettings::tokens`],
/// wrapping back to the first after the last.
#[derive(Debug, Clone, Getters)]
pub struct Game {
    /// Settings the game was created with.
    settings: GameSettings,

    /// The board.
    grid: Grid,

    /// Moves applied so far, in order.
    history: Vec<Move>,

    #[getter(skip)]
    turn: usize,

    #[getter(skip)]
    status: GameStatus,

    #[getter(skip)]
    winning_line: Option<Line>,
}

impl Game {
    /// Creates a new game with an empty grid.
    #[instrument(skip(settings), fields(players = settings.number_of_players()))]
    pub fn new(settings: GameSettings) -> Self {
        info!(win_length = settings.win_length(), "Starting new game");
        Self {
            grid: Grid::new(*settings.number_of_players()),
            settings,
            history: Vec::new(),
            turn: 0,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Token of the player whose turn it is.
    ///
    /// Once the game is won this stays on the winner.
    pub fn current_token(&self) -> Token {
        self.settings.tokens()[self.turn]
    }

    /// Current status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The line that completed the winning run, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Plays the current token at a logical position.
    ///
    /// Places the token, then checks for a winner, then for a draw. The
    /// turn passes to the next token only while the game continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::OutOfRange`] if the position is off the board.
    /// - [`MoveError::CellOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(token = %self.current_token()))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }

        let token = self.current_token();
        let (row, col) = position.to_storage();
        self.grid.place(token, row, col)?;
        self.history.push(Move::new(token, position));

        let win_length = *self.settings.win_length();
        if let Some(line) = rules::winning_line(&self.grid, token, win_length, row, col) {
            info!(%token, %line, "Player won");
            self.status = GameStatus::Won(token);
            self.winning_line = Some(line);
        } else if rules::is_draw(&self.grid) {
            info!(moves = self.history.len(), "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.turn = (self.turn + 1) % self.settings.tokens().len();
        }

        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse_tokens;

    fn game(tokens: &str, win_length: usize) -> Game {
        let tokens = parse_tokens(tokens).unwrap();
        Game::new(GameSettings::new(tokens.len(), tokens, win_length).unwrap())
    }

    fn play(game: &mut Game, row: usize, col: usize) -> GameStatus {
        game.play(Position::new(row, col)).unwrap()
    }

    #[test]
    fn test_turns_rotate_and_wrap() {
        let mut game = game("XYZ", 3);
        let order: Vec<char> = (0..4)
            .map(|i| {
                let token = game.current_token().as_char();
                play(&mut game, 0, i);
                token
            })
            .collect();
        assert_eq!(order, vec!['X', 'Y', 'Z', 'X']);
        assert_eq!(game.current_token().as_char(), 'Y');
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = game("XYZ", 3);
        play(&mut game, 1, 1);
        let err = game.play(Position::new(1, 1));
        assert_eq!(err, Err(MoveError::CellOccupied { row: 4, col: 4 }));
        assert_eq!(game.current_token().as_char(), 'Y');

        let err = game.play(Position::new(4, 0));
        assert_eq!(err, Err(MoveError::OutOfRange { row: 10, col: 2 }));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = game("XYZ", 3);
        // X on row 0, Y and Z on rows 2 and 3.
        for (row, col) in [(0, 0), (2, 0), (3, 0), (0, 1), (2, 2), (3, 3)] {
            assert_eq!(play(&mut game, row, col), GameStatus::InProgress);
        }
        let x = game.current_token();
        assert_eq!(play(&mut game, 0, 2), GameStatus::Won(x));
        assert_eq!(game.winning_line(), Some(Line::Row));
        assert_eq!(game.current_token(), x);
        assert_eq!(game.play(Position::new(1, 1)), Err(MoveError::GameOver));
    }
}
