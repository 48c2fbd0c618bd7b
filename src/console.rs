//! Interactive console front end.
//!
//! Owns every prompt, retry loop and banner. The console reads whole lines
//! so it can be driven by any [`BufRead`], which is how the tests script a
//! game.

use crate::games::tictactoe::{Game, GameStatus, MoveError, Position, Token};
use crate::settings::{
    self, GameSettings, MAX_PLAYERS, MIN_PLAYERS, MIN_WIN_LENGTH, PartialSettings,
};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Printed before setup.
pub const INTRO_BANNER: &str = "----------------------------------------\n\
                                Now Playing: Multiplayer Tic-Tac-Toe\n\
                                ----------------------------------------\n";

/// Printed after the final board.
pub const END_BANNER: &str = "----------------------------------------\n\
                              Game Over\n\
                              Good Bye...\n\
                              ----------------------------------------\n";

/// Line-oriented console over an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs a whole session: banner, setup, game, final board.
    #[instrument(skip(self))]
    pub fn run(&mut self, overrides: PartialSettings) -> Result<GameStatus> {
        writeln!(self.output, "{}", INTRO_BANNER)?;

        let settings = self.configure(overrides)?;
        let mut game = Game::new(settings);
        let status = self.play(&mut game)?;

        writeln!(self.output, "{}\n", game.grid())?;
        writeln!(self.output, "{}", END_BANNER)?;
        self.output.flush()?;
        Ok(status)
    }

    /// Builds settings, prompting for anything `overrides` leaves out.
    ///
    /// Values given in `overrides` are not re-prompted; if they are invalid
    /// the error is returned.
    #[instrument(skip(self))]
    pub fn configure(&mut self, overrides: PartialSettings) -> Result<GameSettings> {
        if let Some(settings) = overrides.complete()? {
            return Ok(settings);
        }

        let players = match overrides.number_of_players {
            Some(n) => {
                settings::check_player_count(n)?;
                n
            }
            None => self.prompt_player_count()?,
        };
        let tokens = match overrides.tokens.as_deref() {
            Some(s) => settings::parse_tokens(s)?,
            None => self.prompt_tokens(players)?,
        };
        let win_length = match overrides.win_length {
            Some(n) => n,
            None => self.prompt_win_length(players)?,
        };

        Ok(GameSettings::new(players, tokens, win_length)?)
    }

    /// Runs the turn loop until the game is won or drawn.
    #[instrument(skip_all)]
    pub fn play(&mut self, game: &mut Game) -> Result<GameStatus> {
        let players = *game.settings().number_of_players();

        loop {
            match game.status() {
                GameStatus::Won(token) => {
                    let line = game
                        .winning_line()
                        .map(|line| format!(" with a {}", line))
                        .unwrap_or_default();
                    writeln!(
                        self.output,
                        "\nCongratulations!\nPlayer {} has won{}.\n",
                        token, line
                    )?;
                    return Ok(game.status());
                }
                GameStatus::Draw => {
                    writeln!(self.output, "\nThe game is a draw\n")?;
                    return Ok(game.status());
                }
                GameStatus::InProgress => {}
            }

            writeln!(self.output, "{}\n", game.grid())?;
            writeln!(self.output, "Player {} turn", game.current_token())?;

            let Some(row) = self.prompt_coordinate("row", players)? else {
                continue;
            };
            let Some(col) = self.prompt_coordinate("column", players)? else {
                continue;
            };
            writeln!(self.output)?;

            match game.play(Position::new(row, col)) {
                Ok(_) => {}
                Err(MoveError::CellOccupied { .. }) => writeln!(
                    self.output,
                    "Error: Another player has already made that move\nPlease try again\n"
                )?,
                Err(e) => writeln!(self.output, "Error: {}\nPlease try again\n", e)?,
            }
        }
    }

    fn prompt_player_count(&mut self) -> Result<usize> {
        loop {
            write!(
                self.output,
                "Number of players? (Please enter a number between {} and {}) ",
                MIN_PLAYERS, MAX_PLAYERS
            )?;
            let line = self.read_line()?;

            match line.trim().parse::<usize>() {
                Err(_) => writeln!(
                    self.output,
                    "\nError: Input must be a whole number\nPlease try again\n"
                )?,
                Ok(n) if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => writeln!(
                    self.output,
                    "\nError: Input must be between {} and {}\nPlease try again\n",
                    MIN_PLAYERS, MAX_PLAYERS
                )?,
                Ok(n) => {
                    info!(players = n, "Player count chosen");
                    return Ok(n);
                }
            }
        }
    }

    fn prompt_tokens(&mut self, players: usize) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::with_capacity(players);

        while tokens.len() < players {
            write!(
                self.output,
                "Player {} please enter your symbol (must be a single character): ",
                tokens.len() + 1
            )?;
            let line = self.read_line()?;

            let mut chars = line.trim().chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                writeln!(
                    self.output,
                    "\nError: Input must be a single character\nPlease try again"
                )?;
                continue;
            };
            let Ok(token) = Token::new(c) else {
                writeln!(self.output, "\nError: Input must be a letter\nPlease try again")?;
                continue;
            };
            if tokens.contains(&token) {
                writeln!(
                    self.output,
                    "Error: Character has already been taken\nPlease try again"
                )?;
                continue;
            }

            writeln!(self.output)?;
            tokens.push(token);
        }

        Ok(tokens)
    }

    fn prompt_win_length(&mut self, players: usize) -> Result<usize> {
        let max = settings::max_win_length(players);

        loop {
            write!(
                self.output,
                "Please choose how many pieces in a row, column, or diagonal are required to win (must be between {} and {}) ",
                MIN_WIN_LENGTH, max
            )?;
            let line = self.read_line()?;

            match line.trim().parse::<usize>() {
                Err(_) => writeln!(self.output, "\nError: Input must be a number\nPlease try again")?,
                Ok(n) if !(MIN_WIN_LENGTH..=max).contains(&n) => writeln!(
                    self.output,
                    "\nError: Input must be between {} and {}\nPlease try again",
                    MIN_WIN_LENGTH, max
                )?,
                Ok(n) => return Ok(n),
            }
        }
    }

    /// Prompts once for a logical row or column; `None` means bad input.
    fn prompt_coordinate(&mut self, axis: &str, players: usize) -> Result<Option<usize>> {
        write!(self.output, "Please enter {} number: ", axis)?;
        let line = self.read_line()?;

        let Ok(n) = line.trim().parse::<usize>() else {
            writeln!(self.output, "\nError: input must be a number\nPlease try again\n")?;
            return Ok(None);
        };
        if n > players {
            writeln!(self.output, "\nError: input is out of bounds\nPlease try again\n")?;
            return Ok(None);
        }

        Ok(Some(n))
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }

        debug!(input = line.trim_end(), "Read line");
        Ok(line)
    }
}
