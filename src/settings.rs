//! Game settings: player count, tokens and winning run length.
//!
//! Settings come from up to three places, later ones winning: a TOML file,
//! command-line flags, then interactive prompts for whatever is still
//! missing. [`PartialSettings`] carries the unvalidated values and
//! [`GameSettings::new`] is the single validation point.

use crate::games::tictactoe::Token;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 3;
/// Most players a game supports.
pub const MAX_PLAYERS: usize = 10;
/// Shortest winning run.
pub const MIN_WIN_LENGTH: usize = 3;

/// Longest winning run for `number_of_players`: the board's side length.
pub const fn max_win_length(number_of_players: usize) -> usize {
    number_of_players + 1
}

/// Validated settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameSettings {
    /// Number of players, 3 to 10.
    number_of_players: usize,

    /// One unique token per player, in turn order.
    tokens: Vec<Token>,

    /// Consecutive tokens needed to win, 3 to `number_of_players + 1`.
    win_length: usize,
}

impl GameSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::InvalidConfiguration`] if the player count
    /// or win length is out of range, or the tokens are not one unique
    /// letter per player.
    #[track_caller]
    #[instrument(skip(tokens), fields(tokens = tokens.len()))]
    pub fn new(
        number_of_players: usize,
        tokens: Vec<Token>,
        win_length: usize,
    ) -> Result<Self, ConfigError> {
        check_player_count(number_of_players)?;

        if tokens.len() != number_of_players {
            return Err(ConfigError::invalid(format!(
                "expected {} tokens, got {}",
                number_of_players,
                tokens.len()
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = tokens.iter().find(|t| !seen.insert(**t)) {
            return Err(ConfigError::invalid(format!(
                "token '{}' is used by more than one player",
                dup
            )));
        }

        let max = max_win_length(number_of_players);
        if !(MIN_WIN_LENGTH..=max).contains(&win_length) {
            return Err(ConfigError::invalid(format!(
                "win length must be between {} and {}, got {}",
                MIN_WIN_LENGTH, max, win_length
            )));
        }

        debug!("Settings validated");
        Ok(Self {
            number_of_players,
            tokens,
            win_length,
        })
    }
}

/// Settings that may still be incomplete or invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    /// Number of players.
    pub number_of_players: Option<usize>,

    /// Tokens in turn order, written as one string (`"XYZ"`).
    pub tokens: Option<String>,

    /// Consecutive tokens needed to win.
    pub win_length: Option<usize>,
}

impl PartialSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Io(e.to_string())))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Overlays `other` on `self`; values present in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            number_of_players: other.number_of_players.or(self.number_of_players),
            tokens: other.tokens.or(self.tokens),
            win_length: other.win_length.or(self.win_length),
        }
    }

    /// Validates and converts once every value is present.
    ///
    /// Returns `Ok(None)` if any value is still missing.
    #[instrument(skip(self))]
    pub fn complete(&self) -> Result<Option<GameSettings>, ConfigError> {
        let (Some(players), Some(tokens), Some(win_length)) =
            (self.number_of_players, &self.tokens, self.win_length)
        else {
            return Ok(None);
        };

        let tokens = parse_tokens(tokens)?;
        GameSettings::new(players, tokens, win_length).map(Some)
    }
}

/// Checks that `number_of_players` is within 3..=10.
#[track_caller]
pub fn check_player_count(number_of_players: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&number_of_players) {
        Ok(())
    } else {
        Err(ConfigError::invalid(format!(
            "number of players must be between {} and {}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, number_of_players
        )))
    }
}

/// Parses a token string such as `"XYZ"` into tokens.
#[track_caller]
pub fn parse_tokens(s: &str) -> Result<Vec<Token>, ConfigError> {
    s.chars()
        .map(|c| {
            Token::new(c).map_err(|e| {
                warn!(%e, "Rejected token");
                ConfigError::invalid(e.to_string())
            })
        })
        .collect()
}

/// What went wrong while building settings.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Player count, tokens or win length outside the allowed bounds.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// The settings file could not be read.
    #[display("Failed to read config file: {}", _0)]
    Io(String),

    /// The settings file is not valid TOML for [`PartialSettings`].
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// Error kind.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    #[track_caller]
    fn invalid(message: String) -> Self {
        warn!(%message, "Invalid configuration");
        Self::new(ConfigErrorKind::InvalidConfiguration(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        parse_tokens(s).unwrap()
    }

    fn is_invalid(result: Result<GameSettings, ConfigError>) -> bool {
        matches!(
            result,
            Err(ConfigError {
                kind: ConfigErrorKind::InvalidConfiguration(_),
                ..
            })
        )
    }

    #[test]
    fn test_valid_settings() {
        let settings = GameSettings::new(3, tokens("XYZ"), 4).unwrap();
        assert_eq!(*settings.number_of_players(), 3);
        assert_eq!(*settings.win_length(), 4);
        assert_eq!(settings.tokens().len(), 3);
    }

    #[test]
    fn test_player_count_bounds() {
        assert!(is_invalid(GameSettings::new(2, tokens("XY"), 3)));
        assert!(is_invalid(GameSettings::new(11, tokens("ABCDEFGHIJK"), 3)));
        assert!(GameSettings::new(10, tokens("ABCDEFGHIJ"), 11).is_ok());
    }

    #[test]
    fn test_win_length_bounds() {
        assert!(is_invalid(GameSettings::new(3, tokens("XYZ"), 2)));
        assert!(is_invalid(GameSettings::new(3, tokens("XYZ"), 5)));
    }

    #[test]
    fn test_token_rules() {
        assert!(is_invalid(GameSettings::new(3, tokens("XY"), 3)));
        assert!(is_invalid(GameSettings::new(3, tokens("XYX"), 3)));
        assert!(parse_tokens("X1Z").is_err());
    }

    #[test]
    fn test_error_records_location() {
        let err = GameSettings::new(1, Vec::new(), 3).unwrap_err();
        assert!(err.file.ends_with(".rs"));
        assert!(err.to_string().starts_with("Config error: Invalid configuration"));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = PartialSettings {
            number_of_players: Some(4),
            tokens: Some("ABCD".into()),
            win_length: None,
        };
        let flags = PartialSettings {
            number_of_players: Some(3),
            tokens: None,
            win_length: Some(3),
        };
        let merged = file.merge(flags);
        assert_eq!(merged.number_of_players, Some(3));
        assert_eq!(merged.tokens.as_deref(), Some("ABCD"));
        assert_eq!(merged.win_length, Some(3));
    }

    #[test]
    fn test_complete_requires_every_value() {
        let partial = PartialSettings {
            number_of_players: Some(3),
            tokens: None,
            win_length: Some(3),
        };
        assert_eq!(partial.complete().unwrap(), None);

        let partial = PartialSettings {
            tokens: Some("XYZ".into()),
            ..partial
        };
        assert!(partial.complete().unwrap().is_some());
    }
}
