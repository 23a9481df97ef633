//! Textual game commands.

use std::fmt;
use std::str::FromStr;

use sonar_core::{Direction, ParseDirectionError};

/// One player command.
///
/// | Text | Command |
/// |---|---|
/// | `GO <dir>` | sail one step, `<dir>` one of `N S E W NW NE SW SE` |
/// | `SONAR` | drop a sonar |
/// | `PLOT` | draw the shortest route to a detected treasure |
/// | `QUIT` | give up |
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Go(Direction),
    Sonar,
    Plot,
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Go(dir) => write!(f, "GO {dir}"),
            Self::Sonar => f.write_str("SONAR"),
            Self::Plot => f.write_str("PLOT"),
            Self::Quit => f.write_str("QUIT"),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = match (words.next(), words.next()) {
            (Some("GO"), Some(dir)) => {
                Self::Go(dir.parse().map_err(ParseCommandError::Direction)?)
            }
            (Some("GO"), None) => return Err(ParseCommandError::MissingDirection),
            (Some("SONAR"), None) => Self::Sonar,
            (Some("PLOT"), None) => Self::Plot,
            (Some("QUIT"), None) => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(s.trim().to_string())),
        };
        if words.next().is_some() {
            return Err(ParseCommandError::Unknown(s.trim().to_string()));
        }
        Ok(command)
    }
}

/// A line that is not a valid [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    Unknown(String),
    MissingDirection,
    Direction(ParseDirectionError),
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(f, "unsupported command \u{201c}{s}\u{201d}"),
            Self::MissingDirection => f.write_str("GO needs a direction"),
            Self::Direction(e) => write!(f, "GO: {e}"),
        }
    }
}

impl std::error::Error for ParseCommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Direction(e) => Some(e),
            _ => None,
        }
    }
}
