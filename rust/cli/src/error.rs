use std::fmt;
use std::io;

use schocken_engine::errors::GameError;

/// Errors surfaced by CLI subcommands.
#[derive(Debug)]
pub enum CliError {
    /// I/O failure while reading or writing files or streams.
    Io(io::Error),
    /// Invalid command-line input, such as an unknown strategy name.
    InvalidInput(String),
    /// Error propagated from the game engine.
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
            CliError::Engine(e) => write!(f, "engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::InvalidInput(_) => None,
            CliError::Engine(e) => Some(e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        CliError::Engine(e)
    }
}
