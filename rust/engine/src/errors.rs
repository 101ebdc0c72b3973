use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid dice input: {reason}")]
    InvalidInput { reason: String },
    #[error("strategy returned invalid re-roll index {index} for {dice} dice")]
    InvalidStrategyOutput { index: usize, dice: usize },
    #[error("player '{name}' already exists")]
    DuplicatePlayer { name: String },
    #[error("requested {requested} chips with only {available} left in stock")]
    StockUnderflow { requested: u8, available: u8 },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}
