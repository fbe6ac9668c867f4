use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: cell {0} is outside the board")]
    InvalidMove(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid window size {0:?}, expected WIDTHxHEIGHT")]
    InvalidWindowSize(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
