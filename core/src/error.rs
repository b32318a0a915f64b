use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Trivia data source failed: {0}")]
    DataSource(String),
    #[error("Not enough trivia data, needed {requested} but only {available} available")]
    InsufficientData { requested: usize, available: usize },
    #[error("Invalid clue address")]
    InvalidAddress,
}

impl GameError {
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource(message.into())
    }

    /// Whether the error came out of a board load, as opposed to a click.
    pub const fn is_load_failure(&self) -> bool {
        matches!(self, Self::DataSource(_) | Self::InsufficientData { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
