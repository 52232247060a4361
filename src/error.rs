use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("Hand must be exactly 2 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("Card {0} appears more than once")]
    DuplicateCard(String),

    #[error("Need at least {need} cards, got {got}")]
    NotEnoughCards { need: usize, got: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid profile weight {field} = {value}")]
    InvalidProfileWeight { field: &'static str, value: f64 },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type AgentResult<T> = Result<T, AgentError>;
