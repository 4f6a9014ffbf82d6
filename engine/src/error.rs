use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("contract violation: {reason}")]
    ContractViolation { reason: String },

    #[error("invalid board: expected {expected} cells, got {got}")]
    InvalidBoard { expected: usize, got: usize },

    #[error("invalid move: cell {index} is already marked")]
    InvalidMove { index: usize },

    #[error("cell {index} is out of bounds")]
    OutOfBounds { index: usize },

    #[error("game is already over")]
    GameOver,
}
