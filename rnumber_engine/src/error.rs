// error.rs - Error types for the engine

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("invalid run configuration: {0}")]
    InvalidConfig(String),

    #[error("worker for rows {start}..{end} failed: {reason}")]
    WorkerFailed { start: usize, end: usize, reason: String },

    #[error("failed to start worker pool: {0}")]
    Runtime(#[from] std::io::Error),
}
