// error.rs - Errors raised while reading or writing grid text

use std::path::PathBuf;

use rnumber_engine::EngineError;
use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("cannot access {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("grid text contains no rows")]
    Empty,

    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow { line: usize, expected: usize, found: usize },

    #[error("line {line}, column {column}: illegal symbol {symbol:?}")]
    IllegalSymbol { line: usize, column: usize, symbol: char },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
