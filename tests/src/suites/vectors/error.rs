//! Structured error types for the vector engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("library error: {0}")]
    Api(#[from] edsig_api::Error),

    #[error("unknown verification mode: {0}")]
    UnknownMode(String),

    #[error("{field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("case {id}: {source}")]
    Case {
        id: u64,
        #[source]
        source: Box<EngineError>,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
