//! Error types for googlebot-map.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("Persist error: {0}")]
    Persist(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
