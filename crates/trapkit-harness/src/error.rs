//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid fixture spec '{0}': expected PATH, PATH=good or PATH=bad")]
    InvalidSpec(String),
    #[error("no fixtures given")]
    NoFixtures,
}
