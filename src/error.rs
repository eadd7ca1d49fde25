// src/error.rs
use pagenav_core::NavError;
use thiserror::Error;

/// Errors raised while loading or running a replay scenario.
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Navigation failed to start: {0}")]
    Nav(#[from] NavError),

    #[error("Scenario is invalid: {0}")]
    Scenario(String),
}
