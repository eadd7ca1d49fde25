//! Error types for startup operations.
//!
//! Event handling never fails: view errors raised while reacting to events
//! are logged and dropped. Only configuration and the one-time menu build
//! surface errors to the caller.

use pagenav_traits::ViewError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("View error: {0}")]
    View(#[from] ViewError),
}
