//! Core error types

use thiserror::Error;

/// Errors raised while setting up folio components
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A component configuration was rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for folio operations
pub type Result<T> = std::result::Result<T, Error>;
