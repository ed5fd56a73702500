//! Error types for the simulation core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// A customer count from the shell boundary that is not a
    /// non-negative integer.
    #[error("invalid customer count: {value}")]
    InvalidCount { value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
