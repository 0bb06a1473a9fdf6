//! Error types for the engine
//!
//! The engine is pure arithmetic over pre-validated records, so the taxonomy
//! is narrow: bad inputs rejected at the boundary, explicit zero-divisor
//! contracts, and record-load failures. Missing collections are never errors;
//! the summary assembler treats them as empty.

use thiserror::Error;

/// Errors produced by the engine's validation and load boundaries
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input rejected before any calculation ran
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A payment formula was asked to divide by a zero term
    #[error("division by zero: {0}")]
    DivideByZero(&'static str),

    /// CSV record loading failed
    #[error("load error: {0}")]
    Load(#[from] csv::Error),

    /// File I/O failed while loading records
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] with a formatted message
    pub fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }
}
