//! Core error types used across the system

use thiserror::Error;
use crate::money::MoneyError;
use crate::temporal::TemporalError;

/// Core error type for the kernel
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

/// Parses a whole-number count such as a prior-claims tally
pub fn parse_count(raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::validation(format!("expected a whole number, got {:?}", raw)))
}
