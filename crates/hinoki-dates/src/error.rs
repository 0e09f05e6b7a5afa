//! Error types for date-expression resolution.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// No classifier or relative keyword matched, or a numeric day/year was
    /// outside its accepted range. Carries the raw input as typed.
    #[error("invalid date: {0}")]
    InvalidExpression(String),

    #[error("unknown granularity: {0}")]
    UnknownGranularity(String),
}

pub type Result<T> = std::result::Result<T, DateError>;
