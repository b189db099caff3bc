//! Error types for routefinder.
//!
//! Validation failures carry enough context to point at the offending input.
//! A missing route is not an error; see [`crate::PathResult::not_found`].

use thiserror::Error;

/// Errors raised while loading travel times or answering route queries.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A data line did not split into exactly three fields.
    #[error("Invalid CSV format. Expected 3 fields separated by '{delimiter}', got {fields} fields in line: {line}")]
    InvalidFormat {
        line: String,
        fields: usize,
        delimiter: char,
    },

    /// One of the three fields was blank after trimming.
    #[error("Empty fields are not allowed in line: {line}")]
    EmptyField { line: String },

    /// The time field was not an integer.
    #[error("Invalid time value. Must be a number: {value}")]
    InvalidTime { value: String },

    /// A record or arc failed construction checks.
    #[error("{0}")]
    InvalidRecord(String),

    /// A query parameter was empty.
    #[error("{0} parameter cannot be null or empty")]
    EmptyParameter(&'static str),

    /// The load boundary received a zero-byte payload.
    #[error("File is empty")]
    EmptyInput,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouteError {
    /// True for failures caused by caller input rather than the environment.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RouteError::Config(_) | RouteError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
