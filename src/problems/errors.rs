//! Error types for request dispatch
//!
//! [`ProblemError`] separates the two ways a request can fail before any step
//! is generated:
//!
//! - the problem id names no registered simulator ([`ProblemError::NotImplemented`])
//! - the input cannot be shaped into what the simulator expects
//!   ([`ProblemError::InvalidInput`], carrying the [`InputError`] cause)
//!
//! Simulators themselves never fail; degenerate inputs end in a terminal step.

use thiserror::Error;

/// Why a request field could not be parsed
#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected an array, got {found}")]
    ExpectedArray { found: String },

    #[error("expected an integer, got {found}")]
    ExpectedInteger { found: String },

    #[error("value {value} is out of range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("malformed JSON array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required value")]
    Missing,
}

/// Errors returned by [`crate::problems::simulate`]
#[derive(Debug, Error)]
pub enum ProblemError {
    /// No simulator is registered for the requested id or slug
    #[error("dynamic steps not yet implemented for problem '{problem}'")]
    NotImplemented { problem: String },

    /// The request could not be parsed into the simulator's input shape
    #[error("invalid {field} for {problem}: {source}")]
    InvalidInput {
        problem: &'static str,
        field: &'static str,
        #[source]
        source: InputError,
    },
}

impl ProblemError {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ProblemError::NotImplemented { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ProblemError::InvalidInput { .. })
    }
}
