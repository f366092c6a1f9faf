//! Error types for the problem resolver.
//!
//! These never cross the public `solve` boundary as errors: the resolver
//! flattens them into the `error` string of a failed `SolverResult`.

use std::path::PathBuf;
use thiserror::Error;

use crate::confidence::Branch;

/// Failure while evaluating an arithmetic expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("expression is empty")]
    Empty,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unexpected '{found}' at position {pos}")]
    UnexpectedToken { pos: usize, found: char },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("expression nested too deeply")]
    TooDeep,

    #[error("division by zero")]
    DivisionByZero,

    #[error("value is not a finite number")]
    NonFinite,
}

/// Failure while solving a problem
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Failed to solve problem: problem is empty")]
    EmptyInput,

    #[error("Could not extract mathematical expression from problem")]
    ExtractionFailed,

    #[error("Math solving failed: failed to evaluate expression '{expr}': {source}")]
    Evaluation {
        expr: String,
        #[source]
        source: EvalError,
    },

    #[error("Failed to solve problem: {0}")]
    Internal(String),
}

impl SolveError {
    /// Stable short code, used in logs and JSON output
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::EmptyInput => "empty_input",
            SolveError::ExtractionFailed => "extraction_failed",
            SolveError::Evaluation { .. } => "evaluation_failed",
            SolveError::Internal(_) => "internal",
        }
    }
}

/// Failure while loading or validating solver configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("confidence for '{branch}' must be within [0, 1], got {value}")]
    ConfidenceOutOfRange { branch: Branch, value: f64 },
}

/// Unrecognised explanation mode name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown explanation mode '{0}' (expected child, grandma, ceo or technical)")]
pub struct UnknownMode(pub String);
