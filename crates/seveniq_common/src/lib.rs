//! Problem resolution for SevenIQ explanations.
//!
//! Classifies free-form input (math, code, logic, general) and computes a
//! ground-truth answer for arithmetic before any language model is asked to
//! explain it.

pub mod category;
pub mod confidence;
pub mod config;
pub mod error;
pub mod expr;
pub mod guidance;
pub mod modes;
pub mod resolver;

pub use category::{Category, DetectionPolicy};
pub use confidence::{Branch, ConfidenceTable};
pub use config::SolverConfig;
pub use error::{ConfigError, EvalError, SolveError};
pub use modes::{ExplanationDraft, ExplanationMode};
pub use resolver::{solve, ProblemSolver, Solution, SolverResult};
