//! Problem resolver.
//!
//! Runs before any language model call: classifies free-form input and, for
//! arithmetic, computes the actual answer so the explanation is anchored to
//! ground truth instead of whatever the model invents.
//!
//! Pure and synchronous. A `ProblemSolver` holds only immutable config and can
//! be shared between threads.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::category::{self, Category};
use crate::confidence::Branch;
use crate::config::SolverConfig;
use crate::error::SolveError;
use crate::expr;
use crate::guidance;

/// Leftmost run of two to four ASCII numbers chained by arithmetic operators
static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?(?:\s*[+\-*/^]\s*[0-9]+(?:\.[0-9]+)?){1,3}").unwrap()
});

/// A solved problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Normalized (trimmed, lower-cased) input
    pub problem: String,
    /// Computed result for Math, a structured plan for everything else
    pub answer: String,
    /// Fixed per-branch heuristic in [0, 1]
    pub confidence: f64,
    /// Which solver produced the answer
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Envelope returned across the public boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolverResult {
    pub fn success(solution: Solution) -> Self {
        Self {
            success: true,
            solution: Some(solution),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            solution: None,
            error: Some(error.into()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Result<Solution, SolveError>> for SolverResult {
    fn from(result: Result<Solution, SolveError>) -> Self {
        match result {
            Ok(solution) => Self::success(solution),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Trim and lower-case
pub fn normalize(problem: &str) -> String {
    problem.trim().to_lowercase()
}

/// Locate the first arithmetic expression in the text.
///
/// A match that touches a non-ASCII digit (full-width, Arabic-Indic, ...) is
/// only part of a number and is skipped.
pub fn extract_expression(text: &str) -> Option<&str> {
    EXPRESSION
        .find_iter(text)
        .find(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(char::is_numeric) && !after.is_some_and(char::is_numeric)
        })
        .map(|m| m.as_str())
}

/// Classifies and solves problems
#[derive(Debug, Clone, Default)]
pub struct ProblemSolver {
    config: SolverConfig,
}

impl ProblemSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Category the input would be dispatched to
    pub fn classify(&self, problem: &str) -> Category {
        category::detect(&normalize(problem), self.config.detection.policy)
    }

    /// Solve a problem. Failures are reported in the result, never raised.
    pub fn solve(&self, problem: &str) -> SolverResult {
        let result = self.try_solve(problem);
        match &result {
            Err(e @ SolveError::Internal(_)) => warn!(code = e.code(), "Solver failure: {}", e),
            Err(e) => debug!(code = e.code(), "Problem not solved: {}", e),
            Ok(_) => {}
        }
        result.into()
    }

    /// Solve a problem, keeping the typed error
    pub fn try_solve(&self, problem: &str) -> Result<Solution, SolveError> {
        let normalized = normalize(problem);
        if normalized.is_empty() {
            return Err(SolveError::EmptyInput);
        }

        let category = category::detect(&normalized, self.config.detection.policy);
        debug!(
            %category,
            keywords = ?category::matched_keywords(&normalized, category),
            "Classified problem"
        );

        let (branch, answer) = match category {
            Category::Math => (Branch::MathEval, solve_math(&normalized)?),
            other => {
                let branch = guidance::select_branch(other, &normalized).ok_or_else(|| {
                    SolveError::Internal(format!("no solver branch for category '{}'", other))
                })?;
                let text = guidance::text(branch).ok_or_else(|| {
                    SolveError::Internal(format!("no guidance text for branch '{}'", branch))
                })?;
                (branch, text.to_string())
            }
        };

        if answer.is_empty() {
            return Err(SolveError::Internal(format!(
                "{} produced an empty answer",
                branch
            )));
        }

        debug!(%branch, "Solved problem");

        Ok(Solution {
            problem: normalized,
            answer,
            confidence: self.config.confidence.get(branch),
            method: category.method().to_string(),
            category: Some(category),
        })
    }
}

fn solve_math(normalized: &str) -> Result<String, SolveError> {
    let expr_text = extract_expression(normalized).ok_or(SolveError::ExtractionFailed)?;
    let value = expr::evaluate(expr_text).map_err(|source| SolveError::Evaluation {
        expr: expr_text.to_string(),
        source,
    })?;
    debug!(expression = expr_text, value, "Evaluated expression");
    Ok(expr::format_number(value))
}

/// Solve with the default configuration
pub fn solve(problem: &str) -> SolverResult {
    ProblemSolver::default().solve(problem)
}
