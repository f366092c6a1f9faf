//! Command implementations.
//!
//! Each command writes to the given sink and returns the process exit code.

use anyhow::{Context, Result};
use seveniq_common::config::SolverConfig;
use seveniq_common::modes::{system_prompt, ExplanationDraft, ExplanationMode};
use seveniq_common::ProblemSolver;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const EXIT_OK: i32 = 0;
pub const EXIT_UNSOLVED: i32 = 1;

/// Solve a problem and print the result
pub fn solve(out: &mut dyn Write, solver: &ProblemSolver, text: &str, json: bool) -> Result<i32> {
    let result = solver.solve(text);

    if json {
        let rendered = result.to_json().context("Failed to serialize result")?;
        writeln!(out, "{}", rendered)?;
    } else if let Some(solution) = &result.solution {
        if let Some(category) = solution.category {
            writeln!(out, "Category:   {}", category)?;
        }
        writeln!(out, "Method:     {}", solution.method)?;
        writeln!(out, "Answer:     {}", solution.answer)?;
        writeln!(out, "Confidence: {:.0}%", solution.confidence * 100.0)?;
    } else {
        writeln!(
            out,
            "Error: {}",
            result.error.as_deref().unwrap_or("unknown error")
        )?;
    }

    Ok(if result.success { EXIT_OK } else { EXIT_UNSOLVED })
}

/// Print the filled system prompt for a mode
pub fn prompt(
    out: &mut dyn Write,
    solver: &ProblemSolver,
    text: &str,
    mode: ExplanationMode,
) -> Result<i32> {
    match solver.try_solve(text) {
        Ok(solution) => {
            writeln!(out, "{}", system_prompt(mode, text, &solution.answer))?;
            Ok(EXIT_OK)
        }
        Err(e) => {
            writeln!(out, "Error: cannot build prompt: {}", e)?;
            Ok(EXIT_UNSOLVED)
        }
    }
}

/// Print an offline explanation draft
pub fn explain(
    out: &mut dyn Write,
    solver: &ProblemSolver,
    text: &str,
    mode: ExplanationMode,
    json: bool,
) -> Result<i32> {
    let draft = ExplanationDraft::prepare(mode, text, solver);
    info!(%mode, words = draft.word_count, "Prepared explanation draft");

    if json {
        let rendered =
            serde_json::to_string_pretty(&draft).context("Failed to serialize explanation")?;
        writeln!(out, "{}", rendered)?;
    } else {
        writeln!(out, "Mode:       {} ({})", draft.mode, draft.mode.description())?;
        writeln!(out, "Method:     {}", draft.method)?;
        writeln!(out, "Confidence: {:.0}%", draft.confidence * 100.0)?;
        writeln!(out)?;
        writeln!(out, "{}", draft.explanation)?;
    }

    Ok(EXIT_OK)
}

/// Print the effective configuration or the file it came from
pub fn config(out: &mut dyn Write, explicit: Option<&Path>, path_only: bool) -> Result<i32> {
    let located = SolverConfig::locate(explicit).context("Failed to locate configuration")?;

    if path_only {
        match located {
            Some(path) => writeln!(out, "{}", path.display())?,
            None => writeln!(out, "(no config file, using defaults)")?,
        }
        return Ok(EXIT_OK);
    }

    let config = match &located {
        Some(path) => SolverConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => SolverConfig::default(),
    };
    let rendered = config
        .to_toml_string()
        .context("Failed to serialize configuration")?;
    write!(out, "{}", rendered)?;

    Ok(EXIT_OK)
}
