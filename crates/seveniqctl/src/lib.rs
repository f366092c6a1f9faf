//! SevenIQ Control - CLI for the SevenIQ problem resolver

pub mod cli;
pub mod commands;
pub mod logging;

use anyhow::{Context, Result};
use seveniq_common::{DetectionPolicy, ProblemSolver, SolverConfig};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use cli::{join_text, Cli, Commands};

fn load_config(explicit: Option<&Path>) -> Result<SolverConfig> {
    let config = SolverConfig::load(explicit).context("Failed to load configuration")?;
    debug!(policy = ?config.detection.policy, "Configuration loaded");
    Ok(config)
}

/// Execute a parsed command line, returning the exit code
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<i32> {
    let explicit = cli.config.as_deref();

    match cli.command {
        Commands::Solve { text, json, strict } => {
            let mut config = load_config(explicit)?;
            if strict {
                config.detection.policy = DetectionPolicy::Strict;
            }
            let solver = ProblemSolver::new(config);
            commands::solve(out, &solver, &join_text(&text), json)
        }
        Commands::Prompt { text, mode } => {
            let solver = ProblemSolver::new(load_config(explicit)?);
            commands::prompt(out, &solver, &join_text(&text), mode)
        }
        Commands::Explain { text, mode, json } => {
            let solver = ProblemSolver::new(load_config(explicit)?);
            commands::explain(out, &solver, &join_text(&text), mode, json)
        }
        Commands::Config { path } => commands::config(out, explicit, path),
    }
}
