//! Command-line definitions

use clap::{Parser, Subcommand};
use seveniq_common::ExplanationMode;
use std::path::PathBuf;

// Version is embedded at build time
pub const VERSION: &str = env!("SEVENIQ_VERSION");

#[derive(Parser, Debug)]
#[command(name = "seveniqctl")]
#[command(about = "SevenIQ - classify and solve problems before explaining them", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Config file (default: ~/.config/seveniq/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a problem and compute its answer
    Solve {
        /// Problem text
        #[arg(required = true)]
        text: Vec<String>,

        /// Print the JSON result envelope
        #[arg(long)]
        json: bool,

        /// Only treat explicit arithmetic as math
        #[arg(long)]
        strict: bool,
    },

    /// Print the model prompt for a problem
    Prompt {
        /// Problem text
        #[arg(required = true)]
        text: Vec<String>,

        /// Audience: child, grandma, ceo or technical
        #[arg(long, short, default_value = "child")]
        mode: ExplanationMode,
    },

    /// Produce an offline explanation for a problem
    Explain {
        /// Problem text
        #[arg(required = true)]
        text: Vec<String>,

        /// Audience: child, grandma, ceo or technical
        #[arg(long, short, default_value = "child")]
        mode: ExplanationMode,

        /// Print the draft as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Print only the config file path in use
        #[arg(long)]
        path: bool,
    },
}

/// Join positional words back into one problem string
pub fn join_text(words: &[String]) -> String {
    words.join(" ")
}
