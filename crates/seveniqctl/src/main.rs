//! SevenIQ Control - classify and solve problems from the terminal

use anyhow::Result;
use clap::Parser;
use seveniqctl::cli::Cli;
use seveniqctl::{logging, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    let code = run(cli, &mut stdout)?;
    drop(stdout);

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
