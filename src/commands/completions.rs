use std::io;

use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let shell = matches
        .get_one::<Shell>("shell")
        .copied()
        .ok_or_else(|| anyhow!("shell argument is required"))?;

    generate(shell, cli, "pimon", &mut io::stdout());
    Ok(())
}
