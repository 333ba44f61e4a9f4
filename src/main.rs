mod cli;
mod execute;

use anyhow::Result;
use clap::Parser;
use reposmith::logging::{init_logging, LogSettings};
use crate::cli::CLI;

fn main() -> Result<()> {
    let cli = CLI::parse();
    init_logging(LogSettings::new(cli.log_level, cli.no_emoji))?;
    execute::execute(cli)
}
