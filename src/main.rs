//! Command-line entry point for `copy-from-list`.

use anyhow::Result;
use clap::Parser;

use copy_from_list::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    commands::copy::run(&args, &log)?;
    Ok(())
}
