//! Copy command implementation.
use std::io::Write as _;

use anyhow::{Context as _, Result};
use clap::CommandFactory as _;

use crate::cli::{Cli, Invocation};
use crate::copier::{CopyReport, ListCopier};
use crate::logging::Log;
use crate::platform::Platform;

/// Run the copy command.
///
/// Prints the help text and returns `Ok(None)` when the positional arguments
/// are not one existing file and one existing directory.
///
/// # Errors
///
/// Returns an error if either argument cannot be made absolute, or the copy
/// pipeline fails.
pub fn run(cli: &Cli, log: &dyn Log) -> Result<Option<CopyReport>> {
    let Some(invocation) = Invocation::classify(&cli.paths) else {
        print_usage()?;
        return Ok(None);
    };

    let input_file = dunce::canonicalize(&invocation.input_file)
        .with_context(|| format!("resolving {}", invocation.input_file.display()))?;
    let target_folder = dunce::canonicalize(&invocation.target_folder)
        .with_context(|| format!("resolving {}", invocation.target_folder.display()))?;
    log.info(&format!("input file: {}", input_file.display()));
    log.info(&format!("target folder: {}", target_folder.display()));

    let platform = Platform::detect();
    let case = cli.case.unwrap_or_else(|| platform.path_case());
    log.debug(&format!("platform: {}, path comparison: {case:?}", platform.os));

    let report = ListCopier::new(input_file, target_folder, case).run(log)?;
    Ok(Some(report))
}

fn print_usage() -> Result<()> {
    let help = Cli::command().render_long_help();
    writeln!(std::io::stdout(), "{help}").context("writing usage")?;
    Ok(())
}
