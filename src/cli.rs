//! Command-line interface definition.
use std::path::PathBuf;

use clap::Parser;

use crate::paths::CaseSensitivity;

/// Version reported by `--version`: the build-time override when present.
const VERSION: &str = match option_env!("COPY_FROM_LIST_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "copy-from-list",
    about = "Copy the files listed in a manifest into a folder, keeping their relative layout",
    long_about = "Copy the files listed in a manifest into a folder, keeping their relative layout.\n\n\
                  Give the manifest file and the target folder in either order. Each manifest \
                  line names a file or a directory (copied recursively). Files whose copy \
                  already has the same size and modification time are skipped.",
    version = VERSION
)]
pub struct Cli {
    /// The manifest file and the target folder, in either order
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// How path components are compared (defaults to insensitive on Windows, sensitive elsewhere)
    #[arg(long, value_enum)]
    pub case: Option<CaseSensitivity>,
}

/// The two positional arguments, sorted into their roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Existing manifest file.
    pub input_file: PathBuf,
    /// Existing directory to copy into.
    pub target_folder: PathBuf,
}

impl Invocation {
    /// Pick the input file and target folder out of exactly two paths by
    /// testing what exists on disk.
    ///
    /// Returns `None` unless there are exactly two paths and one is an
    /// existing file while the other is an existing directory.
    #[must_use]
    pub fn classify(paths: &[PathBuf]) -> Option<Self> {
        if paths.len() != 2 {
            return None;
        }
        let input_file = paths.iter().find(|p| p.is_file())?.clone();
        let target_folder = paths.iter().find(|p| p.is_dir())?.clone();
        Some(Self {
            input_file,
            target_folder,
        })
    }
}
