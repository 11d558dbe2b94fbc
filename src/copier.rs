//! The copy pipeline: manifest → files → common root → tasks → copies.
use std::path::PathBuf;

use crate::error::CopyError;
use crate::logging::Log;
use crate::manifest::Manifest;
use crate::paths::{self, CaseSensitivity};
use crate::transfer::{self, CopyTask};

/// Outcome of a copy run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Files copied this run.
    pub copied: usize,
    /// Files skipped because their destination was already current.
    pub skipped: usize,
}

impl CopyReport {
    /// The closing console line, e.g. `"1,234 file(s) copied."`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} file(s) copied.", group_thousands(self.copied))
    }
}

/// Format `n` with a comma between every group of three digits.
#[must_use]
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Copies the files a manifest resolves to into a target folder.
#[derive(Debug, Clone)]
pub struct ListCopier {
    input_file: PathBuf,
    target_folder: PathBuf,
    case: CaseSensitivity,
    base_dir: PathBuf,
}

impl ListCopier {
    /// Create a copier. Relative manifest lines resolve against the current
    /// directory unless [`with_base_dir`](Self::with_base_dir) is used.
    #[must_use]
    pub fn new(input_file: PathBuf, target_folder: PathBuf, case: CaseSensitivity) -> Self {
        Self {
            input_file,
            target_folder,
            case,
            base_dir: PathBuf::new(),
        }
    }

    /// Resolve relative manifest lines against `dir` instead of the current directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: PathBuf) -> Self {
        self.base_dir = dir;
        self
    }

    /// Read the manifest and pair every resolved file with its destination.
    ///
    /// Nothing is written. An empty manifest yields no tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or resolved, the files
    /// share no common root, or a source cannot be inspected.
    pub fn plan(&self, log: &dyn Log) -> Result<Vec<CopyTask>, CopyError> {
        let manifest = Manifest::load(&self.input_file)?;
        let files = manifest.resolve(&self.base_dir, log)?;
        log.debug(&format!(
            "{} file(s) resolved from {} manifest line(s)",
            files.len(),
            manifest.lines.len()
        ));

        let Some(root) = paths::common_root(&files, self.case)? else {
            return Ok(Vec::new());
        };
        log.debug(&format!("common root: {}", root.display()));

        files
            .into_iter()
            .map(|source| -> Result<CopyTask, CopyError> {
                let destination = paths::rebase(&source, &root, &self.target_folder, self.case)?;
                CopyTask::inspect(source, destination).map_err(CopyError::from)
            })
            .collect()
    }

    /// Run the whole pipeline, echoing each copied source and the final count.
    ///
    /// The first failure aborts the run; files copied before it stay copied.
    ///
    /// # Errors
    ///
    /// Returns an error if planning fails or any directory or file operation fails.
    pub fn run(&self, log: &dyn Log) -> Result<CopyReport, CopyError> {
        let (pending, current): (Vec<CopyTask>, Vec<CopyTask>) =
            self.plan(log)?.into_iter().partition(CopyTask::needs_copy);

        for task in &current {
            log.debug(&format!("unchanged: {}", task.source.display()));
        }

        for dir in transfer::destination_dirs(&pending, self.case) {
            if transfer::ensure_dir(&dir)? {
                log.debug(&format!("created {}", dir.display()));
            }
        }

        for task in &pending {
            task.apply()?;
            log.info(&task.source.display().to_string());
        }

        let report = CopyReport {
            copied: pending.len(),
            skipped: current.len(),
        };
        log.info(&report.summary());
        Ok(report)
    }
}
