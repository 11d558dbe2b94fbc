//! Manifest loading and resolution into concrete source files.
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ManifestError;
use crate::logging::Log;

/// The list of paths to copy, one entry per non-blank manifest line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Trimmed, non-empty lines in file order.
    pub lines: Vec<String>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse manifest text: trim every line and drop the blank ones.
    ///
    /// A leading UTF-8 byte-order mark is ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self {
            lines: content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Resolve every line into absolute file paths.
    ///
    /// Relative lines are joined onto `base`; an empty `base` leaves them
    /// relative to the current directory. Directory lines expand to every
    /// file beneath them at any depth and come first, followed by the file
    /// lines. Lines naming nothing on disk are dropped. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing entry cannot be canonicalized or a
    /// listed directory cannot be walked.
    pub fn resolve(&self, base: &Path, log: &dyn Log) -> Result<Vec<PathBuf>, ManifestError> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for line in &self.lines {
            let path = base.join(line);
            if path.is_dir() {
                dirs.push(canonicalize(&path)?);
            } else if path.is_file() {
                files.push(canonicalize(&path)?);
            } else {
                log.debug(&format!("ignoring '{line}': no such file or directory"));
            }
        }

        let mut resolved = Vec::new();
        for dir in &dirs {
            resolved.extend(walk_files(dir)?);
        }
        resolved.extend(files);
        Ok(resolved)
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf, ManifestError> {
    dunce::canonicalize(path).map_err(|source| ManifestError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Every regular file beneath `root`, following symlinks, in file-name order.
fn walk_files(root: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(source) => Some(Err(ManifestError::Walk {
                root: root.to_path_buf(),
                source,
            })),
        })
        .collect()
}
