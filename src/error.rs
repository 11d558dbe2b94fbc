//! Domain-specific error types for the list copier.
//!
//! Internal modules return typed errors (e.g., [`ManifestError`],
//! [`TransferError`]) while the binary converts them to [`anyhow::Error`]
//! via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! CopyError
//! ├── Manifest(ManifestError)   reading and resolving the manifest
//! ├── Root(RootError)           common-root computation and rebasing
//! └── Transfer(TransferError)   metadata, directory creation, copy
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a copy run.
#[derive(Error, Debug)]
pub enum CopyError {
    /// The manifest could not be read or one of its entries could not be resolved.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// No usable common root directory exists for the resolved files.
    #[error("Root error: {0}")]
    Root(#[from] RootError),

    /// A filesystem operation on a source or destination failed.
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),
}

/// Errors that arise while reading the manifest and resolving its lines.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("cannot read manifest {}: {source}", path.display())]
    Read {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A manifest entry exists but could not be made absolute.
    #[error("cannot resolve {}: {source}", path.display())]
    Resolve {
        /// Path as written in the manifest, joined onto the base directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Walking a listed directory failed part-way.
    #[error("cannot walk {}: {source}", root.display())]
    Walk {
        /// Directory named by the manifest.
        root: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },
}

/// Errors that arise while computing the common root or rebasing onto it.
#[derive(Error, Debug)]
pub enum RootError {
    /// The resolved files do not share any ancestor directory (e.g. they live
    /// on different drives).
    #[error("no common ancestor directory for {} and {}", first.display(), second.display())]
    NoCommonRoot {
        /// One of the parent directories.
        first: PathBuf,
        /// A parent directory sharing no ancestor with `first`.
        second: PathBuf,
    },

    /// A source path does not live under the computed common root.
    #[error("{} is not under {}", path.display(), root.display())]
    OutsideRoot {
        /// Offending source path.
        path: PathBuf,
        /// Computed common root.
        root: PathBuf,
    },
}

/// Errors that arise while inspecting, creating, or copying files.
#[derive(Error, Debug)]
pub enum TransferError {
    /// Metadata for a source or destination could not be read.
    #[error("cannot inspect {}: {source}", path.display())]
    Metadata {
        /// Path that was inspected.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A destination directory could not be created.
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Copying a file failed.
    #[error("cannot copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        /// Source file.
        from: PathBuf,
        /// Destination file.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source modification time could not be applied to the copy.
    #[error("cannot set modification time on {}: {source}", path.display())]
    SetModified {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::Path;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
    }

    // -----------------------------------------------------------------------
    // ManifestError
    // -----------------------------------------------------------------------

    #[test]
    fn manifest_read_display() {
        let e = ManifestError::Read {
            path: PathBuf::from("/work/list.txt"),
            source: io_err(),
        };
        assert_eq!(
            e.to_string(),
            "cannot read manifest /work/list.txt: permission denied"
        );
    }

    #[test]
    fn manifest_read_has_source() {
        use std::error::Error as StdError;
        let e = ManifestError::Read {
            path: PathBuf::from("/work/list.txt"),
            source: io_err(),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn manifest_resolve_display() {
        let e = ManifestError::Resolve {
            path: PathBuf::from("/data/a.txt"),
            source: io_err(),
        };
        assert!(e.to_string().contains("cannot resolve /data/a.txt"));
    }

    // -----------------------------------------------------------------------
    // RootError
    // -----------------------------------------------------------------------

    #[test]
    fn no_common_root_display() {
        let e = RootError::NoCommonRoot {
            first: PathBuf::from("/mnt/a"),
            second: PathBuf::from("/mnt/b"),
        };
        assert_eq!(
            e.to_string(),
            "no common ancestor directory for /mnt/a and /mnt/b"
        );
    }

    #[test]
    fn outside_root_display() {
        let e = RootError::OutsideRoot {
            path: PathBuf::from("/other/x.txt"),
            root: PathBuf::from("/data"),
        };
        assert_eq!(e.to_string(), "/other/x.txt is not under /data");
    }

    // -----------------------------------------------------------------------
    // TransferError
    // -----------------------------------------------------------------------

    #[test]
    fn copy_display_names_both_paths() {
        let e = TransferError::Copy {
            from: PathBuf::from("/data/a.txt"),
            to: PathBuf::from("/out/a.txt"),
            source: io_err(),
        };
        let msg = e.to_string();
        assert!(msg.contains("/data/a.txt"));
        assert!(msg.contains("/out/a.txt"));
    }

    #[test]
    fn create_dir_display() {
        let e = TransferError::CreateDir {
            path: Path::new("/out/x").to_path_buf(),
            source: io_err(),
        };
        assert!(e.to_string().starts_with("cannot create directory /out/x"));
    }

    // -----------------------------------------------------------------------
    // CopyError conversions
    // -----------------------------------------------------------------------

    #[test]
    fn copy_error_from_root_error() {
        let e: CopyError = RootError::NoCommonRoot {
            first: PathBuf::from("/a"),
            second: PathBuf::from("/b"),
        }
        .into();
        assert!(e.to_string().starts_with("Root error"));
    }

    #[test]
    fn copy_error_from_transfer_error() {
        let e: CopyError = TransferError::SetModified {
            path: PathBuf::from("/out/a.txt"),
            source: io_err(),
        }
        .into();
        assert!(e.to_string().starts_with("Transfer error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<CopyError>();
        assert_send_sync::<ManifestError>();
        assert_send_sync::<RootError>();
        assert_send_sync::<TransferError>();
    }

    #[test]
    fn copy_error_converts_to_anyhow() {
        let e: CopyError = ManifestError::Read {
            path: PathBuf::from("list.txt"),
            source: io_err(),
        }
        .into();
        let _anyhow_err: anyhow::Error = e.into();
    }
}
