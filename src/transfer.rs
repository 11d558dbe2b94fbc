//! Change detection and timestamp-preserving file copies.
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::TransferError;
use crate::paths::{self, CaseSensitivity};

/// Size and last-modified time of a file: the two facts change detection uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    /// Length in bytes.
    pub len: u64,
    /// Last modification time.
    pub modified: SystemTime,
}

impl FileStamp {
    /// Read the stamp of an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Metadata`] if `path` cannot be inspected.
    pub fn read(path: &Path) -> Result<Self, TransferError> {
        let meta = fs::metadata(path).map_err(|source| metadata_error(path, source))?;
        Self::from_metadata(path, &meta)
    }

    /// Read the stamp of `path`, or `None` if no regular file is there.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Metadata`] for failures other than the path
    /// not existing.
    pub fn probe(path: &Path) -> Result<Option<Self>, TransferError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Self::from_metadata(path, &meta).map(Some),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(metadata_error(path, source)),
        }
    }

    fn from_metadata(path: &Path, meta: &fs::Metadata) -> Result<Self, TransferError> {
        Ok(Self {
            len: meta.len(),
            modified: meta
                .modified()
                .map_err(|source| metadata_error(path, source))?,
        })
    }
}

fn metadata_error(path: &Path, source: io::Error) -> TransferError {
    TransferError::Metadata {
        path: path.to_path_buf(),
        source,
    }
}

/// Whether a destination already holds the source's content.
///
/// # Examples
///
/// ```
/// use copy_from_list::transfer::CopyState;
///
/// let stale = CopyState::Stale { reason: "size differs".into() };
/// assert_ne!(stale, CopyState::Current);
/// assert_eq!(CopyState::Missing, CopyState::Missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyState {
    /// The destination does not exist.
    Missing,
    /// The destination has the source's size and modification time.
    Current,
    /// The destination exists but its size or modification time differs.
    Stale {
        /// What differs.
        reason: String,
    },
}

/// A source file paired with its destination and both stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    /// Absolute path of the file to copy.
    pub source: PathBuf,
    /// Absolute path the file is copied to.
    pub destination: PathBuf,
    /// Stamp of the source when the task was inspected.
    pub source_stamp: FileStamp,
    /// Stamp of the destination, if a regular file exists there.
    pub destination_stamp: Option<FileStamp>,
}

impl CopyTask {
    /// Stat both ends of a copy.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Metadata`] if the source cannot be inspected,
    /// or the destination fails for a reason other than not existing.
    pub fn inspect(source: PathBuf, destination: PathBuf) -> Result<Self, TransferError> {
        let source_stamp = FileStamp::read(&source)?;
        let destination_stamp = FileStamp::probe(&destination)?;
        Ok(Self {
            source,
            destination,
            source_stamp,
            destination_stamp,
        })
    }

    /// Compare the two stamps. Content is never compared.
    #[must_use]
    pub fn state(&self) -> CopyState {
        let Some(dest) = self.destination_stamp else {
            return CopyState::Missing;
        };
        if dest.modified != self.source_stamp.modified {
            CopyState::Stale {
                reason: "modification time differs".to_string(),
            }
        } else if dest.len != self.source_stamp.len {
            CopyState::Stale {
                reason: format!("size differs ({} vs {} bytes)", dest.len, self.source_stamp.len),
            }
        } else {
            CopyState::Current
        }
    }

    /// Return `true` unless the destination is [`CopyState::Current`].
    #[must_use]
    pub fn needs_copy(&self) -> bool {
        self.state() != CopyState::Current
    }

    /// Copy the source over the destination and give the copy the source's
    /// modification time, so an unchanged source is skipped next run.
    ///
    /// The destination's parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the source vanished, the copy fails, or the
    /// modification time cannot be set.
    pub fn apply(&self) -> Result<(), TransferError> {
        let modified = FileStamp::read(&self.source)?.modified;
        fs::copy(&self.source, &self.destination).map_err(|source| TransferError::Copy {
            from: self.source.clone(),
            to: self.destination.clone(),
            source,
        })?;
        open_for_timestamps(&self.destination)
            .and_then(|file| file.set_modified(modified))
            .map_err(|source| TransferError::SetModified {
                path: self.destination.clone(),
                source,
            })
    }
}

/// Open `path` with just enough access to change its timestamps; this also
/// works when the copy inherited a read-only mode from its source.
fn open_for_timestamps(path: &Path) -> io::Result<File> {
    #[cfg(windows)]
    {
        use std::os::windows::fs::OpenOptionsExt as _;
        const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
        File::options()
            .access_mode(FILE_WRITE_ATTRIBUTES)
            .open(path)
    }
    #[cfg(not(windows))]
    {
        File::open(path)
    }
}

/// Distinct parent directories of the tasks' destinations, in task order.
#[must_use]
pub fn destination_dirs<'a>(
    tasks: impl IntoIterator<Item = &'a CopyTask>,
    case: CaseSensitivity,
) -> Vec<PathBuf> {
    paths::dedup_paths(
        tasks
            .into_iter()
            .filter_map(|t| t.destination.parent())
            .map(Path::to_path_buf),
        case,
    )
}

/// Create `dir` and any missing ancestors. Returns `true` if anything was created.
///
/// # Errors
///
/// Returns [`TransferError::CreateDir`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<bool, TransferError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| TransferError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}
