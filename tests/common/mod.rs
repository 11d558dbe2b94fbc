// Shared helpers for integration tests.
//
// Provides a temporary source tree, a manifest writer and a target folder so
// each integration test can run the copier in an isolated environment.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use copy_from_list::logging::Log;

/// A source tree and a target folder, each backed by a [`tempfile::TempDir`].
///
/// Both directories are deleted when the context is dropped.
pub struct CopyTestContext {
    /// Directory holding the files that manifests point at.
    pub source: tempfile::TempDir,
    /// Directory files are copied into.
    pub target: tempfile::TempDir,
}

impl CopyTestContext {
    /// Create an empty source tree and an empty target folder.
    pub fn new() -> Self {
        Self {
            source: tempfile::tempdir().expect("create source dir"),
            target: tempfile::tempdir().expect("create target dir"),
        }
    }

    /// Canonical path of the source tree.
    pub fn source_path(&self) -> PathBuf {
        dunce::canonicalize(self.source.path()).expect("canonicalize source dir")
    }

    /// Canonical path of the target folder.
    pub fn target_path(&self) -> PathBuf {
        dunce::canonicalize(self.target.path()).expect("canonicalize target dir")
    }

    /// Write `content` to `rel` under the source tree, creating parents.
    pub fn write_source(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.source_path().join(rel);
        write_file(&path, content);
        path
    }

    /// Write a manifest listing `entries` (one per line) and return its path.
    ///
    /// The manifest lives next to, not inside, the source tree so it never
    /// shows up in a recursive expansion.
    pub fn write_manifest(&self, entries: &[PathBuf]) -> PathBuf {
        let content: String = entries
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        let path = self.target_path().with_extension("list");
        fs::write(&path, content).expect("write manifest");
        path
    }

    /// Relative paths of every file under the target folder, sorted.
    pub fn target_files(&self) -> Vec<String> {
        let root = self.target_path();
        let mut files = Vec::new();
        collect_files(&root, &root, &mut files);
        files.sort();
        files
    }
}

impl Drop for CopyTestContext {
    fn drop(&mut self) {
        let _ = fs::remove_file(self.target_path().with_extension("list"));
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).expect("under root");
            out.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, content).expect("write file");
}

/// Set the modification time of `path` to `secs` seconds after the epoch.
pub fn set_mtime(path: &Path, secs: u64) {
    let file = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .expect("open for timestamp");
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("set mtime");
}

/// Modification time of `path`.
pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .expect("read mtime")
}

/// A [`Log`] implementation that records messages for assertions.
#[derive(Debug, Default)]
pub struct CapturedLog {
    info: Mutex<Vec<String>>,
    debug: Mutex<Vec<String>>,
}

impl CapturedLog {
    /// Info-level messages in the order they were logged.
    pub fn info_lines(&self) -> Vec<String> {
        self.info.lock().expect("info lock").clone()
    }

    /// Debug-level messages in the order they were logged.
    pub fn debug_lines(&self) -> Vec<String> {
        self.debug.lock().expect("debug lock").clone()
    }
}

impl Log for CapturedLog {
    fn info(&self, msg: &str) {
        self.info.lock().expect("info lock").push(msg.to_string());
    }

    fn debug(&self, msg: &str) {
        self.debug.lock().expect("debug lock").push(msg.to_string());
    }
}
