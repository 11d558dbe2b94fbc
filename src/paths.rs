//! Path comparison policy, common-root selection, and rebasing.
//!
//! All comparisons here are done per path component, never on the textual
//! form of a path, so `/data/pro` is not considered a prefix of
//! `/data/project`.
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::RootError;

/// How path components are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CaseSensitivity {
    /// Components must match byte for byte.
    Sensitive,
    /// Components match when their lowercase forms are equal. Components
    /// that are not valid UTF-8 must match exactly.
    Insensitive,
}

impl CaseSensitivity {
    fn component_key(self, component: &OsStr) -> OsString {
        match self {
            Self::Sensitive => component.to_os_string(),
            // Components that are not valid UTF-8 are compared byte for byte.
            Self::Insensitive => component
                .to_str()
                .map_or_else(|| component.to_os_string(), |s| OsString::from(s.to_lowercase())),
        }
    }

    /// Key identifying `path` under this policy; equal keys mean equal paths.
    #[must_use]
    pub fn key(self, path: &Path) -> Vec<OsString> {
        path.components()
            .map(|c| self.component_key(c.as_os_str()))
            .collect()
    }

    /// Compare two single path components.
    #[must_use]
    pub fn same_component(self, a: &OsStr, b: &OsStr) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => self.component_key(a) == self.component_key(b),
        }
    }

    /// Return `true` if `base` is `path` or one of its ancestors.
    #[must_use]
    pub fn starts_with(self, path: &Path, base: &Path) -> bool {
        let mut components = path.components();
        base.components().all(|b| {
            components
                .next()
                .is_some_and(|p| self.same_component(p.as_os_str(), b.as_os_str()))
        })
    }
}

/// Remove duplicate paths under `case`, keeping the first spelling seen.
#[must_use]
pub fn dedup_paths(
    paths: impl IntoIterator<Item = PathBuf>,
    case: CaseSensitivity,
) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(case.key(p)))
        .collect()
}

/// Distinct containing directories of `files`.
#[must_use]
pub fn distinct_parents(files: &[PathBuf], case: CaseSensitivity) -> Vec<PathBuf> {
    dedup_paths(
        files.iter().filter_map(|f| f.parent()).map(Path::to_path_buf),
        case,
    )
}

/// Every strict ancestor of every directory in `dirs`, up to and including
/// the filesystem root.
#[must_use]
pub fn ancestor_closure(dirs: &[PathBuf], case: CaseSensitivity) -> Vec<PathBuf> {
    dedup_paths(
        dirs.iter()
            .flat_map(|d| d.ancestors().skip(1))
            .filter(|a| !a.as_os_str().is_empty())
            .map(Path::to_path_buf),
        case,
    )
}

/// Compute the directory all `files` are copied relative to.
///
/// The root is the deepest strict ancestor shared by every distinct parent
/// directory. When no ancestor survives and all files share one parent
/// (e.g. files directly in `/`), that parent is the root.
///
/// Returns `Ok(None)` when `files` is empty.
///
/// # Errors
///
/// Returns [`RootError::NoCommonRoot`] when the parents have no ancestor in
/// common, such as files spread over several drives.
pub fn common_root(
    files: &[PathBuf],
    case: CaseSensitivity,
) -> Result<Option<PathBuf>, RootError> {
    let parents = distinct_parents(files, case);
    let deepest = ancestor_closure(&parents, case)
        .into_iter()
        .filter(|candidate| parents.iter().all(|p| case.starts_with(p, candidate)))
        .max_by_key(|candidate| candidate.components().count());
    if deepest.is_some() {
        return Ok(deepest);
    }

    match parents.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(only.clone())),
        [first, rest @ ..] => {
            let second = rest
                .iter()
                .find(|p| !shares_ancestor(first, p, case))
                .or_else(|| rest.first())
                .cloned()
                .unwrap_or_default();
            Err(RootError::NoCommonRoot {
                first: first.clone(),
                second,
            })
        }
    }
}

fn shares_ancestor(a: &Path, b: &Path, case: CaseSensitivity) -> bool {
    match (a.components().next(), b.components().next()) {
        (Some(x), Some(y)) => case.same_component(x.as_os_str(), y.as_os_str()),
        _ => false,
    }
}

/// Map `source` from under `root` to the same relative position under `target`.
///
/// # Errors
///
/// Returns [`RootError::OutsideRoot`] if `root` is not an ancestor of `source`.
pub fn rebase(
    source: &Path,
    root: &Path,
    target: &Path,
    case: CaseSensitivity,
) -> Result<PathBuf, RootError> {
    let mut rest = source.components();
    for root_component in root.components() {
        match rest.next() {
            Some(c) if case.same_component(c.as_os_str(), root_component.as_os_str()) => {}
            _ => {
                return Err(RootError::OutsideRoot {
                    path: source.to_path_buf(),
                    root: root.to_path_buf(),
                });
            }
        }
    }
    Ok(target.join(rest.as_path()))
}
