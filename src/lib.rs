//! Manifest-driven file copier.
//!
//! Reads a list of files and directories, finds the deepest folder that all
//! of them live under, and mirrors them into a target folder below that
//! root. A destination whose size and modification time already match its
//! source is left alone, so repeated runs only copy what changed.
//!
//! The public API is organised into layers:
//!
//! - **[`manifest`]**: read the list and expand it into files
//! - **[`paths`]**: common-root discovery and rebasing under a case policy
//! - **[`transfer`]**: per-file change detection and timestamp-preserving copies
//! - **[`copier`]**: the pipeline tying the layers together
//! - **[`commands`]**: command-line orchestration on top of [`copier`]
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod copier;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod paths;
pub mod platform;
pub mod transfer;
