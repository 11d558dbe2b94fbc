//! Top-level command orchestration.
pub mod copy;
