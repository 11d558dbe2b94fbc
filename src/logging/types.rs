//! The [`Log`] trait shared by console and in-memory loggers.

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) routes messages through [`tracing`] to
/// the console; tests substitute an in-memory implementation so the copy
/// pipeline's output can be asserted on.
pub trait Log: Send + Sync {
    /// Log a message that is always shown (echoed paths, the final count).
    fn info(&self, msg: &str);
    /// Log a diagnostic message shown only with `--verbose`.
    fn debug(&self, msg: &str);
}
