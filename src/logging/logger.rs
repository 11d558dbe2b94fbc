//! Console logger backed by [`tracing`].
use super::types::Log;

/// Implement the methods of [`Log`] by delegating to inherent methods of the
/// same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Logger that emits [`tracing`] events under the `copy_from_list` target.
///
/// Formatting and level filtering are handled by the subscriber installed
/// with [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!(target: "copy_from_list", "{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!(target: "copy_from_list", "{msg}");
    }
}

impl Log for Logger {
    forward_log_methods!(info, debug);
}
