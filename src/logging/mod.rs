//! Logging infrastructure for structured console output.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::Log;

/// In-memory [`Log`] that records every message with its level.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryLog {
    lines: std::sync::Mutex<Vec<(&'static str, String)>>,
}

#[cfg(test)]
impl MemoryLog {
    fn push(&self, level: &'static str, msg: &str) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push((level, msg.to_string()));
        }
    }

    /// Messages recorded at `level` (`"info"` or `"debug"`), in order.
    pub(crate) fn messages(&self, level: &str) -> Vec<String> {
        self.lines.lock().map_or_else(
            |_| vec![],
            |guard| {
                guard
                    .iter()
                    .filter(|(l, _)| *l == level)
                    .map(|(_, m)| m.clone())
                    .collect()
            },
        )
    }
}

#[cfg(test)]
impl Log for MemoryLog {
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }

    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
}
