//! Diagnostic sink trait and implementations.

use std::sync::{Arc, Mutex, MutexGuard};

use log::info;

/// Log target used by [`LogDiagnosticSink`].
pub const DIAGNOSTIC_TARGET: &str = "rowfn::udx";

/// Trait for receiving human-readable diagnostic lines from scalar functions.
///
/// # Design Rules
///
/// - `log()` returns nothing: a sink that fails must swallow the failure
/// - Row output never depends on what the sink does
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnosticSink;

impl DiagnosticSink for LogDiagnosticSink {
    fn log(&self, message: &str) {
        info!(target: DIAGNOSTIC_TARGET, "{}", message);
    }
}

/// No-op implementation for contexts that don't need diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDiagnosticSink;

impl DiagnosticSink for NoOpDiagnosticSink {
    fn log(&self, _message: &str) {}
}

/// In-memory sink - collects diagnostic lines, mostly for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryDiagnosticSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the lines, recovering from poison. A poisoned sink still
    /// accepts lines rather than panicking inside a function call.
    fn lock_lines(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns all collected lines.
    pub fn lines(&self) -> Vec<String> {
        self.lock_lines().clone()
    }

    /// Returns true if any collected line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lock_lines().iter().any(|line| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lock_lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_lines().is_empty()
    }

    pub fn clear(&self) {
        self.lock_lines().clear();
    }
}

impl DiagnosticSink for MemoryDiagnosticSink {
    fn log(&self, message: &str) {
        self.lock_lines().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemoryDiagnosticSink::new();
        sink.log("first");
        sink.log("second");

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert!(sink.contains("sec"));
        assert_eq!(sink.len(), 2);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_sink_clones_share_lines() {
        let sink = MemoryDiagnosticSink::new();
        let handle = sink.clone();
        handle.log("shared");
        assert!(sink.contains("shared"));
    }

    #[test]
    fn test_memory_sink_survives_poison() {
        let sink = MemoryDiagnosticSink::new();
        let poisoner = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lines.lock().unwrap();
            panic!("poison the sink");
        })
        .join();

        sink.log("after poison");
        assert!(sink.contains("after poison"));
    }

    #[test]
    fn test_noop_and_log_sinks_do_not_panic() {
        NoOpDiagnosticSink.log("dropped");
        LogDiagnosticSink.log("forwarded");
    }
}
