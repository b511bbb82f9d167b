//! Observer hook for memory checkpoints.

/// Receives named checkpoints from an instrumented routine.
///
/// Checkpoints are reported after each major allocation or compute step so an
/// implementation can sample memory between them.
pub trait MemoryObserver {
    /// Called once per step, in program order.
    fn checkpoint(&mut self, label: &str);

    /// Called for non-fatal conditions the routine reports instead of failing.
    fn diagnostic(&mut self, message: &str) {
        let _ = message;
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MemoryObserver for NoopObserver {
    fn checkpoint(&mut self, _label: &str) {}
}
