//! Checkpoint-sampling memory profiler.

use std::time::Instant;

use crate::alloc::AllocStats;
use crate::observer::MemoryObserver;
use crate::report::{Checkpoint, MemoryReport};
use crate::rss::RssSampler;

/// Observer that samples heap and RSS at every checkpoint.
///
/// Creating a profiler restarts the allocator's peak tracking, so peaks in the
/// report only cover the profiled run.
pub struct MemoryProfiler {
    rss: Option<RssSampler>,
    started: Instant,
    heap_baseline: usize,
    checkpoints: Vec<Checkpoint>,
    diagnostics: Vec<String>,
}

impl MemoryProfiler {
    /// Profile heap and RSS.
    pub fn new() -> Self {
        Self::with_rss(Some(RssSampler::new()))
    }

    /// Profile heap only. Cheaper per checkpoint and unaffected by other
    /// threads touching memory.
    pub fn heap_only() -> Self {
        Self::with_rss(None)
    }

    fn with_rss(rss: Option<RssSampler>) -> Self {
        AllocStats::reset_peak();
        Self {
            rss,
            started: Instant::now(),
            heap_baseline: AllocStats::snapshot().current_bytes,
            checkpoints: Vec::with_capacity(8),
            diagnostics: Vec::new(),
        }
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Stop profiling and build the report.
    pub fn finish(self, title: impl Into<String>) -> MemoryReport {
        MemoryReport {
            title: title.into(),
            heap_tracking: AllocStats::is_active(),
            heap_baseline_bytes: self.heap_baseline,
            checkpoints: self.checkpoints,
            diagnostics: self.diagnostics,
        }
    }
}

impl Default for MemoryProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryObserver for MemoryProfiler {
    fn checkpoint(&mut self, label: &str) {
        // Bookkeeping allocations happen before sampling so they are not
        // charged to the next step.
        let label = label.to_string();
        self.checkpoints.reserve(1);

        let rss_bytes = self.rss.as_mut().and_then(RssSampler::sample);
        let heap = AllocStats::snapshot();

        let prev = self.checkpoints.last();
        let prev_heap = prev.map_or(self.heap_baseline, |p| p.heap_bytes);
        let rss_increment = match (rss_bytes, prev.and_then(|p| p.rss_bytes)) {
            (Some(now), Some(before)) => Some(now as i64 - before as i64),
            (Some(_), None) if prev.is_none() => Some(0),
            _ => None,
        };

        let checkpoint = Checkpoint {
            label,
            elapsed_secs: self.started.elapsed().as_secs_f64(),
            rss_bytes,
            rss_increment,
            heap_bytes: heap.current_bytes,
            heap_increment: heap.current_bytes as i64 - prev_heap as i64,
            heap_peak_bytes: heap.peak_bytes,
        };

        log::debug!(
            "checkpoint '{}': heap {} bytes (peak {}), rss {:?}",
            checkpoint.label,
            checkpoint.heap_bytes,
            checkpoint.heap_peak_bytes,
            checkpoint.rss_bytes
        );

        self.checkpoints.push(checkpoint);
    }

    fn diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_string());
    }
}
