//! Memory report generation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const MIB: f64 = 1024.0 * 1024.0;

/// Memory state recorded at one checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Step name (e.g., "matrix assembled").
    pub label: String,
    /// Seconds since profiling started.
    pub elapsed_secs: f64,
    /// Resident set size, if the platform reports it.
    pub rss_bytes: Option<u64>,
    /// RSS change since the previous checkpoint.
    pub rss_increment: Option<i64>,
    /// Live heap bytes (zero unless the tracking allocator is installed).
    pub heap_bytes: usize,
    /// Live heap change since the previous checkpoint.
    pub heap_increment: i64,
    /// Highest live heap size seen since profiling started.
    pub heap_peak_bytes: usize,
}

/// Complete memory report for one profiled run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryReport {
    /// What was profiled.
    pub title: String,
    /// Whether heap columns carry data.
    pub heap_tracking: bool,
    /// Live heap bytes when profiling started.
    pub heap_baseline_bytes: usize,
    /// Checkpoints in program order.
    pub checkpoints: Vec<Checkpoint>,
    /// Diagnostics reported by the profiled routine.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub diagnostics: Vec<String>,
}

impl MemoryReport {
    /// Highest live heap size over the run, if heap tracking was active.
    pub fn peak_heap_bytes(&self) -> Option<usize> {
        if !self.heap_tracking {
            return None;
        }
        self.checkpoints.iter().map(|c| c.heap_peak_bytes).max()
    }

    /// Peak heap size above the baseline at profiling start.
    pub fn peak_heap_increment(&self) -> Option<usize> {
        self.peak_heap_bytes()
            .map(|peak| peak.saturating_sub(self.heap_baseline_bytes))
    }

    /// Highest sampled RSS over the run.
    pub fn peak_rss_bytes(&self) -> Option<u64> {
        self.checkpoints.iter().filter_map(|c| c.rss_bytes).max()
    }

    /// Format as human-readable text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Memory profile: {}\n\n", self.title));
        out.push_str(&format!(
            "{:>4}  {:<20} {:>12} {:>12} {:>12} {:>12} {:>10}\n",
            "Step", "Checkpoint", "Mem usage", "Increment", "Heap", "Heap incr", "Time"
        ));
        out.push_str(&format!("{}\n", "=".repeat(88)));

        for (i, c) in self.checkpoints.iter().enumerate() {
            let (heap, heap_incr) = if self.heap_tracking {
                (
                    format_mib(c.heap_bytes as f64),
                    format_mib_delta(c.heap_increment),
                )
            } else {
                ("-".to_string(), "-".to_string())
            };
            out.push_str(&format!(
                "{:>4}  {:<20} {:>12} {:>12} {:>12} {:>12} {:>9.3}s\n",
                i + 1,
                c.label,
                c.rss_bytes
                    .map_or_else(|| "-".to_string(), |b| format_mib(b as f64)),
                c.rss_increment
                    .map_or_else(|| "-".to_string(), format_mib_delta),
                heap,
                heap_incr,
                c.elapsed_secs,
            ));
        }

        if let Some(peak) = self.peak_heap_increment() {
            out.push_str(&format!("\nPeak heap above baseline: {}\n", format_mib(peak as f64)));
        }
        if let Some(peak) = self.peak_rss_bytes() {
            out.push_str(&format!("Peak sampled RSS: {}\n", format_mib(peak as f64)));
        }

        for d in &self.diagnostics {
            out.push_str(&format!("Diagnostic: {}\n", d));
        }

        out
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON, creating parent directories as needed.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn format_mib(bytes: f64) -> String {
    format!("{:.1} MiB", bytes / MIB)
}

fn format_mib_delta(bytes: i64) -> String {
    format!("{:+.1} MiB", bytes as f64 / MIB)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint(label: &str, heap: usize, peak: usize, rss: Option<u64>) -> Checkpoint {
        Checkpoint {
            label: label.to_string(),
            elapsed_secs: 0.0,
            rss_bytes: rss,
            rss_increment: None,
            heap_bytes: heap,
            heap_increment: 0,
            heap_peak_bytes: peak,
        }
    }

    fn sample_report() -> MemoryReport {
        MemoryReport {
            title: "dense solve (n = 1000)".to_string(),
            heap_tracking: true,
            heap_baseline_bytes: 1 << 20,
            checkpoints: vec![
                checkpoint("start", 1 << 20, 1 << 20, Some(10 << 20)),
                checkpoint("matrix assembled", 9 << 20, 9 << 20, Some(18 << 20)),
                checkpoint("system solved", 9 << 20, 17 << 20, Some(26 << 20)),
            ],
            diagnostics: Vec::new(),
        }
    }

    #[test]
    fn peaks() {
        let report = sample_report();
        assert_eq!(report.peak_heap_bytes(), Some(17 << 20));
        assert_eq!(report.peak_heap_increment(), Some(16 << 20));
        assert_eq!(report.peak_rss_bytes(), Some(26 << 20));
    }

    #[test]
    fn no_heap_peak_without_tracking() {
        let mut report = sample_report();
        report.heap_tracking = false;
        assert_eq!(report.peak_heap_bytes(), None);
        assert!(report.to_text().contains(" - "));
    }

    #[test]
    fn text_lists_every_checkpoint() {
        let text = sample_report().to_text();
        assert!(text.starts_with("Memory profile: dense solve (n = 1000)"));
        assert!(text.contains("matrix assembled"));
        assert!(text.contains("system solved"));
        assert!(text.contains("Peak heap above baseline: 16.0 MiB"));
        assert!(!text.contains("Diagnostic:"));
    }

    #[test]
    fn text_includes_diagnostics() {
        let mut report = sample_report();
        report.checkpoints.clear();
        report.diagnostics.push("unknown matrix type: \"banana\"".to_string());
        assert!(report.to_text().contains("Diagnostic: unknown matrix type"));
    }

    #[test]
    fn json_round_trip_and_write() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.write_json(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: MemoryReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.title, report.title);
        assert_eq!(parsed.checkpoints, report.checkpoints);
        assert!(!content.contains("diagnostics"));
    }

    #[test]
    fn delta_formatting_is_signed() {
        assert_eq!(format_mib_delta(1 << 20), "+1.0 MiB");
        assert_eq!(format_mib_delta(-(2 << 20)), "-2.0 MiB");
        assert_eq!(format_mib(0.0), "0.0 MiB");
    }
}
