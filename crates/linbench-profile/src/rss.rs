//! Resident set size sampling via `sysinfo`.

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Samples the resident memory of the current process.
pub struct RssSampler {
    system: System,
    pid: Option<Pid>,
}

impl RssSampler {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                log::warn!("Cannot determine current pid, RSS sampling disabled: {}", e);
                None
            }
        };
        Self {
            system: System::new(),
            pid,
        }
    }

    /// Current resident set size in bytes, or `None` if the platform does not
    /// report it.
    pub fn sample(&mut self) -> Option<u64> {
        let pid = self.pid?;
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        self.system.process(pid).map(|p| p.memory())
    }
}

impl Default for RssSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_positive_when_available() {
        let mut sampler = RssSampler::new();
        if let Some(rss) = sampler.sample() {
            assert!(rss > 0);
        }
    }

    #[test]
    fn touched_allocation_is_visible() {
        let mut sampler = RssSampler::new();
        let Some(before) = sampler.sample() else {
            return;
        };

        // 64 MiB, every page written so it becomes resident.
        let block = vec![1u8; 64 << 20];
        let after = sampler.sample().unwrap_or(before);
        assert!(block.iter().step_by(4096).all(|&b| b == 1));

        assert!(
            after >= before + (16 << 20),
            "RSS grew from {before} to {after}"
        );
    }
}
