use std::time::{Duration, Instant};

#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// 記錄每個階段耗時；啟用時附帶行程記憶體 / CPU
pub struct RunMonitor {
    enabled: bool,
    started: Instant,
    phase_started: Instant,
    phases: Vec<(String, Duration)>,
    #[cfg(feature = "cli")]
    system: Option<(System, Pid)>,
    peak_memory_mb: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct ProcessSample {
    pub cpu_usage: f32,
    pub memory_mb: u64,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            enabled,
            started: now,
            phase_started: now,
            phases: Vec::new(),
            #[cfg(feature = "cli")]
            system: if enabled {
                sysinfo::get_current_pid()
                    .ok()
                    .map(|pid| (System::new(), pid))
            } else {
                None
            },
            peak_memory_mb: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[cfg(feature = "cli")]
    fn sample(&mut self) -> Option<ProcessSample> {
        let (system, pid) = self.system.as_mut()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[*pid]),
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let process = system.process(*pid)?;
        Some(ProcessSample {
            cpu_usage: process.cpu_usage(),
            memory_mb: process.memory() / 1024 / 1024,
        })
    }

    #[cfg(not(feature = "cli"))]
    fn sample(&mut self) -> Option<ProcessSample> {
        None
    }

    /// 結束目前階段並記錄耗時
    pub fn finish_phase(&mut self, phase: &str) -> Duration {
        let elapsed = self.phase_started.elapsed();
        self.phase_started = Instant::now();
        self.phases.push((phase.to_string(), elapsed));

        if !self.enabled {
            return elapsed;
        }

        match self.sample() {
            Some(sample) => {
                self.peak_memory_mb = self.peak_memory_mb.max(sample.memory_mb);
                tracing::info!(
                    "📊 {} - {:?}, CPU: {:.1}%, Memory: {}MB, Peak: {}MB",
                    phase,
                    elapsed,
                    sample.cpu_usage,
                    sample.memory_mb,
                    self.peak_memory_mb
                );
            }
            None => tracing::info!("📊 {} - {:?}", phase, elapsed),
        }
        elapsed
    }

    pub fn phases(&self) -> &[(String, Duration)] {
        &self.phases
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                self.started.elapsed(),
                self.peak_memory_mb
            );
        }
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_are_recorded_in_order() {
        let mut monitor = RunMonitor::new(false);
        monitor.finish_phase("extract");
        monitor.finish_phase("transform");
        let names: Vec<&str> = monitor.phases().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["extract", "transform"]);
        assert!(!monitor.is_enabled());
    }
}
