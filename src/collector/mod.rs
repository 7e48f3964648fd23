//! Metric collection: folds raw provider reads into widget samples.

mod linux;
pub mod mock;
mod traits;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use mock::MockSource;
pub use traits::{MetricSource, SysinfoSource};

use crate::model::{
    CpuSample, DiskSample, MemSample, NetSample, NetTotals, PartitionUsage, Uptime,
};

/// Collects samples from a [`MetricSource`].
///
/// A failed read for one partition degrades that row only, never the whole
/// sample; the loop keeps running with whatever the provider could deliver.
pub struct Collector<S: MetricSource> {
    source: S,
}

impl<S: MetricSource> Collector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn cpu_sample(&mut self) -> CpuSample {
        CpuSample {
            per_core: self.source.cpu_percent(),
        }
    }

    pub fn mem_sample(&mut self) -> MemSample {
        self.source.virtual_memory()
    }

    /// Usage per accessible partition. Partitions whose usage read fails are
    /// skipped, all others still appear.
    pub fn disk_sample(&mut self) -> DiskSample {
        let partitions = self.source.disk_partitions();
        let mut resolved = Vec::with_capacity(partitions.len());
        for part in partitions {
            match self.source.disk_usage(Path::new(&part.mountpoint)) {
                Ok(usage) => resolved.push(PartitionUsage {
                    mountpoint: part.mountpoint,
                    fstype: part.fstype,
                    usage,
                }),
                Err(e) => {
                    debug!("skipping partition {}: {}", part.mountpoint, e);
                }
            }
        }
        DiskSample {
            partitions: resolved,
        }
    }

    pub fn net_sample(&mut self) -> NetSample {
        self.source.net_interfaces()
    }

    pub fn net_totals(&mut self) -> NetTotals {
        self.source.net_totals()
    }

    /// Usage for the partition holding the user's home directory, if any.
    pub fn home_usage(&mut self) -> Option<PartitionUsage> {
        let home: PathBuf = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/"));
        match self.source.disk_usage(&home) {
            Ok(usage) => Some(PartitionUsage {
                mountpoint: home.to_string_lossy().into_owned(),
                fstype: String::new(),
                usage,
            }),
            Err(e) => {
                debug!("home directory usage unavailable: {}", e);
                None
            }
        }
    }

    /// Seconds since boot, derived from the source's fixed boot timestamp.
    pub fn uptime(&self) -> Uptime {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        Uptime {
            secs: now.saturating_sub(self.source.boot_time()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_sample_skips_denied_partition() {
        let source = MockSource::typical_system().with_denied_partition("/secret", "ext4");
        let mut collector = Collector::new(source);
        let sample = collector.disk_sample();
        let mounts: Vec<&str> = sample
            .partitions
            .iter()
            .map(|p| p.mountpoint.as_str())
            .collect();
        assert_eq!(mounts, vec!["/", "/data"]);
    }

    #[test]
    fn test_disk_sample_all_accessible() {
        let mut collector = Collector::new(MockSource::typical_system());
        let sample = collector.disk_sample();
        assert_eq!(sample.partitions.len(), 2);
        assert_eq!(sample.partitions[0].usage.percent, 40.0);
    }

    #[test]
    fn test_net_sample_stable_order() {
        let mut collector = Collector::new(MockSource::typical_system());
        let sample = collector.net_sample();
        let names: Vec<&String> = sample.interfaces.keys().collect();
        assert_eq!(names, vec!["eth0", "lo"]);
    }

    #[test]
    fn test_uptime_from_fixed_boot_time() {
        let mut source = MockSource::typical_system();
        source.boot = chrono::Utc::now().timestamp() as u64 - 90;
        let collector = Collector::new(source);
        let uptime = collector.uptime();
        assert!(uptime.secs >= 90 && uptime.secs < 95);
    }
}
