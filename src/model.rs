//! Point-in-time metric samples.
//!
//! Each sample is an immutable snapshot of one metric domain. Samples are
//! created fresh on every tick and discarded after they are folded into a
//! frame; only the network sample survives one extra tick as the rate
//! baseline (see [`crate::rates`]).

use std::collections::BTreeMap;

/// Per-core CPU load, percentages in `0.0..=100.0`, core order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuSample {
    pub per_core: Vec<f32>,
}

impl CpuSample {
    /// Arithmetic mean of all core percentages, `0.0` when no cores reported.
    pub fn average(&self) -> f32 {
        if self.per_core.is_empty() {
            return 0.0;
        }
        self.per_core.iter().sum::<f32>() / self.per_core.len() as f32
    }
}

/// Virtual memory totals in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemSample {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    /// Used percentage, `0.0..=100.0`.
    pub percent: f64,
}

/// A mounted partition as listed by the provider (usage not yet read).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub mountpoint: String,
    pub fstype: String,
}

/// Usage numbers for one path or partition, bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsageStat {
    pub used: u64,
    pub free: u64,
    pub total: u64,
    pub percent: f64,
}

/// One row of the disk widget: a partition with its usage resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionUsage {
    pub mountpoint: String,
    pub fstype: String,
    pub usage: UsageStat,
}

/// All accessible partitions. Partitions whose usage read failed are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskSample {
    pub partitions: Vec<PartitionUsage>,
}

/// Counters and addressing for one network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IfaceStat {
    /// Cumulative bytes sent since boot (monotonic under normal operation).
    pub bytes_sent: u64,
    /// Cumulative bytes received since boot.
    pub bytes_recv: u64,
    pub is_up: bool,
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
}

/// Per-interface network state, keyed by interface name.
///
/// BTreeMap keeps widget rows in a stable alphabetical order across ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetSample {
    pub interfaces: BTreeMap<String, IfaceStat>,
}

/// Aggregate sent/received bytes across all interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetTotals {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

/// Duration since boot, in whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uptime {
    pub secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_average() {
        let sample = CpuSample {
            per_core: vec![10.0, 20.0, 30.0, 40.0],
        };
        assert!((sample.average() - 25.0).abs() < 0.05);
    }

    #[test]
    fn test_cpu_average_empty() {
        assert_eq!(CpuSample::default().average(), 0.0);
    }
}
