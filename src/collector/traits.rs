//! Abstraction over the operating-system metric provider.
//!
//! The `MetricSource` trait lets the collector read from the real host via
//! `sysinfo` or from a scripted mock in tests, the same way a filesystem
//! seam lets procfs collectors run against canned data.

use std::io;
use std::path::Path;

use sysinfo::{Disks, Networks, System};

use crate::model::{IfaceStat, MemSample, NetSample, NetTotals, Partition, UsageStat};

use super::linux;

/// Point-in-time reads of every metric domain the widgets display.
pub trait MetricSource {
    /// Per-core CPU load percentages. The first read after startup may
    /// report zeros until a second sample establishes a baseline.
    fn cpu_percent(&mut self) -> Vec<f32>;

    /// Virtual memory totals.
    fn virtual_memory(&mut self) -> MemSample;

    /// Mounted partitions, usage not yet resolved.
    fn disk_partitions(&mut self) -> Vec<Partition>;

    /// Usage for one path. May fail per-partition (e.g. permission denied);
    /// the caller omits that entity and keeps going.
    fn disk_usage(&mut self, path: &Path) -> io::Result<UsageStat>;

    /// Per-interface counters, status and addressing.
    fn net_interfaces(&mut self) -> NetSample;

    /// Aggregate sent/received bytes across all interfaces.
    fn net_totals(&mut self) -> NetTotals;

    /// Boot time as a Unix timestamp, fixed for the source's lifetime.
    fn boot_time(&self) -> u64;
}

/// Real host metrics via the `sysinfo` crate.
pub struct SysinfoSource {
    sys: System,
    disks: Disks,
    networks: Networks,
    boot_time: u64,
}

impl SysinfoSource {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            boot_time: System::boot_time(),
        }
    }

    fn usage_from_space(total: u64, available: u64) -> UsageStat {
        let used = total.saturating_sub(available);
        let percent = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        UsageStat {
            used,
            free: available,
            total,
            percent,
        }
    }
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SysinfoSource {
    fn cpu_percent(&mut self) -> Vec<f32> {
        self.sys.refresh_cpu_all();
        self.sys.cpus().iter().map(|c| c.cpu_usage()).collect()
    }

    fn virtual_memory(&mut self) -> MemSample {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        let percent = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        MemSample {
            total,
            available,
            used,
            percent,
        }
    }

    fn disk_partitions(&mut self) -> Vec<Partition> {
        self.disks.refresh(false);
        self.disks
            .list()
            .iter()
            .map(|d| Partition {
                mountpoint: d.mount_point().to_string_lossy().into_owned(),
                fstype: d.file_system().to_string_lossy().into_owned(),
            })
            .collect()
    }

    fn disk_usage(&mut self, path: &Path) -> io::Result<UsageStat> {
        // Longest mount point that is a prefix of the path wins, so usage
        // for e.g. the home directory resolves to its containing partition.
        self.disks
            .list()
            .iter()
            .filter(|d| path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .map(|d| Self::usage_from_space(d.total_space(), d.available_space()))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no partition contains {}", path.display()),
                )
            })
    }

    fn net_interfaces(&mut self) -> NetSample {
        self.networks.refresh(true);
        let interfaces = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| {
                let ipv4 = data
                    .ip_networks()
                    .iter()
                    .find(|n| n.addr.is_ipv4())
                    .map(|n| n.addr.to_string());
                let ipv6 = data
                    .ip_networks()
                    .iter()
                    .find(|n| n.addr.is_ipv6())
                    .map(|n| n.addr.to_string());
                (
                    name.clone(),
                    IfaceStat {
                        bytes_sent: data.total_transmitted(),
                        bytes_recv: data.total_received(),
                        is_up: linux::interface_is_up(name),
                        ipv4,
                        ipv6,
                    },
                )
            })
            .collect();
        NetSample { interfaces }
    }

    fn net_totals(&mut self) -> NetTotals {
        self.networks.refresh(true);
        let (mut sent, mut recv) = (0u64, 0u64);
        for (_, data) in self.networks.list() {
            sent = sent.saturating_add(data.total_transmitted());
            recv = recv.saturating_add(data.total_received());
        }
        NetTotals {
            bytes_sent: sent,
            bytes_recv: recv,
        }
    }

    fn boot_time(&self) -> u64 {
        self.boot_time
    }
}
