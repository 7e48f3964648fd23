//! Scripted metric source for tests and non-Linux development.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::model::{IfaceStat, MemSample, NetSample, NetTotals, Partition, UsageStat};

use super::traits::MetricSource;

/// A metric source returning fixed, scripted values.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    pub cpu: Vec<f32>,
    pub mem: MemSample,
    pub partitions: Vec<Partition>,
    /// Usage keyed by mount point.
    pub usages: BTreeMap<String, UsageStat>,
    /// Mount points whose usage read fails with permission denied.
    pub denied: Vec<String>,
    pub net: NetSample,
    pub totals: NetTotals,
    pub boot: u64,
}

impl MockSource {
    /// A small plausible system: two cores, 8 GiB RAM, two partitions, one
    /// active interface plus loopback.
    pub fn typical_system() -> Self {
        const GIB: u64 = 1024 * 1024 * 1024;
        let mut usages = BTreeMap::new();
        usages.insert(
            "/".to_string(),
            UsageStat {
                used: 40 * GIB,
                free: 60 * GIB,
                total: 100 * GIB,
                percent: 40.0,
            },
        );
        usages.insert(
            "/data".to_string(),
            UsageStat {
                used: 90 * GIB,
                free: 10 * GIB,
                total: 100 * GIB,
                percent: 90.0,
            },
        );

        let mut interfaces = BTreeMap::new();
        interfaces.insert(
            "eth0".to_string(),
            IfaceStat {
                bytes_sent: 1_000_000,
                bytes_recv: 5_000_000,
                is_up: true,
                ipv4: Some("192.168.1.10".to_string()),
                ipv6: Some("fe80::1".to_string()),
            },
        );
        interfaces.insert(
            "lo".to_string(),
            IfaceStat {
                bytes_sent: 1024,
                bytes_recv: 1024,
                is_up: true,
                ipv4: Some("127.0.0.1".to_string()),
                ipv6: None,
            },
        );

        Self {
            cpu: vec![12.5, 37.5],
            mem: MemSample {
                total: 8 * GIB,
                available: 6 * GIB,
                used: 2 * GIB,
                percent: 25.0,
            },
            partitions: vec![
                Partition {
                    mountpoint: "/".to_string(),
                    fstype: "ext4".to_string(),
                },
                Partition {
                    mountpoint: "/data".to_string(),
                    fstype: "xfs".to_string(),
                },
            ],
            usages,
            denied: Vec::new(),
            net: NetSample { interfaces },
            totals: NetTotals {
                bytes_sent: 1_001_024,
                bytes_recv: 5_001_024,
            },
            boot: 1_700_000_000,
        }
    }

    /// Same system with one extra partition whose usage read is denied.
    pub fn with_denied_partition(mut self, mountpoint: &str, fstype: &str) -> Self {
        self.partitions.push(Partition {
            mountpoint: mountpoint.to_string(),
            fstype: fstype.to_string(),
        });
        self.denied.push(mountpoint.to_string());
        self
    }
}

impl MetricSource for MockSource {
    fn cpu_percent(&mut self) -> Vec<f32> {
        self.cpu.clone()
    }

    fn virtual_memory(&mut self) -> MemSample {
        self.mem
    }

    fn disk_partitions(&mut self) -> Vec<Partition> {
        self.partitions.clone()
    }

    fn disk_usage(&mut self, path: &Path) -> io::Result<UsageStat> {
        let key = path.to_string_lossy();
        if self.denied.iter().any(|d| d.as_str() == key) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", key),
            ));
        }
        self.usages
            .iter()
            .filter(|(mount, _)| path.starts_with(mount.as_str()))
            .max_by_key(|(mount, _)| mount.len())
            .map(|(_, usage)| *usage)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no partition: {}", key))
            })
    }

    fn net_interfaces(&mut self) -> NetSample {
        self.net.clone()
    }

    fn net_totals(&mut self) -> NetTotals {
        self.totals
    }

    fn boot_time(&self) -> u64 {
        self.boot
    }
}
