//! Network interfaces panel with live throughput columns.

use std::collections::BTreeMap;

use crate::fmt::{format_mib, format_speed};
use crate::model::NetSample;
use crate::rates::LinkRates;

use super::{CellClass, FrameView, PanelView, ViewCell, ViewRow};

pub fn panel(sample: &NetSample, rates: &BTreeMap<String, LinkRates>) -> PanelView {
    let rows = sample
        .interfaces
        .iter()
        .map(|(name, stat)| {
            let status = if stat.is_up {
                ViewCell::styled("UP", CellClass::Good)
            } else {
                ViewCell::styled("DOWN", CellClass::Critical)
            };
            let link = rates.get(name).copied().unwrap_or_default();
            ViewRow::new(vec![
                ViewCell::plain(name.clone()),
                status,
                ViewCell::styled(stat.ipv4.clone().unwrap_or_else(|| "-".into()), CellClass::Accent),
                ViewCell::styled(stat.ipv6.clone().unwrap_or_else(|| "-".into()), CellClass::Dimmed),
                ViewCell::plain(format_mib(stat.bytes_sent)),
                ViewCell::plain(format_mib(stat.bytes_recv)),
                ViewCell::plain(format_speed(link.send_bps)),
                ViewCell::plain(format_speed(link.recv_bps)),
            ])
        })
        .collect();

    PanelView {
        title: "Network Interfaces".to_string(),
        headers: [
            "Interface",
            "Status",
            "IPv4",
            "IPv6",
            "Sent",
            "Recv",
            "↑ Speed",
            "↓ Speed",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        rows,
    }
}

pub fn build(sample: &NetSample, rates: &BTreeMap<String, LinkRates>) -> FrameView {
    FrameView::new(vec![panel(sample, rates)])
}
