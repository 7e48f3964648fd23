//! Aggregate dashboard: CPU, RAM, home-directory disk, network totals and
//! uptime in one multi-panel frame.

use crate::fmt::{format_bytes, format_gib2, format_uptime};
use crate::model::{CpuSample, MemSample, NetTotals, PartitionUsage, Uptime};

use super::{CellClass, FrameView, PanelView, ViewCell, ViewRow, cpu};

pub fn build(
    cpu_sample: &CpuSample,
    mem: &MemSample,
    home: Option<&PartitionUsage>,
    totals: &NetTotals,
    uptime: Uptime,
) -> FrameView {
    let mut panels = vec![cpu::panel(cpu_sample)];

    // unlike the standalone RAM widget, only the Used row carries the percent
    panels.push(PanelView {
        title: "RAM Usage".to_string(),
        headers: Vec::new(),
        rows: vec![
            ViewRow::new(vec![
                ViewCell::plain("Total"),
                ViewCell::plain(format_gib2(mem.total)),
                ViewCell::plain(""),
            ]),
            ViewRow::new(vec![
                ViewCell::plain("Available"),
                ViewCell::plain(format_gib2(mem.available)),
                ViewCell::plain(""),
            ]),
            ViewRow::new(vec![
                ViewCell::plain("Used"),
                ViewCell::plain(format_gib2(mem.used)),
                ViewCell::styled(format!("({:.1}%)", mem.percent), CellClass::Emphasis),
            ]),
        ],
    });

    let disk_rows = match home {
        Some(part) => vec![
            ViewRow::new(vec![
                ViewCell::plain("Total"),
                ViewCell::plain(format_bytes(part.usage.total)),
                ViewCell::plain(""),
            ]),
            ViewRow::new(vec![
                ViewCell::plain("Used"),
                ViewCell::plain(format_bytes(part.usage.used)),
                ViewCell::styled(format!("({:.1}%)", part.usage.percent), CellClass::Emphasis),
            ]),
            ViewRow::new(vec![
                ViewCell::plain("Free"),
                ViewCell::plain(format_bytes(part.usage.free)),
                ViewCell::plain(""),
            ]),
        ],
        // home partition unreadable: degrade the panel, keep the dashboard
        None => vec![ViewRow::new(vec![ViewCell::styled(
            "unavailable",
            CellClass::Dimmed,
        )])],
    };
    panels.push(PanelView {
        title: "Disk Usage".to_string(),
        headers: Vec::new(),
        rows: disk_rows,
    });

    panels.push(PanelView {
        title: "Network".to_string(),
        headers: Vec::new(),
        rows: vec![
            ViewRow::new(vec![
                ViewCell::plain("Sent"),
                ViewCell::plain(format_bytes(totals.bytes_sent)),
            ]),
            ViewRow::new(vec![
                ViewCell::plain("Recv"),
                ViewCell::plain(format_bytes(totals.bytes_recv)),
            ]),
        ],
    });

    panels.push(PanelView {
        title: "Uptime".to_string(),
        headers: Vec::new(),
        rows: vec![ViewRow::new(vec![
            ViewCell::plain("Time"),
            ViewCell::plain(format_uptime(uptime.secs)),
        ])],
    });

    FrameView::new(panels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UsageStat;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_dashboard_panel_order() {
        let frame = build(
            &CpuSample {
                per_core: vec![50.0],
            },
            &MemSample {
                total: 8 * GIB,
                available: 4 * GIB,
                used: 4 * GIB,
                percent: 50.0,
            },
            Some(&PartitionUsage {
                mountpoint: "/home/user".to_string(),
                fstype: String::new(),
                usage: UsageStat {
                    used: 30 * GIB,
                    free: 70 * GIB,
                    total: 100 * GIB,
                    percent: 30.0,
                },
            }),
            &NetTotals {
                bytes_sent: 3 * GIB,
                bytes_recv: 100 * 1024 * 1024,
            },
            Uptime { secs: 86_400 + 60 },
        );
        let titles: Vec<&str> = frame.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["CPU Usage", "RAM Usage", "Disk Usage", "Network", "Uptime"]
        );
        assert_eq!(frame.panels[3].rows[0].cells[1].text, "3.00 GB");
        assert_eq!(frame.panels[3].rows[1].cells[1].text, "100.00 MB");
        assert_eq!(frame.panels[4].rows[0].cells[1].text, "1 day, 0:01:00");
    }

    #[test]
    fn test_ram_percent_only_on_used_row() {
        let frame = build(
            &CpuSample::default(),
            &MemSample {
                total: 8 * GIB,
                available: 4 * GIB,
                used: 4 * GIB,
                percent: 50.0,
            },
            None,
            &NetTotals::default(),
            Uptime::default(),
        );
        let rows = &frame.panels[1].rows;
        assert_eq!(rows[0].cells[0].text, "Total");
        assert_eq!(rows[1].cells[0].text, "Available");
        assert_eq!(rows[1].cells[2].text, "");
        assert_eq!(rows[2].cells[0].text, "Used");
        assert_eq!(rows[2].cells[2].text, "(50.0%)");
    }

    #[test]
    fn test_unreadable_home_degrades_panel_only() {
        let frame = build(
            &CpuSample::default(),
            &MemSample::default(),
            None,
            &NetTotals::default(),
            Uptime::default(),
        );
        assert_eq!(frame.panels.len(), 5);
        assert_eq!(frame.panels[2].rows[0].cells[0].text, "unavailable");
    }
}
