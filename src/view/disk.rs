//! Disk usage panel with per-partition usage bars.

use crate::fmt::{format_gib1, usage_bar};
use crate::model::DiskSample;

use super::{CellClass, FrameView, PanelView, ViewCell, ViewRow, usage_class};

pub fn panel(sample: &DiskSample) -> PanelView {
    let rows = sample
        .partitions
        .iter()
        .map(|part| {
            let percent = part.usage.percent;
            let (filled, empty) = usage_bar(percent);
            let fstype = if part.fstype.is_empty() {
                "-"
            } else {
                part.fstype.as_str()
            };
            ViewRow::new(vec![
                ViewCell::plain(part.mountpoint.clone()),
                ViewCell::styled(fstype, CellClass::Dimmed),
                ViewCell::plain(format_gib1(part.usage.used)),
                ViewCell::plain(format_gib1(part.usage.free)),
                ViewCell::plain(format_gib1(part.usage.total)),
                ViewCell::styled(
                    format!("{:5.1}% {}{}", percent, filled, empty),
                    usage_class(percent),
                ),
            ])
        })
        .collect();

    PanelView {
        title: "Disk Usage".to_string(),
        headers: ["Mount", "Filesystem", "Used", "Free", "Total", "Usage"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows,
    }
}

pub fn build(sample: &DiskSample) -> FrameView {
    FrameView::new(vec![panel(sample)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartitionUsage, UsageStat};
    use crate::view::CellClass;

    const GIB: u64 = 1024 * 1024 * 1024;

    fn part(mount: &str, percent: f64) -> PartitionUsage {
        PartitionUsage {
            mountpoint: mount.to_string(),
            fstype: "ext4".to_string(),
            usage: UsageStat {
                used: (percent / 100.0 * 100.0 * GIB as f64) as u64,
                free: GIB,
                total: 100 * GIB,
                percent,
            },
        }
    }

    #[test]
    fn test_bar_cell_glyph_counts() {
        for percent in [0.0, 12.0, 59.0, 60.0, 85.0, 99.0] {
            let frame = build(&DiskSample {
                partitions: vec![part("/", percent)],
            });
            let cell = &frame.panels[0].rows[0].cells[5];
            let filled = cell.text.matches('█').count();
            let empty = cell.text.matches('░').count();
            assert_eq!(filled, (percent / 10.0) as usize, "percent {}", percent);
            assert_eq!(filled + empty, 10);
        }
    }

    #[test]
    fn test_bar_color_thresholds() {
        let classes: Vec<CellClass> = [30.0, 70.0, 90.0]
            .iter()
            .map(|&p| {
                build(&DiskSample {
                    partitions: vec![part("/", p)],
                })
                .panels[0]
                    .rows[0]
                    .cells[5]
                    .class
            })
            .collect();
        assert_eq!(
            classes,
            vec![CellClass::Good, CellClass::Warning, CellClass::Critical]
        );
    }

    #[test]
    fn test_missing_fstype_shows_dash() {
        let mut p = part("/", 10.0);
        p.fstype = String::new();
        let frame = build(&DiskSample {
            partitions: vec![p],
        });
        assert_eq!(frame.panels[0].rows[0].cells[1].text, "-");
    }
}
