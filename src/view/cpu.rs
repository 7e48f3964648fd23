//! Per-core CPU usage panel.

use crate::fmt::format_percent;
use crate::model::CpuSample;

use super::{CellClass, FrameView, PanelView, ViewCell, ViewRow};

pub fn panel(sample: &CpuSample) -> PanelView {
    let mut rows: Vec<ViewRow> = sample
        .per_core
        .iter()
        .enumerate()
        .map(|(i, usage)| {
            ViewRow::new(vec![
                ViewCell::plain(format!("Core {}", i + 1)),
                ViewCell::styled(format_percent(*usage), CellClass::Emphasis),
            ])
        })
        .collect();

    rows.push(ViewRow::spacer());
    rows.push(ViewRow::new(vec![
        ViewCell::styled("Average", CellClass::Accent),
        ViewCell::styled(format_percent(sample.average()), CellClass::Accent),
    ]));

    PanelView {
        title: "CPU Usage".to_string(),
        headers: Vec::new(),
        rows,
    }
}

pub fn build(sample: &CpuSample) -> FrameView {
    FrameView::new(vec![panel(sample)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_core_plus_average() {
        let frame = build(&CpuSample {
            per_core: vec![10.0, 20.0, 30.0],
        });
        let panel = &frame.panels[0];
        // 3 cores + spacer + average
        assert_eq!(panel.rows.len(), 5);
        assert_eq!(panel.rows[0].cells[0].text, "Core 1");
        assert_eq!(panel.rows[0].cells[1].text, " 10.0%");
        assert_eq!(panel.rows[4].cells[0].text, "Average");
        assert_eq!(panel.rows[4].cells[1].text, " 20.0%");
    }

    #[test]
    fn test_average_matches_mean_of_displayed_values() {
        let sample = CpuSample {
            per_core: vec![12.3, 45.6, 78.9, 3.2],
        };
        let frame = build(&sample);
        let shown = frame.panels[0].rows.last().unwrap().cells[1]
            .text
            .trim()
            .trim_end_matches('%')
            .parse::<f32>()
            .unwrap();
        let mean = sample.per_core.iter().sum::<f32>() / 4.0;
        assert!((shown - mean).abs() < 0.05);
    }
}
