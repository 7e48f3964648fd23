//! RAM usage panel.

use crate::fmt::format_gib2;
use crate::model::MemSample;

use super::{CellClass, FrameView, PanelView, ViewCell, ViewRow};

pub fn panel(sample: &MemSample) -> PanelView {
    let percent = ViewCell::styled(format!("({:.1}%)", sample.percent), CellClass::Emphasis);
    PanelView {
        title: "RAM Usage".to_string(),
        headers: Vec::new(),
        rows: vec![
            ViewRow::new(vec![
                ViewCell::plain("Total"),
                ViewCell::plain(format_gib2(sample.total)),
                ViewCell::plain(""),
            ]),
            // both Available and Used carry the used percentage
            ViewRow::new(vec![
                ViewCell::plain("Available"),
                ViewCell::plain(format_gib2(sample.available)),
                percent.clone(),
            ]),
            ViewRow::new(vec![
                ViewCell::plain("Used"),
                ViewCell::plain(format_gib2(sample.used)),
                percent,
            ]),
        ],
    }
}

pub fn build(sample: &MemSample) -> FrameView {
    FrameView::new(vec![panel(sample)])
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_ram_rows() {
        let frame = build(&MemSample {
            total: 8 * GIB,
            available: 6 * GIB,
            used: 2 * GIB,
            percent: 25.0,
        });
        let rows = &frame.panels[0].rows;
        assert_eq!(rows[0].cells[1].text, "8.00 GB");
        assert_eq!(rows[1].cells[1].text, "6.00 GB");
        assert_eq!(rows[1].cells[2].text, "(25.0%)");
        assert_eq!(rows[2].cells[1].text, "2.00 GB");
        assert_eq!(rows[2].cells[2].text, "(25.0%)");
    }
}
