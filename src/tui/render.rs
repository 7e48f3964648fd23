//! Maps a [`FrameView`] to ratatui widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::view::{FrameView, PanelView};

use super::style::Styles;

/// True for single-line frames (clock, stopwatch, timer): rendered bare,
/// without a panel border.
fn is_bare_text(panel: &PanelView) -> bool {
    panel.title.is_empty()
        && panel.headers.is_empty()
        && panel.rows.len() == 1
        && panel.rows[0].cells.len() == 1
}

fn panel_height(panel: &PanelView) -> u16 {
    if is_bare_text(panel) {
        return 1;
    }
    let header = u16::from(!panel.headers.is_empty());
    panel.rows.len() as u16 + header + 2
}

/// Main render function: stacks the frame's panels vertically, footer last.
pub fn render(frame: &mut Frame, view: &FrameView) {
    let mut constraints: Vec<Constraint> = view
        .panels
        .iter()
        .map(|p| Constraint::Length(panel_height(p)))
        .collect();
    if view.footer.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::vertical(constraints).split(frame.area());

    for (panel, area) in view.panels.iter().zip(chunks.iter()) {
        render_panel(frame, *area, panel);
    }

    if let Some(footer) = &view.footer {
        let area = chunks[view.panels.len()];
        frame.render_widget(
            Paragraph::new(Span::styled(footer.as_str(), Styles::footer())),
            area,
        );
    }
}

fn render_panel(frame: &mut Frame, area: Rect, panel: &PanelView) {
    if is_bare_text(panel) {
        let cell = &panel.rows[0].cells[0];
        frame.render_widget(
            Paragraph::new(Span::styled(
                cell.text.as_str(),
                Styles::from_class(cell.class),
            )),
            area,
        );
        return;
    }

    // Column widths from the widest header or cell per column.
    let mut widths: Vec<usize> = panel.headers.iter().map(|h| h.chars().count()).collect();
    for row in &panel.rows {
        for (col, cell) in row.cells.iter().enumerate() {
            let len = cell.text.chars().count();
            if col >= widths.len() {
                widths.push(len);
            } else if len > widths[col] {
                widths[col] = len;
            }
        }
    }

    let rows = panel.rows.iter().map(|row| {
        Row::new(row.cells.iter().map(|cell| {
            Cell::from(Span::styled(
                cell.text.as_str(),
                Styles::from_class(cell.class),
            ))
        }))
    });

    let constraints: Vec<Constraint> = widths
        .iter()
        .map(|w| Constraint::Length(*w as u16))
        .collect();

    let mut table = Table::new(rows, constraints).column_spacing(2).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .title(Span::styled(format!(" {} ", panel.title), Styles::title())),
    );

    if !panel.headers.is_empty() {
        table = table.header(
            Row::new(panel.headers.iter().map(|h| Cell::from(h.as_str())))
                .style(Styles::table_header()),
        );
    }

    frame.render_widget(table, area);
}
