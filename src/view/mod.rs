//! UI-agnostic frame model.
//!
//! Widget builders produce a [`FrameView`] — an ordered tree of panels,
//! rows and styled cells with no behavior — which the TUI maps to ratatui
//! widgets and the one-shot path renders as plain text. Nothing in this
//! module depends on a rendering framework.

pub mod clock;
pub mod cpu;
pub mod dashboard;
pub mod disk;
pub mod net;
pub mod ram;
pub mod stopwatch;
pub mod timer;

/// Cell-level style classification, mapped to terminal colors by the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellClass {
    #[default]
    Normal,
    /// Cyan. Labels, averages, titles.
    Accent,
    /// Magenta. Percentage values.
    Emphasis,
    /// Green. Healthy usage, links that are up.
    Good,
    /// Yellow. Elevated usage.
    Warning,
    /// Red. High usage, links that are down.
    Critical,
    /// Dark gray. Secondary detail.
    Dimmed,
}

/// Maps a used-percentage to its threshold color: green below 60, yellow
/// below 85, red otherwise.
pub fn usage_class(percent: f64) -> CellClass {
    if percent < 60.0 {
        CellClass::Good
    } else if percent < 85.0 {
        CellClass::Warning
    } else {
        CellClass::Critical
    }
}

/// A single styled table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    pub class: CellClass,
}

impl ViewCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: CellClass::Normal,
        }
    }

    pub fn styled(text: impl Into<String>, class: CellClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

/// One table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRow {
    pub cells: Vec<ViewCell>,
}

impl ViewRow {
    pub fn new(cells: Vec<ViewCell>) -> Self {
        Self { cells }
    }

    /// An empty spacer row.
    pub fn spacer() -> Self {
        Self::default()
    }
}

/// A titled table of rows, optionally with a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<ViewRow>,
}

/// The fully-formed renderable output for one tick. Built fresh every tick
/// and immediately superseded by the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameView {
    pub panels: Vec<PanelView>,
    /// Hint line shown under the panels in live mode (`Press ^C to exit...`).
    pub footer: Option<String>,
}

/// The standard live-mode footer.
pub const EXIT_HINT: &str = "Press ^C to exit...";

impl FrameView {
    pub fn new(panels: Vec<PanelView>) -> Self {
        Self {
            panels,
            footer: None,
        }
    }

    /// A frame holding a single line of text, used by the clock, stopwatch
    /// and timer widgets.
    pub fn text(line: impl Into<String>) -> Self {
        Self::new(vec![PanelView {
            title: String::new(),
            headers: Vec::new(),
            rows: vec![ViewRow::new(vec![ViewCell::plain(line)])],
        }])
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// First cell of the first row, for tests and the text widgets.
    pub fn first_line(&self) -> Option<&str> {
        self.panels
            .first()
            .and_then(|p| p.rows.first())
            .and_then(|r| r.cells.first())
            .map(|c| c.text.as_str())
    }

    /// Renders the frame as plain text with padded columns. Used by the
    /// one-shot mode; styles and the footer hint are dropped.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (i, panel) in self.panels.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !panel.title.is_empty() {
                out.push_str(&panel.title);
                out.push('\n');
            }

            // Column widths across the header and every row.
            let mut widths: Vec<usize> = panel
                .headers
                .iter()
                .map(|h| h.chars().count())
                .collect();
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

            if !panel.headers.is_empty() {
                let line: Vec<String> = panel
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(col, h)| format!("{:<width$}", h, width = widths[col]))
                    .collect();
                out.push_str(line.join("  ").trim_end());
                out.push('\n');
            }
            for row in &panel.rows {
                let line: Vec<String> = row
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(col, c)| format!("{:<width$}", c.text, width = widths[col]))
                    .collect();
                out.push_str(line.join("  ").trim_end());
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_class_thresholds() {
        assert_eq!(usage_class(0.0), CellClass::Good);
        assert_eq!(usage_class(59.9), CellClass::Good);
        assert_eq!(usage_class(60.0), CellClass::Warning);
        assert_eq!(usage_class(84.9), CellClass::Warning);
        assert_eq!(usage_class(85.0), CellClass::Critical);
        assert_eq!(usage_class(100.0), CellClass::Critical);
    }

    #[test]
    fn test_text_frame_first_line() {
        let frame = FrameView::text("12:34");
        assert_eq!(frame.first_line(), Some("12:34"));
    }

    #[test]
    fn test_plain_text_pads_columns() {
        let frame = FrameView::new(vec![PanelView {
            title: "T".to_string(),
            headers: vec!["A".to_string(), "Bee".to_string()],
            rows: vec![
                ViewRow::new(vec![ViewCell::plain("xx"), ViewCell::plain("y")]),
                ViewRow::new(vec![ViewCell::plain("z"), ViewCell::plain("wwww")]),
            ],
        }]);
        let text = frame.to_plain_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "T");
        assert_eq!(lines[1], "A   Bee");
        assert_eq!(lines[2], "xx  y");
        assert_eq!(lines[3], "z   wwww");
    }
}
