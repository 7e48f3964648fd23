//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::CellClass;

/// Widget color palette.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const BORDER: Color = Color::Cyan;
    pub const TITLE: Color = Color::Cyan;
    pub const HEADER_FG: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Panel border style.
    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// Panel title style.
    pub fn title() -> Style {
        Style::default().fg(Theme::TITLE).add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .add_modifier(Modifier::BOLD)
    }

    /// Footer hint style.
    pub fn footer() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Maps a UI-agnostic [`CellClass`] to a ratatui [`Style`].
    pub fn from_class(class: CellClass) -> Style {
        match class {
            CellClass::Normal => Self::default(),
            CellClass::Accent => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            CellClass::Emphasis => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            CellClass::Good => Style::default().fg(Color::Green),
            CellClass::Warning => Style::default().fg(Color::Yellow),
            CellClass::Critical => Style::default().fg(Color::Red),
            CellClass::Dimmed => Style::default().fg(Color::DarkGray),
        }
    }
}
