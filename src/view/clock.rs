//! Wall clock with a blinking-dots display.

use chrono::{DateTime, Local};

use super::FrameView;

/// Explicit toggle state for the blinking separator. Owned by the widget
/// instance and flipped on every non-seconds-mode build; never reset.
#[derive(Debug, Clone, Copy)]
pub struct DotsState {
    dots: bool,
}

impl Default for DotsState {
    fn default() -> Self {
        Self { dots: true }
    }
}

impl DotsState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builds the clock frame.
///
/// Seconds mode shows `HH:MM:SS` continuously. Otherwise the display
/// alternates `HH:MM` / `HH MM` each call, a period-2 cycle starting with
/// the dotted form.
pub fn build(state: &mut DotsState, seconds: bool, now: DateTime<Local>) -> FrameView {
    if seconds {
        return FrameView::text(now.format("%H:%M:%S").to_string());
    }

    let text = if state.dots {
        state.dots = false;
        now.format("%H:%M").to_string()
    } else {
        state.dots = true;
        now.format("%H %M").to_string()
    };
    FrameView::text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_1234() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap()
    }

    #[test]
    fn test_seconds_mode_is_static() {
        let mut state = DotsState::new();
        for _ in 0..3 {
            let frame = build(&mut state, true, at_1234());
            assert_eq!(frame.first_line(), Some("12:34:56"));
        }
    }

    #[test]
    fn test_dots_toggle_period_two() {
        let mut state = DotsState::new();
        let first = build(&mut state, false, at_1234());
        let second = build(&mut state, false, at_1234());
        let third = build(&mut state, false, at_1234());
        assert_eq!(first.first_line(), Some("12:34"));
        assert_eq!(second.first_line(), Some("12 34"));
        assert_eq!(third.first_line(), Some("12:34"));
    }
}
