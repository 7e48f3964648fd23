//! Elapsed-time display.

use crate::fmt::format_stopwatch;

use super::FrameView;

/// The frame shown before the first tick.
pub fn initial(numbers: bool) -> FrameView {
    FrameView::text(if numbers { "00:00:00" } else { "0m 0s 0ms" })
}

pub fn build(elapsed_secs: f64, numbers: bool) -> FrameView {
    FrameView::text(format_stopwatch(elapsed_secs, numbers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_matches_formats() {
        assert_eq!(initial(true).first_line(), Some("00:00:00"));
        assert_eq!(initial(false).first_line(), Some("0m 0s 0ms"));
    }

    #[test]
    fn test_build_both_modes() {
        assert_eq!(build(61.5, true).first_line(), Some("01:01:50"));
        assert_eq!(build(61.5, false).first_line(), Some("1m 1s 500ms"));
    }
}
