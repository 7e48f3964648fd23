//! Countdown display.

use crate::fmt::{format_countdown, format_hms};

use super::FrameView;

/// The frame shown before the countdown starts: whole-second `HH:MM:SS`.
pub fn initial(total_seconds: u64) -> FrameView {
    FrameView::text(format_hms(total_seconds))
}

/// Countdown frame with sub-second precision; remaining time never displays
/// negative.
pub fn build(remaining_secs: f64) -> FrameView {
    FrameView::text(format_countdown(remaining_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_whole_second_hms() {
        assert_eq!(initial(5).first_line(), Some("00:00:05"));
        assert_eq!(initial(3700).first_line(), Some("01:01:40"));
    }

    #[test]
    fn test_countdown_never_negative() {
        assert_eq!(build(2.5).first_line(), Some("00:02:50"));
        assert_eq!(build(0.0).first_line(), Some("00:00:00"));
        assert_eq!(build(-1.0).first_line(), Some("00:00:00"));
    }
}
