//! Shared formatting helpers for widget frames.
//!
//! All pure formatting functions (no styles, no layout) live here. The
//! widget builders in [`crate::view`] call into these so that every format
//! that matters is unit-testable without a terminal.

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Format a throughput in bytes/sec with auto-selected unit.
///
/// `< 1024` -> `" 1000 B/s"` (integer), `< 1024^2` -> `"  1.5 KB/s"`,
/// else `"  1.5 MB/s"` (one decimal).
pub fn format_speed(bps: f64) -> String {
    if bps >= MIB {
        format!("{:5.1} MB/s", bps / MIB)
    } else if bps >= KIB {
        format!("{:5.1} KB/s", bps / KIB)
    } else {
        format!("{:5.0} B/s", bps)
    }
}

/// Cumulative traffic column: MiB with one decimal, right-aligned.
pub fn format_mib(bytes: u64) -> String {
    format!("{:8.1} MB", bytes as f64 / MIB)
}

/// RAM sizes: GiB with two decimals.
pub fn format_gib2(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / GIB)
}

/// Disk sizes: GiB with one decimal, fixed width.
pub fn format_gib1(bytes: u64) -> String {
    format!("{:5.1} GB", bytes as f64 / GIB)
}

/// Dashboard sizes: GiB above one GiB, MiB below, two decimals.
pub fn format_bytes(bytes: u64) -> String {
    let f = bytes as f64;
    if f > GIB {
        format!("{:.2} GB", f / GIB)
    } else {
        format!("{:.2} MB", f / MIB)
    }
}

/// Number of filled cells in the 10-cell usage bar: `floor(percent / 10)`,
/// clamped to `0..=10`.
pub fn bar_filled(percent: f64) -> usize {
    ((percent / 10.0) as usize).min(10)
}

/// The usage bar split into its filled and empty glyph runs, so the caller
/// can style them independently.
pub fn usage_bar(percent: f64) -> (String, String) {
    let filled = bar_filled(percent);
    ("█".repeat(filled), "░".repeat(10 - filled))
}

/// Uptime in `timedelta` style: `"3:04:05"`, `"1 day, 3:04:05"`,
/// `"2 days, 3:04:05"`.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    match days {
        0 => format!("{}:{:02}:{:02}", hours, minutes, seconds),
        1 => format!("1 day, {}:{:02}:{:02}", hours, minutes, seconds),
        d => format!("{} days, {}:{:02}:{:02}", d, hours, minutes, seconds),
    }
}

/// Stopwatch display.
///
/// Numeric mode: `"MM:SS:CC"` with CC = hundredths. Worded mode:
/// `"3m 5s 250ms"`. Minutes are unbounded (no hour rollover).
pub fn format_stopwatch(elapsed_secs: f64, numbers: bool) -> String {
    let minutes = (elapsed_secs / 60.0) as u64;
    let seconds = (elapsed_secs % 60.0) as u64;
    if numbers {
        let hundredths = ((elapsed_secs * 100.0) % 100.0) as u64;
        format!("{:02}:{:02}:{:02}", minutes, seconds, hundredths)
    } else {
        let millis = ((elapsed_secs * 1000.0) % 1000.0) as u64;
        format!("{}m {}s {}ms", minutes, seconds, millis)
    }
}

/// Countdown display: stopwatch-style `"MM:SS:CC"` with remaining time
/// clamped to zero, never negative.
pub fn format_countdown(remaining_secs: f64) -> String {
    let remaining = remaining_secs.max(0.0);
    let minutes = (remaining / 60.0) as u64;
    let seconds = (remaining % 60.0) as u64;
    let hundredths = ((remaining * 100.0) % 100.0) as u64;
    format!("{:02}:{:02}:{:02}", minutes, seconds, hundredths)
}

/// Whole-second `"HH:MM:SS"`, used for the timer's initial display.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Core/average percent column: `" 42.5%"`.
pub fn format_percent(value: f32) -> String {
    format!("{:5.1}%", value)
}
