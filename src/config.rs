//! Per-widget run configuration.
//!
//! Built once per invocation and immutable afterwards. Validation never
//! surfaces to the caller: unparsable or out-of-range intervals fall back to
//! the widget's documented default.

use std::convert::Infallible;
use std::time::Duration;

/// Widget defaults, in seconds.
pub const DEFAULT_CPU_INTERVAL: f64 = 1.0;
pub const DEFAULT_RAM_INTERVAL: f64 = 0.0;
pub const DEFAULT_DISK_INTERVAL: f64 = 0.0;
pub const DEFAULT_NET_INTERVAL: f64 = 2.0;
pub const DEFAULT_DASH_INTERVAL: f64 = 1.0;
pub const CLOCK_INTERVAL: f64 = 1.0;
pub const DEFAULT_TICK_RATE: f64 = 0.01;

/// Default countdown end message.
pub const DEFAULT_END_MESSAGE: &str = "Time's up!";

/// Lenient seconds parser for clap arguments: anything unparsable becomes
/// NaN, which the [`RunConfig`] constructors replace with the default.
pub fn lenient_seconds(raw: &str) -> Result<f64, Infallible> {
    Ok(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}

/// Interval for looping widgets: non-finite or non-positive values fall back
/// to the default.
fn interval_or(raw: Option<f64>, default: f64) -> f64 {
    match raw {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

/// Interval for one-shot-capable widgets: zero is meaningful (render once),
/// anything invalid or negative falls back to the default.
fn one_shot_interval_or(raw: Option<f64>, default: f64) -> f64 {
    match raw {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => default,
    }
}

/// Immutable per-widget settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Sampling/redraw interval in seconds. Zero means one-shot for the
    /// widgets that support it.
    pub interval: f64,
    /// Clock: show seconds continuously instead of the blinking-dots display.
    pub seconds: bool,
    /// Stopwatch: numeric `MM:SS:CC` instead of the worded format.
    pub numbers: bool,
    /// Timer: countdown duration in whole seconds.
    pub total_seconds: u64,
    /// Timer: message printed after natural expiry.
    pub end_message: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_CPU_INTERVAL,
            seconds: false,
            numbers: false,
            total_seconds: 0,
            end_message: None,
        }
    }
}

impl RunConfig {
    pub fn cpu(interval: Option<f64>) -> Self {
        Self {
            interval: interval_or(interval, DEFAULT_CPU_INTERVAL),
            ..Default::default()
        }
    }

    pub fn ram(interval: Option<f64>) -> Self {
        Self {
            interval: one_shot_interval_or(interval, DEFAULT_RAM_INTERVAL),
            ..Default::default()
        }
    }

    pub fn disk(interval: Option<f64>) -> Self {
        Self {
            interval: one_shot_interval_or(interval, DEFAULT_DISK_INTERVAL),
            ..Default::default()
        }
    }

    pub fn net(interval: Option<f64>) -> Self {
        Self {
            interval: interval_or(interval, DEFAULT_NET_INTERVAL),
            ..Default::default()
        }
    }

    pub fn dash(interval: Option<f64>) -> Self {
        Self {
            interval: interval_or(interval, DEFAULT_DASH_INTERVAL),
            ..Default::default()
        }
    }

    pub fn clock(seconds: bool) -> Self {
        Self {
            interval: CLOCK_INTERVAL,
            seconds,
            ..Default::default()
        }
    }

    pub fn stopwatch(rate: Option<f64>, numbers: bool) -> Self {
        Self {
            interval: interval_or(rate, DEFAULT_TICK_RATE),
            numbers,
            ..Default::default()
        }
    }

    pub fn timer(total_seconds: u64, rate: Option<f64>, end_message: Option<String>) -> Self {
        Self {
            interval: interval_or(rate, DEFAULT_TICK_RATE),
            total_seconds,
            end_message,
            ..Default::default()
        }
    }

    /// True when the widget should render exactly once and return.
    pub fn is_one_shot(&self) -> bool {
        self.interval == 0.0
    }

    /// Tick cadence for the refresh loop. Only meaningful when not one-shot.
    pub fn tick(&self) -> Duration {
        Duration::from_secs_f64(self.interval.max(f64::EPSILON))
    }

    /// End message with the default applied.
    pub fn end_message_or_default(&self) -> &str {
        self.end_message.as_deref().unwrap_or(DEFAULT_END_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_seconds_falls_back_to_nan() {
        assert_eq!(lenient_seconds("2.5"), Ok(2.5));
        assert!(lenient_seconds("abc").unwrap().is_nan());
        assert!(lenient_seconds("").unwrap().is_nan());
    }

    #[test]
    fn test_cpu_interval_clamps_invalid() {
        assert_eq!(RunConfig::cpu(None).interval, 1.0);
        assert_eq!(RunConfig::cpu(Some(0.0)).interval, 1.0);
        assert_eq!(RunConfig::cpu(Some(-3.0)).interval, 1.0);
        assert_eq!(RunConfig::cpu(Some(f64::NAN)).interval, 1.0);
        assert_eq!(RunConfig::cpu(Some(0.5)).interval, 0.5);
    }

    #[test]
    fn test_ram_zero_is_one_shot() {
        assert!(RunConfig::ram(None).is_one_shot());
        assert!(RunConfig::ram(Some(0.0)).is_one_shot());
        assert!(!RunConfig::ram(Some(2.0)).is_one_shot());
        // negative and unparsable both land on the one-shot default
        assert!(RunConfig::ram(Some(-1.0)).is_one_shot());
        assert!(RunConfig::ram(Some(f64::NAN)).is_one_shot());
    }

    #[test]
    fn test_net_default_is_two_seconds() {
        assert_eq!(RunConfig::net(None).interval, 2.0);
        assert_eq!(RunConfig::net(Some(f64::INFINITY)).interval, 2.0);
    }

    #[test]
    fn test_timer_defaults() {
        let cfg = RunConfig::timer(5, None, None);
        assert_eq!(cfg.interval, DEFAULT_TICK_RATE);
        assert_eq!(cfg.end_message_or_default(), DEFAULT_END_MESSAGE);
        let cfg = RunConfig::timer(5, Some(0.5), Some("done".into()));
        assert_eq!(cfg.interval, 0.5);
        assert_eq!(cfg.end_message_or_default(), "done");
    }
}
