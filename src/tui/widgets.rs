//! Frame sources: one driver per widget, adapting the pure view builders to
//! the refresh loop.

use std::time::Instant;

use chrono::Local;

use crate::collector::{Collector, MetricSource};
use crate::config::RunConfig;
use crate::rates::NetRateState;
use crate::view::clock::DotsState;
use crate::view::{self, EXIT_HINT, FrameView};

/// A widget the refresh loop can drive: build the next frame on each tick,
/// and optionally report a natural terminal state (countdown expiry).
pub trait FrameSource {
    fn tick(&mut self) -> FrameView;

    /// True once the widget has reached its natural end. Checked after the
    /// frame from the finishing tick has been drawn.
    fn finished(&self) -> bool {
        false
    }
}

pub struct ClockWidget {
    state: DotsState,
    seconds: bool,
}

impl ClockWidget {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            state: DotsState::new(),
            seconds: config.seconds,
        }
    }
}

impl FrameSource for ClockWidget {
    fn tick(&mut self) -> FrameView {
        view::clock::build(&mut self.state, self.seconds, Local::now())
    }
}

pub struct CpuWidget<S: MetricSource> {
    collector: Collector<S>,
}

impl<S: MetricSource> CpuWidget<S> {
    pub fn new(collector: Collector<S>) -> Self {
        Self { collector }
    }
}

impl<S: MetricSource> FrameSource for CpuWidget<S> {
    fn tick(&mut self) -> FrameView {
        view::cpu::build(&self.collector.cpu_sample()).with_footer(EXIT_HINT)
    }
}

pub struct RamWidget<S: MetricSource> {
    collector: Collector<S>,
}

impl<S: MetricSource> RamWidget<S> {
    pub fn new(collector: Collector<S>) -> Self {
        Self { collector }
    }
}

impl<S: MetricSource> FrameSource for RamWidget<S> {
    fn tick(&mut self) -> FrameView {
        view::ram::build(&self.collector.mem_sample()).with_footer(EXIT_HINT)
    }
}

pub struct DiskWidget<S: MetricSource> {
    collector: Collector<S>,
}

impl<S: MetricSource> DiskWidget<S> {
    pub fn new(collector: Collector<S>) -> Self {
        Self { collector }
    }
}

impl<S: MetricSource> FrameSource for DiskWidget<S> {
    fn tick(&mut self) -> FrameView {
        view::disk::build(&self.collector.disk_sample()).with_footer(EXIT_HINT)
    }
}

pub struct NetWidget<S: MetricSource> {
    collector: Collector<S>,
    rates: NetRateState,
}

impl<S: MetricSource> NetWidget<S> {
    pub fn new(collector: Collector<S>) -> Self {
        Self {
            collector,
            rates: NetRateState::new(),
        }
    }
}

impl<S: MetricSource> FrameSource for NetWidget<S> {
    fn tick(&mut self) -> FrameView {
        let sample = self.collector.net_sample();
        let rates = self.rates.update(&sample, Instant::now());
        view::net::build(&sample, &rates).with_footer(EXIT_HINT)
    }
}

pub struct DashWidget<S: MetricSource> {
    collector: Collector<S>,
}

impl<S: MetricSource> DashWidget<S> {
    pub fn new(collector: Collector<S>) -> Self {
        Self { collector }
    }
}

impl<S: MetricSource> FrameSource for DashWidget<S> {
    fn tick(&mut self) -> FrameView {
        let cpu = self.collector.cpu_sample();
        let mem = self.collector.mem_sample();
        let home = self.collector.home_usage();
        let totals = self.collector.net_totals();
        let uptime = self.collector.uptime();
        view::dashboard::build(&cpu, &mem, home.as_ref(), &totals, uptime).with_footer(EXIT_HINT)
    }
}

pub struct StopwatchWidget {
    /// Set on the first tick, so timing starts when the zero frame is drawn.
    start: Option<Instant>,
    numbers: bool,
}

impl StopwatchWidget {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            start: None,
            numbers: config.numbers,
        }
    }
}

impl FrameSource for StopwatchWidget {
    fn tick(&mut self) -> FrameView {
        match self.start {
            None => {
                self.start = Some(Instant::now());
                view::stopwatch::initial(self.numbers)
            }
            Some(start) => view::stopwatch::build(start.elapsed().as_secs_f64(), self.numbers),
        }
    }
}

pub struct TimerWidget {
    /// Set on the first tick; the first frame is the whole-second display.
    start: Option<Instant>,
    total_seconds: u64,
    finished: bool,
}

impl TimerWidget {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            start: None,
            total_seconds: config.total_seconds,
            finished: false,
        }
    }

    /// Countdown frame for a given elapsed time. Marks the widget finished
    /// once the remaining time reaches zero; the zero frame is still drawn.
    fn frame_at(&mut self, elapsed_secs: f64) -> FrameView {
        let remaining = self.total_seconds as f64 - elapsed_secs;
        if remaining <= 0.0 {
            self.finished = true;
            view::timer::build(0.0)
        } else {
            view::timer::build(remaining)
        }
    }
}

impl FrameSource for TimerWidget {
    fn tick(&mut self) -> FrameView {
        match self.start {
            None => {
                self.start = Some(Instant::now());
                view::timer::initial(self.total_seconds)
            }
            Some(start) => self.frame_at(start.elapsed().as_secs_f64()),
        }
    }

    fn finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockSource;
    use crate::config::RunConfig;

    #[test]
    fn test_timer_finishes_at_total() {
        let mut timer = TimerWidget::new(&RunConfig::timer(5, None, None));
        let frame = timer.frame_at(4.99);
        assert!(!timer.finished());
        assert_eq!(frame.first_line(), Some("00:00:00")); // 0.01s left rounds down
        let frame = timer.frame_at(5.0);
        assert!(timer.finished());
        assert_eq!(frame.first_line(), Some("00:00:00"));
    }

    #[test]
    fn test_timer_never_displays_negative() {
        let mut timer = TimerWidget::new(&RunConfig::timer(2, None, None));
        let frame = timer.frame_at(10.0);
        assert_eq!(frame.first_line(), Some("00:00:00"));
        assert!(timer.finished());
    }

    #[test]
    fn test_timer_first_tick_is_whole_second_display() {
        let mut timer = TimerWidget::new(&RunConfig::timer(3700, None, None));
        assert_eq!(timer.tick().first_line(), Some("01:01:40"));
        // second tick switches to the countdown format
        assert!(timer.tick().first_line().unwrap().starts_with("61:"));
    }

    #[test]
    fn test_stopwatch_first_tick_is_zero_frame() {
        let mut sw = StopwatchWidget::new(&RunConfig::stopwatch(None, true));
        assert_eq!(sw.tick().first_line(), Some("00:00:00"));
        let mut sw = StopwatchWidget::new(&RunConfig::stopwatch(None, false));
        assert_eq!(sw.tick().first_line(), Some("0m 0s 0ms"));
    }

    #[test]
    fn test_timer_counts_down() {
        let mut timer = TimerWidget::new(&RunConfig::timer(90, None, None));
        let frame = timer.frame_at(0.0);
        assert_eq!(frame.first_line(), Some("01:30:00"));
        assert!(!timer.finished());
    }

    #[test]
    fn test_metric_widgets_carry_exit_hint() {
        let mut widget = RamWidget::new(Collector::new(MockSource::typical_system()));
        let frame = widget.tick();
        assert_eq!(frame.footer.as_deref(), Some(EXIT_HINT));
    }

    #[test]
    fn test_net_widget_first_tick_zero_rates() {
        let mut widget = NetWidget::new(Collector::new(MockSource::typical_system()));
        let frame = widget.tick();
        let row = &frame.panels[0].rows[0];
        assert_eq!(row.cells[6].text, "    0 B/s");
        assert_eq!(row.cells[7].text, "    0 B/s");
    }
}
