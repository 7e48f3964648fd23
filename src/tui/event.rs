//! Input and tick events for the refresh loop.
//!
//! A background thread owns terminal input: it polls crossterm for the time
//! remaining until the next sampling deadline and forwards keys and resizes
//! as they arrive. Ticks fire on a fixed schedule, so a burst of input never
//! delays the next sample.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Refresh loop events.
#[derive(Debug)]
pub enum Event {
    /// Sampling deadline reached: build and draw the next frame.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize,
}

/// Fixed-cadence tick deadlines.
///
/// Input arriving mid-interval shrinks the next poll timeout toward the same
/// deadline instead of restarting it; the deadline only moves forward when a
/// tick actually fires.
struct TickSchedule {
    next: Instant,
    interval: Duration,
}

impl TickSchedule {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            next: now + interval,
            interval,
        }
    }

    /// Time left until the deadline, zero once it has passed.
    fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    fn due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Moves the deadline one interval forward. After a stall the deadline
    /// skips ahead, so a late tick is not followed by a catch-up burst.
    fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }
}

/// Owns the input-polling thread and hands the loop one event at a time.
///
/// Dropping the handler closes the channel, which stops the thread on its
/// next send.
pub struct EventHandler {
    rx: Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut schedule = TickSchedule::new(tick_rate, Instant::now());
            loop {
                let timeout = schedule.timeout(Instant::now());
                if event::poll(timeout).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let forwarded = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                            _ => None,
                        };
                        if let Some(event) = forwarded {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                }
                if schedule.due(Instant::now()) {
                    schedule.advance(Instant::now());
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx }
    }

    /// Blocks until the next event. Errors once the polling thread is gone.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_input_polls_do_not_postpone_the_deadline() {
        let t0 = Instant::now();
        let schedule = TickSchedule::new(100 * MS, t0);
        // successive timeout queries, as issued after each input event,
        // shrink toward the same deadline
        assert_eq!(schedule.timeout(t0 + 30 * MS), 70 * MS);
        assert_eq!(schedule.timeout(t0 + 80 * MS), 20 * MS);
        assert_eq!(schedule.timeout(t0 + 150 * MS), Duration::ZERO);
        assert!(!schedule.due(t0 + 99 * MS));
        assert!(schedule.due(t0 + 100 * MS));
    }

    #[test]
    fn test_advance_keeps_fixed_cadence() {
        let t0 = Instant::now();
        let mut schedule = TickSchedule::new(100 * MS, t0);
        schedule.advance(t0 + 100 * MS);
        assert!(!schedule.due(t0 + 150 * MS));
        assert!(schedule.due(t0 + 200 * MS));
    }

    #[test]
    fn test_advance_after_stall_skips_ahead() {
        let t0 = Instant::now();
        let mut schedule = TickSchedule::new(100 * MS, t0);
        // tick fires 400 ms late: the next deadline is one interval from
        // now, not four overdue ticks in a row
        schedule.advance(t0 + 500 * MS);
        assert_eq!(schedule.timeout(t0 + 500 * MS), 100 * MS);
    }
}
