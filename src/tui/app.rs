//! The refresh loop.
//!
//! One reusable control structure drives every widget: build a frame, draw
//! it into a live terminal region, wait for the next tick, repeat until
//! cancelled or until the widget reaches its natural end. The exit reason is
//! reported to the caller; anything that must only happen after natural
//! completion (the timer's end message) keys off it.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::event::{Event, EventHandler};
use super::render::render;
use super::widgets::FrameSource;

/// Why the loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Stopped by the user. Post-loop steps must not run.
    Cancelled,
    /// The widget reached its natural terminal state (countdown expiry) or
    /// rendered its single one-shot frame.
    Completed,
}

/// Cooperative cancellation flag, shared with the signal handler.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// `q`, `Esc` and `Ctrl-C` stop the loop. Raw mode swallows SIGINT, so the
/// interrupt key arrives here as a key event.
fn is_cancel_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// The refresh loop for one widget invocation.
pub struct App {
    source: Box<dyn FrameSource>,
    tick_rate: Duration,
    cancel: CancelToken,
}

impl App {
    pub fn new(source: Box<dyn FrameSource>, tick_rate: Duration, cancel: CancelToken) -> Self {
        Self {
            source,
            tick_rate,
            cancel,
        }
    }

    /// One-shot mode: render a single frame as plain text, no terminal
    /// takeover, no loop.
    pub fn run_once(mut source: Box<dyn FrameSource>) -> String {
        source.tick().to_plain_text()
    }

    /// Runs until cancellation or natural completion. The terminal is
    /// restored on every exit path.
    pub fn run(mut self) -> io::Result<LoopExit> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            // raw mode is already on; undo it before surfacing the error
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e);
            }
        };

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<LoopExit> {
        let events = EventHandler::new(self.tick_rate);

        // Initial frame before the first tick elapses.
        let mut frame_view = self.source.tick();

        loop {
            terminal.draw(|frame| render(frame, &frame_view))?;

            // The finishing tick's frame has been drawn; now stop.
            if self.source.finished() {
                return Ok(LoopExit::Completed);
            }
            if self.cancel.is_cancelled() {
                return Ok(LoopExit::Cancelled);
            }

            match events.next() {
                Ok(Event::Tick) => frame_view = self.source.tick(),
                Ok(Event::Key(key)) if is_cancel_key(&key) => return Ok(LoopExit::Cancelled),
                Ok(Event::Key(_)) | Ok(Event::Resize) => {}
                Err(_) => return Ok(LoopExit::Cancelled),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{Collector, MockSource};
    use crate::tui::widgets::RamWidget;

    #[test]
    fn test_cancel_token_flips_once() {
        let token = CancelToken::new();
        let shared = token.clone();
        assert!(!token.is_cancelled());
        shared.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_keys() {
        let press = |code, modifiers| KeyEvent::new(code, modifiers);
        assert!(is_cancel_key(&press(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(is_cancel_key(&press(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_cancel_key(&press(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_cancel_key(&press(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!is_cancel_key(&press(
            KeyCode::Char('x'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_run_once_renders_exactly_one_frame() {
        let widget = RamWidget::new(Collector::new(MockSource::typical_system()));
        let text = App::run_once(Box::new(widget));
        assert!(text.contains("RAM Usage"));
        assert!(text.contains("Total"));
        // the live-mode exit hint is a footer concern, absent in one-shot
        assert!(!text.contains("Press ^C"));
    }
}
