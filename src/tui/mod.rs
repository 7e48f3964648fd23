//! Terminal frontend: refresh loop, event handling, rendering.

mod app;
mod event;
mod render;
mod style;
pub mod widgets;

pub use app::{App, CancelToken, LoopExit};
