//! vitals - live terminal widgets for host system metrics.
//!
//! Each widget is a standalone refresh loop: read metrics through the
//! [`collector`], shape them into a [`view::FrameView`], draw via [`tui`],
//! sleep, repeat, until interrupted or naturally complete.

pub mod collector;
pub mod config;
pub mod fmt;
pub mod model;
pub mod rates;
pub mod tui;
pub mod view;
