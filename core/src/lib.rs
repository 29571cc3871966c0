//! Core loop for longrun.
//!
//! [`Runner`] prints a 1-based counter once per [`TICK_INTERVAL`] until the
//! configured [`Bound`](longrun_config::Bound) is met. Output goes to any
//! [`std::io::Write`] so the binary can hand it stdout and tests a buffer.

mod runner;

pub use runner::{END_MARKER, RunSummary, Runner, START_MARKER, TICK_INTERVAL, write_start_marker};
