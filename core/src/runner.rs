//! The counting loop.
//!
//! Each tick increments the counter, writes `Counter: <n>`, flushes, and then
//! sleeps for the tick interval before checking the bound again:
//!
//! ```text
//! while bound.allows(counter) {
//!     counter += 1 -> "Counter: {counter}" -> sleep(delay)
//! }
//! "End long running app"
//! ```

use std::io::{self, Write};
use std::time::Duration;

use longrun_config::Bound;
use tokio::time::sleep;

/// First line written before the bound is even read.
pub const START_MARKER: &str = "Start long running app";
/// Last line, only reached when a finite bound is met.
pub const END_MARKER: &str = "End long running app";
/// Delay after every counter line.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1_000);

pub fn write_start_marker<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{START_MARKER}")?;
    out.flush()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of `Counter:` lines written.
    pub iterations: i64,
}

pub struct Runner<W> {
    bound: Bound,
    out: W,
    delay: Duration,
}

impl<W: Write> Runner<W> {
    #[must_use]
    pub fn new(bound: Bound, out: W) -> Self {
        Self {
            bound,
            out,
            delay: TICK_INTERVAL,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub const fn bound(&self) -> Bound {
        self.bound
    }

    /// Runs until the bound is met. Never returns for [`Bound::Unbounded`]
    /// unless writing to the output fails.
    pub async fn run(mut self) -> io::Result<RunSummary> {
        tracing::info!(
            bound = %self.bound,
            delay_ms = self.delay.as_millis() as u64,
            "Runner started"
        );

        let mut counter: i64 = 0;
        while self.bound.allows(counter) {
            counter = counter.saturating_add(1);
            writeln!(self.out, "Counter: {counter}")?;
            self.out.flush()?;
            tracing::debug!(counter, "Tick");

            sleep(self.delay).await;
        }

        writeln!(self.out, "{END_MARKER}")?;
        self.out.flush()?;
        tracing::info!(iterations = counter, "Runner finished");

        Ok(RunSummary {
            iterations: counter,
        })
    }
}
