//! longrun - Binary entry point.
//!
//! ```text
//! main() -> "Start long running app"
//!        -> Bound::from_env()          (max_count)
//!        -> Runner::run()              Counter: 1, 2, ... one per second
//!        -> "End long running app"     (finite bound only)
//! ```
//!
//! Stdout carries only the lines above. Diagnostics from `tracing` go to
//! stderr and are filtered with `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use std::io::{self, IsTerminal, stdout};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use longrun_config::Bound;
use longrun_core::{Runner, write_start_marker};

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let mut out = stdout().lock();
    write_start_marker(&mut out).context("failed to write start marker")?;

    let bound = Bound::from_env()
        .inspect_err(|err| tracing::error!(%err, "Cannot read iteration bound"))
        .context("failed to load iteration bound")?;

    let runner = Runner::new(bound, out);
    tracing::debug!(
        unbounded = runner.bound().is_unbounded(),
        bound = %runner.bound(),
        "Starting runner"
    );

    runner
        .run()
        .await
        .context("failed to write counter output")?;

    Ok(())
}
