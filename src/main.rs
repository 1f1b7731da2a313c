//! Strictly Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod tui;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Log to a file so output never interferes with the alternate screen.
    let log_file = std::fs::File::create("strictly_rewind.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run()
}
