//! vitae CLI binary entry point
//!
//! This is a thin wrapper that installs logging and calls the library's
//! `run_cli()` function.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vitae_cli::run_cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    run_cli()
}
