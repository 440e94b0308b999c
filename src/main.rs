//! bowlscore - Ten-pin bowling score calculator

use anyhow::Result;
use bowlscore::cli;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<ExitCode> {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return Ok(code),
    };

    // Initialize logging (RUST_LOG overrides --log-level)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
