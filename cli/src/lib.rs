//! Milk command-line application.
//!
//! Thin shell that parses arguments, sets up logging and dispatches to the
//! subcommand handlers. Scanning logic lives in the `crates/` directory.

pub mod args;
pub mod commands;

use args::{Cli, Commands};

/// Default log filter when `RUST_LOG` is not set.
fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "warn,milk=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so the progress line and report on stdout stay clean.
pub fn init_tracing(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Run the selected subcommand and return the process exit code.
pub async fn run(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Numbers(args) => commands::numbers::handle(cli, args).await,
    }
}
