//! Command line entry point for `tracelift`.
//!
//! Loads a trace capture, runs the synchronous decode over it, and writes
//! the reconstructed image. An empty result is reported here, because the
//! decoder itself treats it as an ordinary outcome rather than an error.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracelift::{reassemble, storage};

#[tokio::main]
async fn main() -> ExitCode {
    // Enable structured logging for the tool and anything it pulls in.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &cli::Cli) -> Result<(), storage::StorageError> {
    let trace = storage::read_trace(&cli.trace).await?;
    let image = reassemble(&trace);

    if image.is_empty() {
        log::warn!(
            "no matching transfer data found in {}; nothing written",
            cli.trace.display()
        );
        return Ok(());
    }

    storage::write_image(&cli.output, &image).await?;
    tracing::info!(
        bytes = image.len(),
        output = %cli.output.display(),
        "image reconstructed"
    );
    Ok(())
}
