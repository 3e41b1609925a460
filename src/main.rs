// Entry point for the jpeg-quality command-line tool.
// The library crate holds everything else; this file only wires it together.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use jpeg_quality_lib::commands::{Cli, exit_code, run_batch, run_interactive};
use jpeg_quality_lib::{AppState, BatchProcessor, JsonQualityStore};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("=== jpeg-quality starting ===");

    let settings_path = match cli.settings {
        Some(path) => path,
        None => JsonQualityStore::default_path()?,
    };
    let store = JsonQualityStore::open(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;
    debug!("Settings loaded from {}", store.path().display());

    let state = AppState::new(Arc::new(store), BatchProcessor::new());

    if let Some(quality) = cli.quality {
        state.set_quality(quality).context("saving quality")?;
    }

    if cli.files.is_empty() {
        run_interactive(&state, BufReader::new(tokio::io::stdin())).await?;
        info!("Bye");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = run_batch(&state, cli.files)
        .await
        .context("batch not started")?;

    Ok(exit_code(&outcome))
}
