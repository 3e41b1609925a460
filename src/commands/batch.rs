//! One-shot batch from startup arguments.

use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::core::{AppState, RunOutcome};
use crate::utils::AppResult;
use crate::worker::BatchHandle;

/// Exit status for a cancelled run, as for SIGINT.
const EXIT_CANCELLED: u8 = 130;

/// Runs `files` as one batch at the stored quality and waits for it.
///
/// Ctrl-C asks the worker to stop after the file it is on. A rejected
/// submission surfaces as [`AppError::Submit`](crate::utils::AppError::Submit).
pub async fn run_batch(state: &AppState, files: Vec<PathBuf>) -> AppResult<RunOutcome> {
    let handle = state.controller().submit(files)?;

    let cancel = handle.cancellation();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current file");
            cancel.cancel();
        }
    });

    let outcome = report_until_done(handle).await;
    interrupt.abort();

    Ok(outcome)
}

/// Logs progress until the run ends, then logs and returns its outcome.
pub(crate) async fn report_until_done(mut handle: BatchHandle) -> RunOutcome {
    while let Some(progress) = handle.next_progress().await {
        info!("[{:>3}%] {}", progress.progress_percentage, progress.status);
    }

    let outcome = handle.wait().await;
    log_outcome(&outcome);
    outcome
}

fn log_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Completed { total } => info!("Done: {} files recompressed", total),
        RunOutcome::Cancelled { completed, total } => {
            warn!("Cancelled: {}/{} files recompressed", completed, total)
        }
        RunOutcome::Failed { index, error } => {
            warn!("Failed at file {}: {}", index + 1, error)
        }
    }
}

/// Process exit status for a finished run.
pub fn exit_code(outcome: &RunOutcome) -> ExitCode {
    match outcome {
        RunOutcome::Completed { .. } => ExitCode::SUCCESS,
        RunOutcome::Cancelled { .. } => ExitCode::from(EXIT_CANCELLED),
        RunOutcome::Failed { .. } => ExitCode::FAILURE,
    }
}
