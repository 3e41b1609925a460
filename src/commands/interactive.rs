//! Line-oriented stand-in for the drop surface.
//!
//! Paths accumulate until an empty line "drops" them. A drop is accepted only
//! if every path is a JPEG and no run is active; otherwise it is ignored.

use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::core::{AppState, Quality, RunOutcome};
use crate::utils::AppResult;
use crate::worker::{CancellationFlag, SubmitError};

use super::batch::report_until_done;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A path to add to the pending drop
    Path(PathBuf),
    /// Empty line: submit the pending paths
    Drop,
    /// `:quality N`
    Quality(String),
    Cancel,
    /// Block until the active run ends
    Wait,
    Status,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Drop;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Input::Path(PathBuf::from(line));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "quality" | "q" => Input::Quality(arg.to_string()),
        "cancel" => Input::Cancel,
        "wait" => Input::Wait,
        "status" => Input::Status,
        "quit" | "exit" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

struct ActiveRun {
    cancel: CancellationFlag,
    reporter: JoinHandle<RunOutcome>,
}

impl ActiveRun {
    async fn finish(self) -> Option<RunOutcome> {
        match self.reporter.await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!("Progress reporter stopped: {}", e);
                None
            }
        }
    }
}

/// Reads drops and commands from `reader` until `:quit` or end of input.
///
/// Leaving while a run is active cancels it and waits for the file in flight.
/// Returns the outcome of every run started during the session, in order.
pub async fn run_interactive<R>(state: &AppState, reader: R) -> AppResult<Vec<RunOutcome>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut pending: Vec<PathBuf> = Vec::new();
    let mut active: Option<ActiveRun> = None;
    let mut outcomes = Vec::new();

    info!("Quality {}. Enter JPEG paths, then an empty line to start.", state.quality());

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Input::Path(path) => pending.push(path),
            Input::Drop => {
                if pending.is_empty() {
                    continue;
                }
                let files = std::mem::take(&mut pending);
                match state.controller().submit(files) {
                    Ok(handle) => {
                        if let Some(previous) = active.take() {
                            outcomes.extend(previous.finish().await);
                        }
                        active = Some(ActiveRun {
                            cancel: handle.cancellation(),
                            reporter: tokio::spawn(report_until_done(handle)),
                        });
                    }
                    Err(SubmitError::Busy) => info!("A batch is running; drop ignored"),
                    Err(e) => warn!("Drop rejected: {}", e),
                }
            }
            Input::Quality(text) => match text.parse::<Quality>() {
                Ok(quality) => {
                    if let Err(e) = state.set_quality(quality) {
                        warn!("Could not save quality: {}", e);
                    }
                }
                Err(e) => warn!("{}", e),
            },
            Input::Cancel => match &active {
                Some(run) if state.controller().is_busy() => {
                    info!("Cancelling after the current file");
                    run.cancel.cancel();
                }
                _ => info!("Nothing to cancel"),
            },
            Input::Wait => {
                if let Some(run) = active.take() {
                    outcomes.extend(run.finish().await);
                }
            }
            Input::Status => info!(
                "Quality {}, {}, {} paths pending",
                state.quality(),
                if state.controller().is_busy() { "running" } else { "idle" },
                pending.len()
            ),
            Input::Quit => break,
            Input::Unknown(text) => warn!("Unknown command: {}", text),
        }
    }

    if let Some(run) = active.take() {
        if state.controller().is_busy() {
            run.cancel.cancel();
        }
        outcomes.extend(run.finish().await);
    }

    Ok(outcomes)
}
