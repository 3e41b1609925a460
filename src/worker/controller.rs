//! Foreground side of batch processing.
//!
//! [`BatchController`] owns the "one run at a time" rule. Submissions are
//! validated up front, quality is snapshotted once, and the run itself goes to
//! tokio's blocking pool so the submitting task never waits on file or codec
//! work.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{Progress, Quality, RunOutcome};
use crate::processing::{BatchProcessor, is_valid_batch, validate_batch};
use crate::settings::QualityStore;
use crate::utils::RecompressError;

use super::channel::{CancellationFlag, ProgressReceiver, progress_channel};
use super::error::{SubmitError, SubmitResult};

/// Clears the busy flag when the worker finishes, panics included.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Accepts batches and runs at most one of them at a time.
#[derive(Clone)]
pub struct BatchController {
    processor: BatchProcessor,
    store: Arc<dyn QualityStore>,
    busy: Arc<AtomicBool>,
}

impl BatchController {
    pub fn new(processor: BatchProcessor, store: Arc<dyn QualityStore>) -> Self {
        Self {
            processor,
            store,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a run is in progress.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Whether a drop of `paths` would be accepted right now.
    ///
    /// Cheap enough to call on every hover event: no file system access.
    pub fn accepts(&self, paths: &[PathBuf]) -> bool {
        !self.is_busy() && is_valid_batch(paths)
    }

    /// Starts recompressing `files` at the currently stored quality.
    ///
    /// Must be called from within a tokio runtime. A submission while another
    /// run is active is rejected with [`SubmitError::Busy`] and touches nothing.
    pub fn submit(&self, files: Vec<PathBuf>) -> SubmitResult<BatchHandle> {
        self.submit_with_quality(files, self.store.quality())
    }

    /// Starts recompressing `files` at an explicit quality.
    pub fn submit_with_quality(&self, files: Vec<PathBuf>, quality: Quality) -> SubmitResult<BatchHandle> {
        if files.is_empty() {
            return Err(SubmitError::Empty);
        }
        validate_batch(&files)?;

        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Ignoring batch of {} files: a run is active", files.len());
            return Err(SubmitError::Busy);
        }
        let guard = BusyGuard(self.busy.clone());

        let total = files.len();
        let (progress_tx, progress_rx) = progress_channel();
        let cancel = CancellationFlag::new();
        let worker_cancel = cancel.clone();
        let processor = self.processor.clone();

        info!("Starting batch of {} files at quality {}", total, quality);
        let worker = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            processor.run(
                &files,
                quality,
                |completed, total| progress_tx.send(completed, total),
                || worker_cancel.is_cancelled(),
            )
        });

        Ok(BatchHandle {
            total,
            quality,
            progress: progress_rx,
            cancel,
            worker,
        })
    }
}

/// Caller's view of one active run.
pub struct BatchHandle {
    total: usize,
    quality: Quality,
    progress: ProgressReceiver,
    cancel: CancellationFlag,
    worker: JoinHandle<RunOutcome>,
}

impl BatchHandle {
    pub fn total(&self) -> usize {
        self.total
    }

    /// Quality the run was started with.
    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Asks the worker to stop before its next file.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A flag that cancels this run, usable after the handle moved elsewhere.
    pub fn cancellation(&self) -> CancellationFlag {
        self.cancel.clone()
    }

    /// Next progress update, `None` once the worker has finished and all
    /// updates were drained.
    pub async fn next_progress(&mut self) -> Option<Progress> {
        self.progress.recv().await
    }

    /// Waits for the run to end.
    ///
    /// A worker that panicked is reported as an IO failure at the first file
    /// that has not been confirmed through the progress channel.
    pub async fn wait(mut self) -> RunOutcome {
        let result = (&mut self.worker).await;
        match result {
            Ok(outcome) => outcome,
            Err(join_error) => {
                let mut index = 0;
                while let Ok(progress) = self.progress.try_recv() {
                    index = progress.completed_tasks;
                }
                warn!("Batch worker died: {}", join_error);
                RunOutcome::Failed {
                    index,
                    error: RecompressError::Io {
                        path: PathBuf::new(),
                        message: format!("worker panicked: {join_error}"),
                    },
                }
            }
        }
    }
}
