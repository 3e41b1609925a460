//! Worker <-> caller contract: progress out, cancellation in.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use crate::core::Progress;

/// Cooperative cancellation request shared between caller and worker.
///
/// The worker checks it between files only.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Worker-side end of the progress channel.
///
/// Sending never blocks and never fails the run: a caller that stopped
/// listening simply misses updates.
#[derive(Debug, Clone)]
pub struct ProgressSender(mpsc::UnboundedSender<Progress>);

impl ProgressSender {
    pub fn send(&self, completed: usize, total: usize) {
        let _ = self.0.send(Progress::new(completed, total));
    }
}

/// Caller-side end of the progress channel.
pub type ProgressReceiver = mpsc::UnboundedReceiver<Progress>;

pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ProgressSender(tx), rx)
}
