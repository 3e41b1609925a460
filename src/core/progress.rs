use serde::{Deserialize, Serialize};

/// Progress message type
#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    /// Emitted once before the first file, with zero completed
    Start,
    Progress,
    /// Every file of the batch has been written
    Complete,
}

/// Progress of one batch run as seen by the caller.
///
/// Only counts cross from the worker to the caller; pixel data never does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Progress type (start, progress, complete)
    pub progress_type: ProgressType,
    /// Number of completed files
    pub completed_tasks: usize,
    /// Total number of files in the batch
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Current status message
    pub status: String,
}

impl Progress {
    /// Builds the progress value for a `(completed, total)` pair.
    pub fn new(completed_tasks: usize, total_tasks: usize) -> Self {
        debug_assert!(completed_tasks <= total_tasks);

        let progress_type = if completed_tasks == 0 {
            ProgressType::Start
        } else if completed_tasks >= total_tasks {
            ProgressType::Complete
        } else {
            ProgressType::Progress
        };

        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            0
        };

        let status = match progress_type {
            ProgressType::Start => format!("Starting {total_tasks} files"),
            ProgressType::Progress => format!("{completed_tasks}/{total_tasks} files"),
            ProgressType::Complete => format!("All {total_tasks} files written"),
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            status,
        }
    }

    /// The `(completed, total)` pair this value was built from.
    pub fn counts(&self) -> (usize, usize) {
        (self.completed_tasks, self.total_tasks)
    }
}
