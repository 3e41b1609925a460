use serde::Serialize;
use crate::utils::ValidationError;

/// Reasons a batch submission is turned away before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SubmitError {
    /// Another run is still active; the submission is ignored, not queued
    #[error("A batch is already running")]
    Busy,

    #[error("Batch is empty")]
    Empty,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub type SubmitResult<T> = Result<T, SubmitError>;
