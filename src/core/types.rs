//! Core types for batch outcomes and per-file results.

use std::path::PathBuf;
use serde::Serialize;
use crate::utils::{ErrorKind, RecompressError};

/// Terminal state of one batch run.
///
/// Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RunOutcome {
    /// Every file was recompressed and written
    Completed { total: usize },
    /// Cancellation was observed before file `completed` started
    Cancelled { completed: usize, total: usize },
    /// File `index` failed; files after it were not touched
    Failed { index: usize, error: RecompressError },
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Number of outputs written before the run stopped.
    pub fn completed(&self) -> usize {
        match self {
            Self::Completed { total } => *total,
            Self::Cancelled { completed, .. } => *completed,
            Self::Failed { index, .. } => *index,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Failed { error, .. } => Some(error.kind()),
            _ => None,
        }
    }
}

/// Result of recompressing one file.
///
/// Contains the source and destination along with compression statistics.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecompressResult {
    /// Path to the original input file
    pub source_path: PathBuf,
    /// Path of the written output file
    pub output_path: PathBuf,
    /// Original file size in bytes
    pub original_size: u64,
    /// Output file size in bytes
    pub output_size: u64,
    /// Bytes saved (negative if the file grew)
    pub saved_bytes: i64,
    /// Saved bytes as a percentage of the original size
    pub compression_ratio: f64,
}

impl RecompressResult {
    pub fn new(source_path: PathBuf, output_path: PathBuf, original_size: u64, output_size: u64) -> Self {
        let saved_bytes = original_size as i64 - output_size as i64;
        let compression_ratio = if original_size > 0 {
            saved_bytes as f64 / original_size as f64 * 100.0
        } else {
            0.0
        };

        Self {
            source_path,
            output_path,
            original_size,
            output_size,
            saved_bytes,
            compression_ratio,
        }
    }
}
