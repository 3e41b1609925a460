//! Error types for JPEG recompression.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use serde::Serialize;
use crate::worker::SubmitError;

/// Coarse classification of a per-file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Source vanished between validation and processing
    FileNotFound,
    /// Read, write or permission failure
    Io,
    /// Malformed or unsupported JPEG content
    Codec,
}

/// Failure while recompressing a single file of a batch.
///
/// Every variant is fatal to the run that produced it; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecompressError {
    /// Source file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error reading the source or writing the destination
    #[error("IO error on {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Source could not be decoded or pixels could not be encoded
    #[error("Codec error on {path}: {message}")]
    Codec { path: PathBuf, message: String },
}

impl RecompressError {
    pub fn io(path: impl Into<PathBuf>, err: impl ToString) -> Self {
        Self::Io { path: path.into(), message: err.to_string() }
    }

    pub fn codec(path: impl Into<PathBuf>, err: impl ToString) -> Self {
        Self::Codec { path: path.into(), message: err.to_string() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound(_) => ErrorKind::FileNotFound,
            Self::Io { .. } => ErrorKind::Io,
            Self::Codec { .. } => ErrorKind::Codec,
        }
    }

    /// The file the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotFound(path) => path,
            Self::Io { path, .. } | Self::Codec { path, .. } => path,
        }
    }
}

/// Raw codec failure, before it is attached to a file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CodecError(pub String);

impl From<image::ImageError> for CodecError {
    fn from(err: image::ImageError) -> Self {
        Self(err.to_string())
    }
}

/// Validation errors for candidate batches and settings.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// Path does not carry a .jpg/.jpeg extension
    #[error("Not a JPEG file: {0}")]
    NotJpeg(PathBuf),

    /// Quality outside 0..=100
    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    QualityOutOfRange(i64),

    /// Quality text that is not an integer
    #[error("Invalid quality value: {0:?}. Must be an integer")]
    QualityNotNumeric(String),
}

/// Failures loading or saving the persisted settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No settings location available on this platform")]
    NoLocation,
}

/// Main error type for the application.
///
/// Front-ends convert everything they surface into this type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission rejected: {0}")]
    Submit(#[from] SubmitError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Recompression failed: {0}")]
    Recompress(#[from] RecompressError),
}

/// Convenience result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
