//! JPEG batch validation.
//!
//! The same predicate decides whether a hovered drop is accepted and whether a
//! dropped batch may run, so it stays pure and cheap: no file system access,
//! one precompiled pattern.

use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use crate::utils::ValidationError;

lazy_static! {
    static ref JPEG_SUFFIX: Regex = Regex::new(r"(?i)\.jpe?g$").expect("static JPEG suffix pattern");
}

/// Whether `path` ends in `.jpg` or `.jpeg`, in any case.
pub fn is_jpeg_path(path: impl AsRef<Path>) -> bool {
    JPEG_SUFFIX.is_match(&path.as_ref().to_string_lossy())
}

/// True iff every path is a JPEG path. Vacuously true for an empty batch.
pub fn is_valid_batch<P: AsRef<Path>>(paths: &[P]) -> bool {
    paths.iter().all(|path| is_jpeg_path(path))
}

/// Like [`is_valid_batch`], but names the first offending path.
pub fn validate_batch<P: AsRef<Path>>(paths: &[P]) -> Result<(), ValidationError> {
    match paths.iter().find(|path| !is_jpeg_path(path)) {
        Some(path) => Err(ValidationError::NotJpeg(path.as_ref().to_path_buf())),
        None => Ok(()),
    }
}
