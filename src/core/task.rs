//! File task definition.

use std::path::{Path, PathBuf};
use crate::core::Quality;
use crate::processing::naming;

/// One file of a batch.
///
/// Only the source and quality are stored; the destination is recomputed on
/// demand so it can never drift from the naming rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    source: PathBuf,
    quality: Quality,
}

impl FileTask {
    pub fn new(source: impl Into<PathBuf>, quality: Quality) -> Self {
        Self {
            source: source.into(),
            quality,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Sibling path the recompressed output is written to.
    pub fn destination(&self) -> PathBuf {
        naming::destination(&self.source, self.quality)
    }
}
