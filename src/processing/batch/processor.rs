//! Sequential recompression of one batch.
//!
//! Runs entirely on the calling thread. Files are handled one at a time, in
//! order; cancellation is only looked at between files, so an output that is
//! written at all is always a complete JPEG.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::{FileTask, Quality, RecompressResult, RunOutcome};
use crate::processing::codec::{ImageJpegCodec, JpegCodec};
use crate::utils::{RecompressError, file_name, file_size};

/// Drives decode -> encode -> write for every file of a batch.
#[derive(Clone)]
pub struct BatchProcessor {
    codec: Arc<dyn JpegCodec>,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a processor backed by the `image` crate codec.
    pub fn new() -> Self {
        Self::with_codec(ImageJpegCodec)
    }

    pub fn with_codec(codec: impl JpegCodec + 'static) -> Self {
        Self {
            codec: Arc::new(codec),
        }
    }

    /// Recompresses `files` at `quality`.
    ///
    /// `progress` receives `(completed, total)`: once with zero before the
    /// first file and once after each written file. `is_cancelled` is polled
    /// before each file. The first missing file, IO failure or codec failure
    /// ends the run; later files are never touched.
    pub fn run<P, C>(&self, files: &[PathBuf], quality: Quality, progress: P, is_cancelled: C) -> RunOutcome
    where
        P: FnMut(usize, usize),
        C: Fn() -> bool,
    {
        self.run_with_observer(files, quality, progress, is_cancelled, |_| {})
    }

    /// Same as [`run`](Self::run), additionally handing each file's statistics to `on_file`.
    pub fn run_with_observer<P, C, O>(
        &self,
        files: &[PathBuf],
        quality: Quality,
        mut progress: P,
        is_cancelled: C,
        mut on_file: O,
    ) -> RunOutcome
    where
        P: FnMut(usize, usize),
        C: Fn() -> bool,
        O: FnMut(&RecompressResult),
    {
        let total = files.len();
        info!("Recompressing {} files at quality {}", total, quality);

        let mut completed = 0;
        progress(completed, total);

        for (index, source) in files.iter().enumerate() {
            if is_cancelled() {
                info!("Batch cancelled after {}/{} files", completed, total);
                return RunOutcome::Cancelled { completed, total };
            }

            let task = FileTask::new(source.clone(), quality);
            match self.recompress(&task) {
                Ok(result) => {
                    on_file(&result);
                    completed += 1;
                    progress(completed, total);
                }
                Err(error) => {
                    warn!("Batch stopped at file {} of {}: {}", index + 1, total, error);
                    return RunOutcome::Failed { index, error };
                }
            }
        }

        info!("Batch complete: {} files written", total);
        RunOutcome::Completed { total }
    }

    /// Recompresses one file and writes it next to its source.
    fn recompress(&self, task: &FileTask) -> Result<RecompressResult, RecompressError> {
        let source = task.source();
        match source.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(RecompressError::FileNotFound(source.to_path_buf())),
            Err(e) => return Err(RecompressError::io(source, e)),
        }

        let bytes = std::fs::read(source).map_err(|e| RecompressError::io(source, e))?;
        let original_size = bytes.len() as u64;

        let image = self
            .codec
            .decode(&bytes)
            .map_err(|e| RecompressError::codec(source, e))?;
        drop(bytes);

        debug!(
            "Decoded '{}': {}x{}",
            file_name(source),
            image.width,
            image.height
        );

        let destination = task.destination();
        let encoded = self
            .codec
            .encode(&image, task.quality())
            .map_err(|e| RecompressError::codec(source, e))?;

        // Overwrites whatever sits at the destination
        std::fs::write(&destination, &encoded).map_err(|e| RecompressError::io(&destination, e))?;

        let output_size = file_size(&destination).unwrap_or(encoded.len() as u64);
        let result = RecompressResult::new(source.to_path_buf(), destination, original_size, output_size);

        debug!(
            "'{}' -> '{}': {} bytes saved ({:.1}%)",
            file_name(source),
            file_name(&result.output_path),
            result.saved_bytes,
            result.compression_ratio
        );

        Ok(result)
    }
}
