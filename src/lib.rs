// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod settings;
pub mod processing;
pub mod worker;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{AppState, FileTask, Progress, ProgressType, Quality, RecompressResult, RunOutcome};
pub use processing::{BatchProcessor, ImageJpegCodec, JpegCodec, destination, is_valid_batch};
pub use settings::{JsonQualityStore, MemoryQualityStore, QualityStore};
pub use utils::{AppError, AppResult, ErrorKind, RecompressError};
pub use worker::{BatchController, BatchHandle, CancellationFlag, SubmitError};
