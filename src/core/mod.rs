//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Settings and batch controller shared by the front-ends
//! - [`Quality`]: JPEG quality level
//! - [`FileTask`]: One file of a batch and its derived destination
//! - [`Progress`]: Progress tracking for batch operations
//! - [`RunOutcome`]: Terminal state of a batch run

mod progress;
mod quality;
mod state;
mod task;
mod types;

pub use progress::{Progress, ProgressType};
pub use quality::Quality;
pub use state::AppState;
pub use task::FileTask;
pub use types::{RecompressResult, RunOutcome};
