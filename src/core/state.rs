//! Application state shared by the front-ends.

use std::sync::Arc;
use tracing::info;
use crate::core::Quality;
use crate::processing::BatchProcessor;
use crate::settings::QualityStore;
use crate::utils::SettingsError;
use crate::worker::BatchController;

/// Holds the quality store and the single batch controller.
///
/// Cheap to clone; clones share the same controller, so the one-run-at-a-time
/// rule holds across all of them.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn QualityStore>,
    controller: BatchController,
}

impl AppState {
    pub fn new(store: Arc<dyn QualityStore>, processor: BatchProcessor) -> Self {
        let controller = BatchController::new(processor, store.clone());
        Self { store, controller }
    }

    /// Currently stored quality.
    pub fn quality(&self) -> Quality {
        self.store.quality()
    }

    /// Persists a new quality. Runs already in progress keep theirs.
    pub fn set_quality(&self, quality: Quality) -> Result<(), SettingsError> {
        self.store.set_quality(quality)?;
        info!("Quality set to {}", quality);
        Ok(())
    }

    pub fn controller(&self) -> &BatchController {
        &self.controller
    }
}
