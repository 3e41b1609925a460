//! Persisted user settings.

mod store;

pub use store::{JsonQualityStore, MemoryQualityStore, QualityStore};
