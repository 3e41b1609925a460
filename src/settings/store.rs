//! Persisted quality setting.
//!
//! The batch pipeline never reads this directly: the controller takes one
//! snapshot per submission and passes it into the run.

use std::path::{Path, PathBuf};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::Quality;
use crate::utils::SettingsError;

/// Get/set access to the last-used quality.
pub trait QualityStore: Send + Sync {
    /// Current quality, [`Quality::DEFAULT`] when nothing was stored.
    fn quality(&self) -> Quality;

    /// Stores `quality` for this and later sessions.
    fn set_quality(&self, quality: Quality) -> Result<(), SettingsError>;
}

/// On-disk layout of the settings file.
///
/// Unknown keys are carried through untouched when the file is rewritten.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quality: Option<Quality>,
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

/// Quality store backed by a small JSON file.
pub struct JsonQualityStore {
    path: PathBuf,
    settings: Mutex<SettingsFile>,
}

impl JsonQualityStore {
    pub const FILE_NAME: &'static str = "settings.json";

    /// Per-user location: `<config dir>/jpeg-quality/settings.json`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join("jpeg-quality").join(Self::FILE_NAME))
            .ok_or(SettingsError::NoLocation)
    }

    /// Loads the store from `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let settings = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                SettingsFile::default()
            }
            Err(source) => return Err(SettingsError::Io { path, source }),
        };

        Ok(Self {
            path,
            settings: Mutex::new(settings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, settings: &SettingsFile) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_vec_pretty(settings).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(io_err)
    }
}

impl QualityStore for JsonQualityStore {
    fn quality(&self) -> Quality {
        self.settings.lock().quality.unwrap_or_default()
    }

    fn set_quality(&self, quality: Quality) -> Result<(), SettingsError> {
        let mut settings = self.settings.lock();
        let previous = settings.quality.replace(quality);
        if let Err(e) = self.save(&settings) {
            settings.quality = previous;
            return Err(e);
        }
        debug!("Quality set to {} in {}", quality, self.path.display());
        Ok(())
    }
}

/// Process-local store, nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryQualityStore {
    quality: Mutex<Quality>,
}

impl MemoryQualityStore {
    pub fn new(quality: Quality) -> Self {
        Self {
            quality: Mutex::new(quality),
        }
    }
}

impl QualityStore for MemoryQualityStore {
    fn quality(&self) -> Quality {
        *self.quality.lock()
    }

    fn set_quality(&self, quality: Quality) -> Result<(), SettingsError> {
        *self.quality.lock() = quality;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_defaults_to_sixty() {
        let temp = TempDir::new().unwrap();
        let store = JsonQualityStore::open(temp.path().join("settings.json")).unwrap();
        assert_eq!(store.quality(), Quality::DEFAULT);
        assert!(!store.path().exists());
    }

    #[test]
    fn set_quality_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.json");

        let store = JsonQualityStore::open(&path).unwrap();
        store.set_quality(Quality::new(35).unwrap()).unwrap();

        let reopened = JsonQualityStore::open(&path).unwrap();
        assert_eq!(reopened.quality().value(), 35);
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"theme":"dark","quality":80}"#).unwrap();

        let store = JsonQualityStore::open(&path).unwrap();
        assert_eq!(store.quality().value(), 80);
        store.set_quality(Quality::new(20).unwrap()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["quality"], 20);
    }

    #[test]
    fn out_of_range_file_value_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"quality":140}"#).unwrap();

        assert!(matches!(
            JsonQualityStore::open(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryQualityStore::default();
        assert_eq!(store.quality(), Quality::DEFAULT);
        store.set_quality(Quality::new(95).unwrap()).unwrap();
        assert_eq!(store.quality().value(), 95);
    }
}
