//! Program-wide preferences, a small string key/value store that outlives any one scene.
//!
//! The sky remembers the last skymap it loaded (`skymap`) and reads its initial rotation
//! (`skymapRotation`) from here.

use crate::core::targets::PREFS;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

/// Preference key holding the path of the most recently loaded skymap
pub const SKYMAP: &str = "skymap";
/// Preference key holding the initial skymap rotation (radians) for new skies
pub const SKYMAP_ROTATION: &str = "skymapRotation";

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("could not access preferences file")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("preferences file is not valid")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default)]
pub struct Preferences {
    values: RwLock<BTreeMap<String, String>>,
}

impl Preferences {
    pub fn new() -> Self { Self::default() }

    /// Reads preferences from a JSON file containing a single object of string values
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let values: BTreeMap<String, String> = serde_json::from_str(&text)?;
        debug!(target: PREFS, path = %path.display(), count = values.len(), "loaded preferences");
        Ok(Self {
            values: RwLock::new(values),
        })
    }

    /// Writes all preferences to a JSON file, replacing it if it exists
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PrefsError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(&*self.values.read())?;
        std::fs::write(path, text)?;
        debug!(target: PREFS, path = %path.display(), "saved preferences");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> { self.values.read().get(key).cloned() }

    /// Gets the value for `key`, or `default` if it was never set
    pub fn get_or(&self, key: &str, default: &str) -> String { self.get(key).unwrap_or_else(|| default.to_owned()) }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        let value = value.into();
        trace!(target: PREFS, key, %value, "set preference");
        self.values.write().insert(key.to_owned(), value);
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        trace!(target: PREFS, key, "remove preference");
        self.values.write().remove(key)
    }
}
