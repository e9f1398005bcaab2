// Persistent key-value store for reusing credentials across runs.
// Entries are JSON values stamped with the time they were saved.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// A stored value with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    pub value: Value,
    pub saved_at: DateTime<Utc>,
}

/// JSON file backed key-value store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config directory, if one can be determined.
    pub fn open_default() -> Option<Self> {
        super::paths::store_path().map(Self::open)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the value under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entry(key)? {
            Some(entry) => Ok(Some(serde_json::from_value(entry.value)?)),
            None => Ok(None),
        }
    }

    pub fn entry(&self, key: &str) -> Result<Option<StoredEntry>> {
        Ok(self.load()?.remove(key))
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(
            key.to_string(),
            StoredEntry {
                value: serde_json::to_value(value)?,
                saved_at: Utc::now(),
            },
        );
        self.save(&entries)?;
        debug!(key, path = %self.path.display(), "saved store entry");
        Ok(())
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut entries = self.load()?;
        let removed = entries.remove(key).is_some();
        if removed {
            self.save(&entries)?;
        }
        Ok(removed)
    }

    fn load(&self) -> Result<BTreeMap<String, StoredEntry>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, entries: &BTreeMap<String, StoredEntry>) -> Result<()> {
        // The config dir may not exist on first use.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;

        // Readers see either the old file or the new one, never a partial write.
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
