//! Persisted key/value store shared by the scraping context and the review
//! surface.
//!
//! Every write is flushed before the call returns, so a second reader that
//! opens the store afterwards always sees it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// Storage key names.
pub mod keys {
    /// Legacy single-record slot; mirrors dataset index 0.
    pub const FACILITY_DATA: &str = "facilityData";
    pub const LOCATION_DATASETS: &str = "locationDatasets";
    pub const DETECTED_LOCATION_COUNT: &str = "detectedLocationCount";
    pub const CURRENT_LOCATION_INDEX: &str = "currentLocationIndex";
    pub const SOURCE_URL: &str = "sourceUrl";
    pub const SOURCE_NETWORK: &str = "sourceNetwork";
    pub const ENVIRONMENT: &str = "environment";
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<&Value>;

    /// Writes every entry and flushes once.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be written.
    fn set_many(&mut self, entries: Vec<(String, Value)>) -> Result<(), StoreError>;

    /// Removes `keys` (missing keys are ignored) and flushes once.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be written.
    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.set_many(vec![(key.to_string(), value)])
    }
}

/// Reads `key` as `T`. A missing key or JSON `null` is `None`.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the stored value does not fit `T`.
pub fn read<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| StoreError::Decode {
                key: key.to_string(),
                source: e,
            }),
    }
}

/// Serializes `value` into a store entry.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if `value` cannot be represented as JSON.
pub fn entry<T: Serialize>(key: &str, value: &T) -> Result<(String, Value), StoreError> {
    let value = serde_json::to_value(value).map_err(|e| StoreError::Encode {
        key: key.to_string(),
        source: e,
    })?;
    Ok((key.to_string(), value))
}

/// In-process store, used by tests and one-shot commands.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn set_many(&mut self, entries: Vec<(String, Value)>) -> Result<(), StoreError> {
        self.values.extend(entries);
        Ok(())
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.values.remove(*key);
        }
        Ok(())
    }
}

/// Store persisted as one pretty-printed JSON object on disk.
///
/// Reads are served from the snapshot taken at open or at the last write.
/// Each write re-reads the file and applies only its own keys, so handles
/// held by other processes do not lose their updates.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Opens the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, or
    /// [`StoreError::Corrupt`] if it is not a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = load(&path)?;
        tracing::debug!(path = %path.display(), keys = values.len(), "opened store");
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-reads the file, applies `change` and writes the result back.
    fn update(
        &mut self,
        change: impl FnOnce(&mut BTreeMap<String, Value>),
    ) -> Result<(), StoreError> {
        let mut values = load(&self.path)?;
        change(&mut values);
        self.persist(&values)?;
        self.values = values;
        Ok(())
    }

    fn persist(&self, values: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        let io_err = |e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let serialized = serde_json::to_string_pretty(values).map_err(|e| StoreError::Encode {
            key: "*".to_string(),
            source: e,
        })?;
        // Readers never see a half-written file.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, serialized).map_err(io_err)?;
        fs::rename(&staging, &self.path).map_err(io_err)
    }
}

fn load(path: &Path) -> Result<BTreeMap<String, Value>, StoreError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn set_many(&mut self, entries: Vec<(String, Value)>) -> Result<(), StoreError> {
        self.update(|values| values.extend(entries))
    }

    fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        self.update(|values| {
            for key in keys {
                values.remove(*key);
            }
        })
    }
}
