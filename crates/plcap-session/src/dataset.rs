//! The indexed location dataset for the current browsing session.
//!
//! Three writers share it: the extraction pipeline (bulk overwrite),
//! selection capture (field + explicit index) and the review form (field at
//! the current index). Every mutation is flushed to the backing store before
//! the method returns.

use plcap_core::{Field, LocationRecord};

use crate::error::StoreError;
use crate::store::{entry, keys, read, KeyValueStore};

/// Upper bound on the number of records a dataset may grow to.
pub const MAX_LOCATIONS: usize = 500;

/// Where the dataset's records were captured from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSource {
    pub url: String,
    /// `"Facebook"` / `"LinkedIn"` when captured by the pipeline.
    pub network: Option<String>,
}

#[derive(Debug)]
pub struct LocationDatasetStore<S: KeyValueStore> {
    store: S,
    records: Vec<LocationRecord>,
    detected_count: usize,
    current_index: usize,
}

impl<S: KeyValueStore> LocationDatasetStore<S> {
    /// Loads the dataset persisted in `store`.
    ///
    /// A store that only holds the legacy single-record slot is read as a
    /// one-record dataset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if a persisted key has the wrong shape.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let mut records: Vec<LocationRecord> =
            read(&store, keys::LOCATION_DATASETS)?.unwrap_or_default();
        if records.is_empty() {
            if let Some(legacy) = read::<LocationRecord, _>(&store, keys::FACILITY_DATA)? {
                records.push(legacy);
            }
        }
        let detected_count: usize =
            read(&store, keys::DETECTED_LOCATION_COUNT)?.unwrap_or(records.len());
        let current_index: usize = read(&store, keys::CURRENT_LOCATION_INDEX)?.unwrap_or(0);
        let current_index = if current_index < records.len() { current_index } else { 0 };

        Ok(Self {
            store,
            records,
            detected_count,
            current_index,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn detected_count(&self) -> usize {
        self.detected_count
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The record the review form is editing, if any.
    #[must_use]
    pub fn current(&self) -> Option<&LocationRecord> {
        self.records.get(self.current_index)
    }

    /// The legacy single-record slot as last persisted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the slot has the wrong shape.
    pub fn legacy(&self) -> Result<Option<LocationRecord>, StoreError> {
        read(&self.store, keys::FACILITY_DATA)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the source keys have the wrong shape.
    pub fn source(&self) -> Result<CaptureSource, StoreError> {
        Ok(CaptureSource {
            url: read(&self.store, keys::SOURCE_URL)?.unwrap_or_default(),
            network: read(&self.store, keys::SOURCE_NETWORK)?,
        })
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Grows the dataset with empty records until `index` is valid. Never
    /// shrinks. Persists only when it grew.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index` is not below
    /// [`MAX_LOCATIONS`], or another [`StoreError`] if persisting fails.
    pub fn ensure_capacity(&mut self, index: usize) -> Result<(), StoreError> {
        if self.grow_to(index)? {
            self.persist(false)?;
        }
        Ok(())
    }

    /// Sets `field` of the record at `index`, growing the dataset as needed.
    /// Writing index 0 also refreshes the legacy single-record slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index` is not below
    /// [`MAX_LOCATIONS`], or another [`StoreError`] if persisting fails.
    pub fn write_field(
        &mut self,
        index: usize,
        field: Field,
        value: &str,
    ) -> Result<(), StoreError> {
        self.grow_to(index)?;
        self.records[index].set(field, value.trim());
        tracing::debug!(index, field = field.key(), "wrote location field");
        self.persist(index == 0)
    }

    /// [`Self::write_field`] at the current index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn write_current_field(&mut self, field: Field, value: &str) -> Result<(), StoreError> {
        self.write_field(self.current_index, field, value)
    }

    /// Overwrites the whole dataset with a pipeline result.
    ///
    /// Resets the current index to 0 and sets the detected count to the
    /// number of records. An empty replacement also empties the legacy slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn replace_all(&mut self, records: Vec<LocationRecord>) -> Result<(), StoreError> {
        self.detected_count = records.len();
        self.records = records;
        self.current_index = 0;
        tracing::info!(count = self.detected_count, "replaced location dataset");
        if self.records.is_empty() {
            self.store.remove(&[keys::FACILITY_DATA])?;
        }
        self.persist(!self.records.is_empty())
    }

    /// Points the review form at another location. Data is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] if `index` has no record, or
    /// another [`StoreError`] if persisting fails.
    pub fn switch_current(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.current_index = index;
        let entries = vec![entry(keys::CURRENT_LOCATION_INDEX, &index)?];
        self.store.set_many(entries)
    }

    /// Records where the current dataset came from.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn set_source(&mut self, url: &str, network: Option<&str>) -> Result<(), StoreError> {
        let entries = vec![
            entry(keys::SOURCE_URL, &url)?,
            entry(keys::SOURCE_NETWORK, &network)?,
        ];
        self.store.set_many(entries)
    }

    /// Empties the legacy single-record slot only.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn clear_legacy(&mut self) -> Result<(), StoreError> {
        self.store.remove(&[keys::FACILITY_DATA])
    }

    /// Drops every record and all dataset bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.detected_count = 0;
        self.current_index = 0;
        self.store.remove(&[
            keys::FACILITY_DATA,
            keys::LOCATION_DATASETS,
            keys::DETECTED_LOCATION_COUNT,
            keys::CURRENT_LOCATION_INDEX,
            keys::SOURCE_URL,
            keys::SOURCE_NETWORK,
        ])
    }

    fn grow_to(&mut self, index: usize) -> Result<bool, StoreError> {
        if index < self.records.len() {
            return Ok(false);
        }
        let new_len = index
            .checked_add(1)
            .filter(|len| *len <= MAX_LOCATIONS)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })?;
        self.records.resize_with(new_len, LocationRecord::default);
        self.detected_count = self.detected_count.max(new_len);
        Ok(true)
    }

    fn persist(&mut self, mirror_first: bool) -> Result<(), StoreError> {
        let mut entries = vec![
            entry(keys::LOCATION_DATASETS, &self.records)?,
            entry(keys::DETECTED_LOCATION_COUNT, &self.detected_count)?,
            entry(keys::CURRENT_LOCATION_INDEX, &self.current_index)?,
        ];
        if mirror_first {
            if let Some(first) = self.records.first() {
                entries.push(entry(keys::FACILITY_DATA, first)?);
            }
        }
        self.store.set_many(entries)
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
