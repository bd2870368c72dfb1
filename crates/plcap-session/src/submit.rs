//! Submitting the captured dataset and resetting it afterwards.

use std::time::Duration;

use plcap_registry::{
    submit_all, BulkReport, Receipt, RegistryClient, SubmissionPayload, SubmissionSource,
};

use crate::dataset::LocationDatasetStore;
use crate::error::{SessionError, StoreError};
use crate::store::KeyValueStore;

fn submission_source<S: KeyValueStore>(
    dataset: &LocationDatasetStore<S>,
    base_name: &str,
) -> Result<SubmissionSource, StoreError> {
    let source = dataset.source()?;
    Ok(SubmissionSource::new(
        base_name,
        source.network.as_deref(),
        source.url,
    ))
}

/// Submits the record at the current index.
///
/// On success the legacy single-record slot is cleared; the dataset is
/// kept.
///
/// # Errors
///
/// - [`SessionError::Registry`] wrapping `Validation` when required fields
///   are empty (no request is made), or any client error.
/// - [`SessionError::Store`] if the store cannot be read or written.
pub async fn submit_current<S: KeyValueStore>(
    dataset: &mut LocationDatasetStore<S>,
    client: &RegistryClient,
    base_name: &str,
) -> Result<Receipt, SessionError> {
    let record = dataset.current().cloned().unwrap_or_default();
    let source = submission_source(dataset, base_name)?;
    let payload = SubmissionPayload::from_record(&record, &source)?;

    let receipt = client.submit_location(&payload).await?;
    dataset.clear_legacy()?;
    Ok(receipt)
}

/// Submits every record, one at a time with `pause` between them.
///
/// A run with no failures clears the whole dataset. Otherwise the dataset is
/// left intact so failed entries can be fixed and resubmitted.
///
/// # Errors
///
/// Returns [`SessionError::Store`] if the store cannot be read or written.
/// Per-record failures are reported in the [`BulkReport`], not as errors.
pub async fn submit_dataset<S: KeyValueStore>(
    dataset: &mut LocationDatasetStore<S>,
    client: &RegistryClient,
    base_name: &str,
    pause: Duration,
) -> Result<BulkReport, SessionError> {
    let source = submission_source(dataset, base_name)?;
    let records = dataset.records().to_vec();
    let report = submit_all(client, &records, &source, pause).await;

    if report.is_complete_success() {
        dataset.clear()?;
    }
    Ok(report)
}
