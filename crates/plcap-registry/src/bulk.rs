//! Serialized submission of every record in a dataset.

use std::time::Duration;

use chrono::{DateTime, Utc};
use plcap_core::LocationRecord;
use serde::Serialize;

use crate::client::RegistryClient;
use crate::payload::SubmissionSource;
use crate::types::{Receipt, SubmissionPayload};

/// Result of one record in a bulk run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum OutcomeStatus {
    Submitted { receipt: Receipt },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOutcome {
    pub index: usize,
    pub name: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
    pub finished_at: DateTime<Utc>,
}

impl BulkOutcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self.status, OutcomeStatus::Submitted { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<BulkOutcome>,
}

impl BulkReport {
    /// True when at least one record was attempted and none failed.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed == 0 && self.succeeded > 0
    }

    /// `"Submitted N of M locations"`, with the failure count when non-zero.
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.succeeded + self.failed;
        if self.failed == 0 {
            format!("Submitted {} of {total} locations", self.succeeded)
        } else {
            format!(
                "Submitted {} of {total} locations ({} failed)",
                self.succeeded, self.failed
            )
        }
    }
}

/// Submits `records` one at a time, sleeping `pause` between consecutive
/// submissions.
///
/// A record that fails local validation or is rejected remotely is recorded
/// as a failure and the run continues with the next record. Records that
/// fail validation are never sent.
pub async fn submit_all(
    client: &RegistryClient,
    records: &[LocationRecord],
    source: &SubmissionSource,
    pause: Duration,
) -> BulkReport {
    let mut report = BulkReport::default();

    for (index, record) in records.iter().enumerate() {
        if index > 0 && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }

        let result = match SubmissionPayload::from_record(record, source) {
            Ok(payload) => client.submit_location(&payload).await,
            Err(e) => Err(e),
        };

        let status = match result {
            Ok(receipt) => {
                report.succeeded += 1;
                OutcomeStatus::Submitted { receipt }
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!(index, name = record.name, error = %e, "bulk submission item failed");
                OutcomeStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };

        report.outcomes.push(BulkOutcome {
            index,
            name: record.name.clone(),
            status,
            finished_at: Utc::now(),
        });
    }

    tracing::info!(
        succeeded = report.succeeded,
        failed = report.failed,
        "bulk submission finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ok: bool) -> BulkOutcome {
        BulkOutcome {
            index: 0,
            name: "Acme".to_string(),
            status: if ok {
                OutcomeStatus::Submitted {
                    receipt: Receipt::default(),
                }
            } else {
                OutcomeStatus::Failed {
                    reason: "boom".to_string(),
                }
            },
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn empty_report_is_not_a_success() {
        assert!(!BulkReport::default().is_complete_success());
    }

    #[test]
    fn summary_mentions_failures_only_when_present() {
        let report = BulkReport {
            succeeded: 2,
            failed: 1,
            outcomes: vec![outcome(true), outcome(false), outcome(true)],
        };
        assert_eq!(report.summary(), "Submitted 2 of 3 locations (1 failed)");
        assert!(!report.is_complete_success());

        let clean = BulkReport {
            succeeded: 1,
            failed: 0,
            outcomes: vec![outcome(true)],
        };
        assert_eq!(clean.summary(), "Submitted 1 of 1 locations");
        assert!(clean.is_complete_success());
    }

    #[test]
    fn outcome_serializes_flat_with_status_tag() {
        let json = serde_json::to_value(outcome(false)).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "boom");
        assert!(json.get("finishedAt").is_some());
    }
}
