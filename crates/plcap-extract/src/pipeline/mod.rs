//! Location extraction pipeline: classifier plus extractors, producing zero
//! or more location records for one page snapshot.

mod facebook;
mod linkedin;

use plcap_core::{DetectionLimits, LocationRecord};
use serde::Serialize;

use crate::classify::{classify, PageClassification};
use crate::page::{Network, Page, PageSnapshot};

/// Result of one pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub classification: PageClassification,
    /// Business name found on the page, or `""`.
    pub business_name: String,
    pub records: Vec<LocationRecord>,
}

impl Extraction {
    fn empty(classification: PageClassification) -> Self {
        Self {
            classification,
            business_name: String::new(),
            records: Vec::new(),
        }
    }
}

/// Run classification and extraction over a parsed page.
///
/// Never fails: the worst case is an empty record list.
#[must_use]
pub fn run(page: &Page, limits: &DetectionLimits) -> Extraction {
    let classification = classify(page, limits);
    if !classification.is_recognized_business_page {
        return Extraction::empty(classification);
    }

    let (business_name, records) = match page.network() {
        Network::Facebook => facebook::extract(page),
        Network::LinkedIn => linkedin::extract(page, limits),
        Network::Other => return Extraction::empty(classification),
    };

    tracing::info!(
        url = %page.url(),
        network = ?page.network(),
        business_name,
        count = records.len(),
        "extracted locations"
    );
    Extraction {
        classification,
        business_name,
        records,
    }
}

/// Parse `snapshot` and run the pipeline over it.
///
/// A snapshot whose URL cannot be parsed yields an empty, unrecognized
/// result.
#[must_use]
pub fn run_snapshot(snapshot: &PageSnapshot, limits: &DetectionLimits) -> Extraction {
    match Page::parse(snapshot) {
        Ok(page) => run(&page, limits),
        Err(e) => {
            tracing::warn!(error = %e, "skipping unparseable page snapshot");
            Extraction::empty(PageClassification {
                network: Network::Other,
                is_recognized_business_page: false,
                location_count: 0,
            })
        }
    }
}

/// Records only; see [`run`].
#[must_use]
pub fn extract_locations(page: &Page, limits: &DetectionLimits) -> Vec<LocationRecord> {
    run(page, limits).records
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
