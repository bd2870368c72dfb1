use plcap_core::LocationRecord;

use crate::extract::{
    extract_address, extract_name, fallback_address, fallback_name, infer_country_code,
};
use crate::page::Page;

/// At most one record: Facebook pages have no multi-location concept.
///
/// The broad fallback runs for whichever of name or address the targeted
/// strategies missed.
pub(super) fn extract(page: &Page) -> (String, Vec<LocationRecord>) {
    let name = extract_name(page)
        .or_else(|| fallback_name(page))
        .unwrap_or_default();
    let address = extract_address(page)
        .or_else(|| fallback_address(page))
        .unwrap_or_default();

    if name.is_empty() && address.is_empty() {
        tracing::debug!(url = %page.url(), "no business info on facebook page");
        return (name, Vec::new());
    }

    let mut record = LocationRecord::named(name.clone(), address);
    record.country = infer_country_code(&record.address);
    (name, vec![record])
}
