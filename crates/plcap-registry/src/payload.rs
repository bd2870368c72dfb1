use plcap_core::{resolve_country_code, LocationRecord};

use crate::error::RegistryError;
use crate::types::SubmissionPayload;

/// Where a submitted record was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSource {
    pub source_name: String,
    pub source_link: String,
}

impl SubmissionSource {
    /// `base_name` with an optional `" - <network>"` suffix.
    #[must_use]
    pub fn new(base_name: &str, network: Option<&str>, source_link: impl Into<String>) -> Self {
        let source_name = match network {
            Some(network) => format!("{base_name} - {network}"),
            None => base_name.to_string(),
        };
        Self {
            source_name,
            source_link: source_link.into(),
        }
    }
}

impl SubmissionPayload {
    /// Build the wire payload for `record`.
    ///
    /// Text fields are trimmed. The country is normalised to its alpha-2
    /// code when it names a known country, otherwise upper-cased as typed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] listing every empty required
    /// field (name, address, country).
    pub fn from_record(
        record: &LocationRecord,
        source: &SubmissionSource,
    ) -> Result<Self, RegistryError> {
        let name = record.name.trim();
        let address = record.address.trim();
        let country = record.country.trim();

        let missing: Vec<&'static str> = [("name", name), ("address", address), ("country", country)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(RegistryError::Validation { missing });
        }

        let country =
            resolve_country_code(country).map_or_else(|| country.to_uppercase(), str::to_string);

        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            country,
            source_name: source.source_name.clone(),
            source_link: source.source_link.clone(),
            product_types: optional(&record.product_type),
            sectors: optional(&record.sector),
            parent_companies: optional(&record.parent_company),
        })
    }
}

fn optional(value: &str) -> Option<Vec<String>> {
    let value = value.trim();
    (!value.is_empty()).then(|| vec![value.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SubmissionSource {
        SubmissionSource::new(
            "OS Hub Chrome Extension",
            Some("LinkedIn"),
            "https://www.linkedin.com/company/acme/about/",
        )
    }

    #[test]
    fn source_name_carries_network_suffix() {
        assert_eq!(source().source_name, "OS Hub Chrome Extension - LinkedIn");
        assert_eq!(
            SubmissionSource::new("OS Hub Chrome Extension", None, "").source_name,
            "OS Hub Chrome Extension"
        );
    }

    #[test]
    fn missing_required_fields_are_listed() {
        let record = LocationRecord::named("Acme", "  ");
        let err = SubmissionPayload::from_record(&record, &source()).unwrap_err();
        match err {
            RegistryError::Validation { missing } => {
                assert_eq!(missing, vec!["address", "country"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn country_name_is_resolved_to_alpha_2() {
        let mut record = LocationRecord::named("Acme", "1 Main St, Springfield");
        record.country = "united states".to_string();
        let payload = SubmissionPayload::from_record(&record, &source()).unwrap();
        assert_eq!(payload.country, "US");
    }

    #[test]
    fn unknown_country_is_upper_cased() {
        let mut record = LocationRecord::named("Acme", "1 Main St, Springfield");
        record.country = "xk".to_string();
        let payload = SubmissionPayload::from_record(&record, &source()).unwrap();
        assert_eq!(payload.country, "XK");
    }

    #[test]
    fn optional_fields_become_single_element_arrays() {
        let mut record = LocationRecord::named("Acme", "1 Main St");
        record.country = "US".to_string();
        record.sector = "Apparel".to_string();
        record.parent_company = " Acme Holdings ".to_string();
        let payload = SubmissionPayload::from_record(&record, &source()).unwrap();
        assert_eq!(payload.product_types, None);
        assert_eq!(payload.sectors, Some(vec!["Apparel".to_string()]));
        assert_eq!(payload.parent_companies, Some(vec!["Acme Holdings".to_string()]));
    }
}
