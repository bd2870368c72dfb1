//! The per-location record shared by the extraction pipeline, the dataset
//! store, and the submission adapter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One physical business location.
///
/// Every text field defaults to the empty string. Consumers only ever check
/// emptiness, never presence, so a record read back from storage with
/// missing keys behaves exactly like a freshly created one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationRecord {
    pub name: String,
    pub address: String,
    /// ISO alpha-2 code, or empty when unknown.
    pub country: String,
    pub product_type: String,
    pub sector: String,
    pub parent_company: String,
    pub is_headquarters: bool,
}

impl LocationRecord {
    /// A record carrying only a name and address, with the country left to
    /// the caller.
    #[must_use]
    pub fn named(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.address.is_empty()
            && self.country.is_empty()
            && self.product_type.is_empty()
            && self.sector.is_empty()
            && self.parent_company.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Country => &self.country,
            Field::ProductType => &self.product_type,
            Field::Sector => &self.sector,
            Field::ParentCompany => &self.parent_company,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Address => self.address = value,
            Field::Country => self.country = value,
            Field::ProductType => self.product_type = value,
            Field::Sector => self.sector = value,
            Field::ParentCompany => self.parent_company = value,
        }
    }
}

/// A user-writable text field of [`LocationRecord`].
///
/// The string form is the camelCase key used in persisted records and in
/// capture-menu ids (`name`, `address`, `country`, `productType`, `sector`,
/// `parentCompany`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Address,
    Country,
    ProductType,
    Sector,
    ParentCompany,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Address,
        Field::Country,
        Field::ProductType,
        Field::Sector,
        Field::ParentCompany,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Country => "country",
            Field::ProductType => "productType",
            Field::Sector => "sector",
            Field::ParentCompany => "parentCompany",
        }
    }

    /// Human label used in capture menus ("Save as Location Name").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Location Name",
            Field::Address => "Location Address",
            Field::Country => "Location Country",
            Field::ProductType => "Product Type",
            Field::Sector => "Sector",
            Field::ParentCompany => "Parent Company",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s) || snake(field.key()) == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

fn snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_has_empty_strings() {
        let record = LocationRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.country, "");
        assert!(!record.is_headquarters);
    }

    #[test]
    fn missing_keys_deserialize_as_empty() {
        let record: LocationRecord = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(record.name, "Acme");
        assert_eq!(record.address, "");
        assert_eq!(record.parent_company, "");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut record = LocationRecord::named("Acme", "1 Main St");
        record.set(Field::ParentCompany, "Acme Holdings");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["parentCompany"], "Acme Holdings");
        assert_eq!(json["isHeadquarters"], false);
    }

    #[test]
    fn field_parses_camel_and_snake_case() {
        assert_eq!("productType".parse::<Field>().unwrap(), Field::ProductType);
        assert_eq!("product_type".parse::<Field>().unwrap(), Field::ProductType);
        assert_eq!("NAME".parse::<Field>().unwrap(), Field::Name);
        assert!(matches!(
            "phone".parse::<Field>(),
            Err(CoreError::UnknownField(ref f)) if f == "phone"
        ));
    }

    #[test]
    fn get_and_set_cover_every_field() {
        let mut record = LocationRecord::default();
        for field in Field::ALL {
            record.set(field, field.key());
        }
        for field in Field::ALL {
            assert_eq!(record.get(field), field.key());
        }
    }
}
