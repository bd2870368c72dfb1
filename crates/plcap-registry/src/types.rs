//! Wire types for the registry API.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// JSON body of `POST /v1/production-locations/`.
///
/// Optional fields are sent as single-element arrays, or omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub address: String,
    pub country: String,
    pub source_name: String,
    pub source_link: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sectors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_companies: Option<Vec<String>>,
}

/// Identifiers the registry hands back for an accepted submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default, deserialize_with = "string_or_number")]
    pub moderation_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub os_id: Option<String>,
}

impl Receipt {
    /// User-facing confirmation line.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::from("Location submitted successfully!");
        if let Some(id) = &self.moderation_id {
            out.push_str(&format!(" Moderation ID: {id}"));
        }
        if let Some(id) = &self.os_id {
            out.push_str(&format!(" OS ID: {id}"));
        }
        out
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// One parent-company suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentCompany {
    pub name: String,
}

/// An outbound HTTP call made on behalf of the page context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub url: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// `{success, data}` or `{success, error}` reply to a [`ProxyRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ProxyResponse {
    #[must_use]
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
