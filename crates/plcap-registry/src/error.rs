use plcap_core::Environment;
use thiserror::Error;

/// Errors returned by the registry client and submission helpers.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Required fields were empty; nothing was sent.
    #[error("Name, address, and country are required (missing: {})", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// No API key is stored for the selected environment; nothing was sent.
    #[error("Please save your API key for {} first", .environment.label())]
    MissingApiKey { environment: Environment },

    /// The registry answered with a non-2xx status. `detail` is the body's
    /// `detail` field or `HTTP error {status}`.
    #[error("{detail}")]
    Remote { status: u16, detail: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl RegistryError {
    /// True when the registry itself rejected the request.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, RegistryError::Remote { .. })
    }
}
