//! HTTP client for the supply-chain registry API.
//!
//! Wraps `reqwest` with token authentication, the registry's `detail` error
//! convention, and typed response deserialization.

use std::time::Duration;

use plcap_core::Environment;
use reqwest::{Client, Method, Response, Url};

use crate::error::RegistryError;
use crate::types::{ParentCompany, ProxyRequest, ProxyResponse, Receipt, SubmissionPayload};

const USER_AGENT: &str = "plcap/0.1 (production-location-capture)";
const LOCATIONS_PATH: &str = "v1/production-locations/";
const PARENT_COMPANIES_PATH: &str = "v1/parent-companies/";
const SUGGESTION_PAGE_SIZE: &str = "10";
const MIN_LOOKUP_CHARS: usize = 2;

/// Client for one registry environment.
///
/// Use [`RegistryClient::new`] for a named environment or
/// [`RegistryClient::with_base_url`] to point at a mock server in tests.
pub struct RegistryClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl RegistryClient {
    /// Creates a client for `environment`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingApiKey`] if `api_key` is blank, or
    /// [`RegistryError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        environment: Environment,
        api_key: &str,
        timeout_secs: u64,
    ) -> Result<Self, RegistryError> {
        if api_key.trim().is_empty() {
            return Err(RegistryError::MissingApiKey { environment });
        }
        Self::with_base_url(api_key, timeout_secs, environment.base_url())
    }

    /// Creates a client with no API key, for [`RegistryClient::proxy`] calls
    /// that carry their own headers.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn unauthenticated(
        environment: Environment,
        timeout_secs: u64,
    ) -> Result<Self, RegistryError> {
        Self::with_base_url("", timeout_secs, environment.base_url())
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RegistryError::InvalidUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Exactly one trailing slash, so endpoint paths join below the API
        // root instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RegistryError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.trim().to_owned(),
            base_url,
        })
    }

    /// Submits one production location.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Remote`] on a non-2xx response.
    /// - [`RegistryError::Http`] on network failure.
    /// - [`RegistryError::Deserialize`] if a 2xx body is not valid JSON.
    pub async fn submit_location(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Receipt, RegistryError> {
        let url = self.endpoint(LOCATIONS_PATH)?;
        tracing::debug!(%url, name = payload.name, "submitting production location");

        let response = self
            .client
            .post(url.clone())
            .header("Authorization", self.auth_header())
            .json(payload)
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        if body.trim().is_empty() {
            return Ok(Receipt::default());
        }

        let receipt: Receipt =
            serde_json::from_str(&body).map_err(|e| RegistryError::Deserialize {
                context: format!("submit_location(name={})", payload.name),
                source: e,
            })?;
        tracing::info!(
            name = payload.name,
            moderation_id = receipt.moderation_id.as_deref(),
            os_id = receipt.os_id.as_deref(),
            "production location submitted"
        );
        Ok(receipt)
    }

    /// Searches parent companies by name for autocomplete.
    ///
    /// Queries shorter than two characters return no suggestions without a
    /// request. Responses are not ordered against each other: a caller that
    /// fires one lookup per keystroke sees whichever finishes last.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Remote`] on a non-2xx response.
    /// - [`RegistryError::Http`] on network failure.
    /// - [`RegistryError::Deserialize`] if the body is not a list of `{name}`.
    pub async fn search_parent_companies(
        &self,
        query: &str,
    ) -> Result<Vec<ParentCompany>, RegistryError> {
        let query = query.trim();
        if query.chars().count() < MIN_LOOKUP_CHARS {
            return Ok(Vec::new());
        }

        let mut url = self.endpoint(PARENT_COMPANIES_PATH)?;
        url.query_pairs_mut()
            .append_pair("name", query)
            .append_pair("size", SUGGESTION_PAGE_SIZE);

        let response = self
            .client
            .get(url)
            .header("Authorization", self.auth_header())
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        serde_json::from_str(&body).map_err(|e| RegistryError::Deserialize {
            context: format!("search_parent_companies(query={query})"),
            source: e,
        })
    }

    /// Performs an arbitrary HTTP call through this client's transport.
    ///
    /// Never fails: every error becomes `{success: false, error}`.
    pub async fn proxy(&self, request: &ProxyRequest) -> ProxyResponse {
        match self.try_proxy(request).await {
            Ok(data) => ProxyResponse::ok(data),
            Err(e) => {
                tracing::warn!(url = request.url, error = %e, "proxied request failed");
                ProxyResponse::failed(e.to_string())
            }
        }
    }

    async fn try_proxy(&self, request: &ProxyRequest) -> Result<serde_json::Value, RegistryError> {
        let url = Url::parse(&request.url).map_err(|e| RegistryError::InvalidUrl {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;
        let method_name = request.method.as_deref().unwrap_or("GET").to_uppercase();
        let method =
            Method::from_bytes(method_name.as_bytes()).map_err(|e| RegistryError::InvalidUrl {
                url: request.url.clone(),
                reason: format!("invalid method {method_name}: {e}"),
            })?;

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let body = Self::read_body(builder.send().await?).await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| RegistryError::Deserialize {
            context: request.url.clone(),
            source: e,
        })
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.api_key)
    }

    fn endpoint(&self, path: &str) -> Result<Url, RegistryError> {
        self.base_url
            .join(path)
            .map_err(|e| RegistryError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    /// Returns the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Remote`] for any other status, carrying the
    /// body's `detail` field or `HTTP error {status}`.
    async fn read_body(response: Response) -> Result<String, RegistryError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }

        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(serde_json::Value::as_str).map(str::to_owned))
            .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));
        tracing::warn!(status = status.as_u16(), detail, "registry rejected request");
        Err(RegistryError::Remote {
            status: status.as_u16(),
            detail,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
