//! Registry API client: single and bulk submission of production locations,
//! parent-company lookup, and a generic HTTP proxy.

pub mod bulk;
pub mod client;
pub mod error;
pub mod payload;
pub mod types;

pub use bulk::{submit_all, BulkOutcome, BulkReport, OutcomeStatus};
pub use client::RegistryClient;
pub use error::RegistryError;
pub use payload::SubmissionSource;
pub use types::{ParentCompany, ProxyRequest, ProxyResponse, Receipt, SubmissionPayload};
