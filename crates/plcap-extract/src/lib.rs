//! Heuristic extraction of business locations from Facebook and LinkedIn
//! page snapshots.

pub mod classify;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod page;
pub mod pipeline;
mod sites;

pub use classify::{classify, PageClassification};
pub use error::PageError;
pub use extract::{extract_address, extract_country, extract_name, infer_country_code};
pub use normalize::{clean_address, clean_linkedin_address, clean_name, strip_title_suffix};
pub use page::{Network, Page, PageSnapshot};
pub use pipeline::{extract_locations, run, run_snapshot, Extraction};
