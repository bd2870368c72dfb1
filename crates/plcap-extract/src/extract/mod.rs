//! Field extractors.
//!
//! Each extractor is an ordered list of [`Strategy`] values. [`first_hit`]
//! runs them in order and stops at the first one that yields a validated
//! value; a strategy that finds nothing, or whose candidate fails
//! validation, is a miss and never an error.

mod address;
mod country;
mod name;

pub use address::{extract_address, fallback_address};
pub use country::{extract_country, infer_country_code};
pub use name::{extract_name, fallback_name};

pub(crate) use address::is_valid_address;

use crate::page::Page;

type Probe<'a> = Box<dyn Fn(&Page) -> Option<String> + 'a>;

/// One heuristic attempt at a field value.
pub struct Strategy<'a> {
    label: &'static str,
    probe: Probe<'a>,
}

impl<'a> Strategy<'a> {
    pub fn new(label: &'static str, probe: impl Fn(&Page) -> Option<String> + 'a) -> Self {
        Self {
            label,
            probe: Box::new(probe),
        }
    }

    /// Selector or short name identifying this strategy in logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn run(&self, page: &Page) -> Option<String> {
        (self.probe)(page)
    }
}

impl std::fmt::Debug for Strategy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Run `strategies` in order and return the first value produced.
#[must_use]
pub fn first_hit(page: &Page, field: &'static str, strategies: &[Strategy<'_>]) -> Option<String> {
    for strategy in strategies {
        if let Some(value) = strategy.run(page) {
            tracing::debug!(field, strategy = strategy.label, value, "strategy hit");
            return Some(value);
        }
        tracing::trace!(field, strategy = strategy.label, "strategy miss");
    }
    None
}

fn contains_any(text: &str, deny: &[&str]) -> bool {
    deny.iter().any(|needle| text.contains(needle))
}
