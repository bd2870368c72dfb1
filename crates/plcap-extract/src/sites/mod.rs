//! Per-network selector tables and deny-lists.
//!
//! The extractors are generic over a [`SiteProfile`]; everything that is
//! specific to one network's markup lives in the submodules.

pub(crate) mod facebook;
pub(crate) mod linkedin;

use crate::page::Network;

/// Where to look for an address candidate.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AddressProbe {
    /// The first element matching the selector, and only that one.
    First(&'static str),
    /// Every element matching the selector whose text contains `needle`.
    Containing {
        selector: &'static str,
        needle: &'static str,
    },
}

impl AddressProbe {
    pub(crate) fn selector(self) -> &'static str {
        match self {
            AddressProbe::First(selector) | AddressProbe::Containing { selector, .. } => selector,
        }
    }
}

pub(crate) struct SiteProfile {
    /// Exact page title that carries no business name.
    pub network_title: &'static str,
    /// Title substrings that mark an auth wall or other chrome.
    pub title_reject: &'static [&'static str],
    pub name_selectors: &'static [&'static str],
    pub name_deny: &'static [&'static str],
    pub max_name_len: usize,
    pub address_probes: &'static [AddressProbe],
    pub address_deny: &'static [&'static str],
    /// Extra deny-list entries for the broad fallback scan.
    pub fallback_address_deny: &'static [&'static str],
    pub fallback_containers: &'static str,
    pub clean_address: fn(&str) -> String,
}

pub(crate) fn profile_for(network: Network) -> Option<&'static SiteProfile> {
    match network {
        Network::Facebook => Some(&facebook::PROFILE),
        Network::LinkedIn => Some(&linkedin::PROFILE),
        Network::Other => None,
    }
}
