use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use scraper::ElementRef;

use crate::extract::{contains_any, first_hit, Strategy};
use crate::page::{element_text, Page};
use crate::sites::{profile_for, AddressProbe, SiteProfile};

/// Loose "leading number, comma-separated" shape for the broad scan.
static LOOSE_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\s+[^,]+,\s*[^,]+").expect("valid regex"));

const MAP_HOSTS: &[&str] = &["maps.google.", "google.com/maps", "maps.app.goo.gl"];

/// Best-guess address for the page, or `None`.
#[must_use]
pub fn extract_address(page: &Page) -> Option<String> {
    let profile = profile_for(page.network())?;
    first_hit(page, "address", &address_strategies(profile))
}

/// Broad second pass over every container whose text starts like a street
/// address. Validation is stricter than for the targeted strategies.
#[must_use]
pub fn fallback_address(page: &Page) -> Option<String> {
    let profile = profile_for(page.network())?;
    page.select_all(profile.fallback_containers)
        .into_iter()
        .map(element_text)
        .filter(|text| LOOSE_ADDRESS.is_match(text))
        .map(|text| (profile.clean_address)(&text))
        .find(|address| {
            let len = address.chars().count();
            len > 10
                && len < 200
                && address.contains(',')
                && address.chars().any(|c| c.is_ascii_digit())
                && !contains_any(address, profile.address_deny)
                && !contains_any(address, profile.fallback_address_deny)
        })
}

pub(crate) fn address_strategies(profile: &'static SiteProfile) -> Vec<Strategy<'static>> {
    profile
        .address_probes
        .iter()
        .map(|&probe| {
            Strategy::new(probe.selector(), move |page: &Page| match probe {
                AddressProbe::First(css) => {
                    let element = page.select_first(css)?;
                    candidate(page, profile, element)
                }
                AddressProbe::Containing { selector, needle } => page
                    .select_all(selector)
                    .into_iter()
                    .filter(|element| element_text(*element).contains(needle))
                    .find_map(|element| candidate(page, profile, element)),
            })
        })
        .collect()
}

fn candidate(page: &Page, profile: &SiteProfile, element: ElementRef<'_>) -> Option<String> {
    let raw = match map_link_query(page, element) {
        MapLink::NotMapLink | MapLink::NoQuery => element_text(element),
        MapLink::Query(query) => query,
        MapLink::Malformed => return None,
    };
    let address = (profile.clean_address)(&raw);
    is_valid_address(profile, &address).then_some(address)
}

pub(crate) fn is_valid_address(profile: &SiteProfile, address: &str) -> bool {
    let len = address.chars().count();
    len > 5
        && len < 200
        && (address.contains(',') || address.chars().any(|c| c.is_ascii_digit()))
        && !contains_any(address, profile.address_deny)
}

#[derive(Debug, PartialEq, Eq)]
enum MapLink {
    NotMapLink,
    NoQuery,
    Query(String),
    Malformed,
}

/// Decode the `q`/`query` parameter of a map link.
///
/// The parameter value is decoded once by URL parsing and once more here,
/// since map links routinely carry a doubly-encoded address.
fn map_link_query(page: &Page, element: ElementRef<'_>) -> MapLink {
    if element.value().name() != "a" {
        return MapLink::NotMapLink;
    }
    let Some(href) = element.value().attr("href") else {
        return MapLink::NotMapLink;
    };
    if !MAP_HOSTS.iter().any(|host| href.contains(host)) {
        return MapLink::NotMapLink;
    }
    let Some(url) = page.resolve(href) else {
        tracing::debug!(href, "unparseable map link");
        return MapLink::Malformed;
    };
    let Some(value) = url
        .query_pairs()
        .find(|(key, _)| key == "q" || key == "query")
        .map(|(_, value)| value.into_owned())
    else {
        return MapLink::NoQuery;
    };
    match percent_decode_str(&value).decode_utf8() {
        Ok(decoded) => MapLink::Query(decoded.trim().to_string()),
        Err(e) => {
            tracing::debug!(href, error = %e, "map link query is not UTF-8");
            MapLink::Malformed
        }
    }
}
