use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::normalize::clean_linkedin_address;
use crate::page::{element_text, next_element_sibling, select_within, Page};
use crate::sites::{AddressProbe, SiteProfile};

pub(crate) static PROFILE: SiteProfile = SiteProfile {
    network_title: "LinkedIn",
    title_reject: &["Sign In", "Sign in", "Sign Up", "Log In", "Join LinkedIn"],
    name_selectors: &[
        ".org-top-card-summary__title h1",
        ".org-top-card-summary__title",
        "h1.top-card-layout__title",
        r#"[data-test-id="about-us__name"]"#,
        r#"meta[property="og:title"]"#,
        "main h1",
        "h1",
    ],
    name_deny: &[
        "LinkedIn",
        "Sign in",
        "Join now",
        "Log in",
        "About us",
        "Overview",
        "@",
        "$",
    ],
    max_name_len: 100,
    address_probes: &[
        AddressProbe::First(".org-top-card-summary__headquarter"),
        AddressProbe::First(r#"[data-test-id="about-us__headquarters"] dd"#),
        AddressProbe::First(".org-about-company-module__headquarters"),
        AddressProbe::Containing {
            selector: ".org-top-card-summary-info-list__info-item",
            needle: ",",
        },
    ],
    address_deny: &[
        "LinkedIn",
        "employees",
        "followers",
        "See all",
        "Sign in",
        "@",
        "$",
    ],
    fallback_address_deny: &["©"],
    fallback_containers: "dd, p, li, span",
    clean_address: clean_linkedin_address,
};

const HEADQUARTERS_MARKERS: &[&str] = &[
    ".org-top-card-summary__headquarter",
    r#"[data-test-id="about-us__headquarters"]"#,
    ".org-about-company-module__headquarters",
];

const LOCATIONS_SECTIONS: &[&str] = &[
    ".org-locations-module",
    r#"[data-test-id="locations"]"#,
    "section.org-locations",
];

const LOCATION_CARD: &str = ".org-location-card";

const CARD_ADDRESS: &[&str] = &[".org-location-card__address", "address", "p"];

const ABOUT_CONTENT: &[&str] = &[
    ".org-page-details",
    r#"[data-test-id="about-us"]"#,
    ".org-about-us-organization-description",
    "main",
    "body",
];

/// `dt` labels whose value lists further locations.
pub(crate) const LOCATION_LABELS: &[&str] = &["locations", "offices"];

pub(crate) const HEADQUARTERS_LABELS: &[&str] = &["headquarters"];

/// A street address ending in a US state/ZIP, optionally followed by a
/// country code.
pub(crate) static FULL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|\s)(\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd|Way|Place|Pl|Circle|Cir|Court|Ct)[^,\n]*,\s*[A-Za-z\s]+,\s*[A-Z]{2}\s*\d{5}(?:-\d{4})?(?:,\s*[A-Z]{2,}(?:\s[A-Z][a-z]+)*)?)",
    )
    .expect("valid regex")
});

pub(crate) static CONTAINER_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\s+[A-Za-z0-9 .'\-]+,\s*[A-Za-z .'\-]+,\s*[A-Z]{2}(?:\s+\d{5}(?:-\d{4})?)?)")
        .expect("valid regex")
});

pub(crate) static CITY_STATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][A-Za-z.'\-]*(?: [A-Z][A-Za-z.'\-]*)*,\s*[A-Z]{2})\b")
        .expect("valid regex")
});

pub(crate) fn has_headquarters_marker(page: &Page) -> bool {
    HEADQUARTERS_MARKERS.iter().any(|css| page.exists(css))
}

pub(crate) fn locations_section(page: &Page) -> Option<ElementRef<'_>> {
    LOCATIONS_SECTIONS.iter().find_map(|css| page.select_first(css))
}

/// One `.org-location-card`: its cleaned address and whether LinkedIn
/// flags it as the primary location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocationCard {
    pub address: String,
    pub is_primary: bool,
}

pub(crate) fn location_card_elements(page: &Page) -> Vec<ElementRef<'_>> {
    page.select_all(LOCATION_CARD)
}

pub(crate) fn location_cards(page: &Page) -> Vec<LocationCard> {
    location_card_elements(page)
        .into_iter()
        .map(|card| {
            let raw = CARD_ADDRESS
                .iter()
                .find_map(|css| select_within(card, css))
                .map_or_else(|| element_text(card), element_text);
            LocationCard {
                address: clean_linkedin_address(&raw),
                is_primary: is_primary_card(card),
            }
        })
        .collect()
}

fn is_primary_card(card: ElementRef<'_>) -> bool {
    select_within(card, r#"[class*="primary"]"#).is_some()
        || element_text(card)
            .lines()
            .any(|line| line.trim().eq_ignore_ascii_case("primary"))
}

/// Text of every `dd` whose preceding `dt` label contains one of `labels`.
pub(crate) fn detail_values(page: &Page, labels: &[&str]) -> Vec<String> {
    page.select_all("dt")
        .into_iter()
        .filter(|dt| {
            let label = element_text(*dt).to_lowercase();
            labels.iter().any(|wanted| label.contains(wanted))
        })
        .filter_map(next_element_sibling)
        .filter(|value| value.value().name() == "dd")
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Non-empty trimmed lines of a detail value.
pub(crate) fn value_lines(value: &str) -> impl Iterator<Item = &str> {
    value.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Text of each list item in the locations section.
pub(crate) fn section_items(section: ElementRef<'_>) -> Vec<String> {
    let Some(selector) = crate::page::parse_selector("li") else {
        return Vec::new();
    };
    section
        .select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Text of the about-content container, falling back to the whole body.
pub(crate) fn about_text(page: &Page) -> String {
    ABOUT_CONTENT
        .iter()
        .find_map(|css| page.select_first(css))
        .map(element_text)
        .unwrap_or_default()
}
