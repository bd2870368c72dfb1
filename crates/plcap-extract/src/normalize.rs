//! Text cleanup for names and addresses scraped from business pages.
//!
//! Every cleaner here only trims, truncates, or strips, and each one is run
//! to a fixpoint, so applying a cleaner to its own output is a no-op.

use std::sync::LazyLock;

use regex::Regex;

/// Separators that end a business name, tried in order. The first one with
/// a non-empty prefix wins.
const NAME_SEPARATORS: &[&str] = &[
    "Page ·",
    "Local business",
    "·",
    "\n",
    "Rating",
    "Review",
    "@",
    "(",
    "$",
];

const ADDRESS_PREFIXES: &[&str] = &[
    "Page · Local business",
    "Local business",
    "Page ·",
    "Business ·",
];

/// Labels LinkedIn prints in front of an address.
const LINKEDIN_LABELS: &[&str] = &["Headquarters", "Primary", "Locations", "Location"];

const TITLE_SUFFIXES: &[&str] = &[" | Facebook", " - Facebook", " | LinkedIn", " - LinkedIn"];

static NAME_LEADING_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[·\s\d\-]+").expect("valid regex"));
static NAME_TRAILING_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[·\s\d\-]+$").expect("valid regex"));

/// Markers after which an address is followed by non-address page chrome.
static ADDRESS_END_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\([0-9\-\)\(\s]+\)",
        r"@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        r"https?://",
        r"\$[0-9]",
        r"Price Range",
        r"Not yet rated",
        r"\([0-9]+ Review",
        r"Rating:",
        r"Get directions",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static STREET_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\s+[^,]+(?:,\s*[^,]+)*").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Reduce raw element text to a bare business name.
#[must_use]
pub fn clean_name(text: &str) -> String {
    fixpoint(text, clean_name_once)
}

fn clean_name_once(text: &str) -> String {
    let mut text = text.trim();
    for separator in NAME_SEPARATORS {
        if let Some(pos) = text.find(separator) {
            let head = text[..pos].trim();
            if !head.is_empty() {
                text = head;
                break;
            }
        }
    }
    let text = NAME_LEADING_NOISE.replace(text, "");
    let text = NAME_TRAILING_NOISE.replace(&text, "");
    text.trim().to_string()
}

/// Reduce raw element text to the postal-address part.
///
/// Strips known category prefixes, truncates at the earliest marker of
/// trailing page chrome (phone, e-mail, URL, price, rating), then keeps the
/// first street-shaped run if there is one.
#[must_use]
pub fn clean_address(text: &str) -> String {
    fixpoint(text, clean_address_once)
}

fn clean_address_once(text: &str) -> String {
    let mut text = text.trim();
    for prefix in ADDRESS_PREFIXES {
        if let Some(rest) = text.strip_prefix(prefix) {
            text = rest.trim_start();
            break;
        }
    }

    let cut = ADDRESS_END_MARKERS
        .iter()
        .filter_map(|marker| {
            marker
                .find_iter(text)
                .map(|m| m.start())
                .find(|&start| start > 0)
        })
        .min();
    if let Some(cut) = cut {
        text = text[..cut].trim_end();
    }

    match STREET_SHAPE.find(text) {
        Some(m) => m.as_str().trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// LinkedIn variant of [`clean_address`].
///
/// Collapses line breaks into `", "`, drops leading labels such as
/// "Headquarters", and cuts at the first `·` separator before the generic
/// cleanup runs.
#[must_use]
pub fn clean_linkedin_address(text: &str) -> String {
    fixpoint(text, clean_linkedin_address_once)
}

fn clean_linkedin_address_once(text: &str) -> String {
    let joined = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let mut text = WHITESPACE_RUN.replace_all(&joined, " ").into_owned();

    loop {
        let trimmed = text.trim_start_matches([',', ':', ' ']);
        let stripped = LINKEDIN_LABELS.iter().find_map(|label| {
            trimmed
                .get(..label.len())
                .filter(|head| head.eq_ignore_ascii_case(label))
                .map(|_| &trimmed[label.len()..])
                .filter(|rest| !rest.starts_with(char::is_alphanumeric))
        });
        match stripped {
            Some(rest) => text = rest.to_string(),
            None => {
                text = trimmed.to_string();
                break;
            }
        }
    }

    if let Some(pos) = text.find('·') {
        let head = text[..pos].trim();
        if !head.is_empty() {
            text = head.to_string();
        }
    }
    clean_address_once(text.trim_end_matches([',', ' ']))
}

/// Remove a trailing " | Facebook"-style network suffix from a page title.
#[must_use]
pub fn strip_title_suffix(title: &str) -> &str {
    let title = title.trim();
    TITLE_SUFFIXES
        .iter()
        .find_map(|suffix| title.strip_suffix(suffix))
        .map_or(title, str::trim_end)
}

/// Apply `step` until the output stops changing.
///
/// Every step used here returns a string no longer than its input, and equal
/// length means unchanged, so the loop terminates.
fn fixpoint(text: &str, step: fn(&str) -> String) -> String {
    let mut current = step(text);
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
