use std::sync::LazyLock;

use plcap_core::resolve_country_code;
use regex::Regex;

/// Country tokens recognised at the very end of an address, in match order.
static COUNTRY_TAILS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        "USA?",
        "United States",
        "Canada",
        "UK",
        "United Kingdom",
        "Australia",
        "Germany",
        "France",
        "Italy",
        "Spain",
        "Mexico",
        "Brazil",
        "India",
        "China",
        "Japan",
    ]
    .iter()
    .map(|token| Regex::new(&format!(r"(?i),\s*({token})\s*$")).expect("valid regex"))
    .collect()
});

static US_STATE_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}\s*\d{5}(?:-\d{4})?\b").expect("valid regex"));

/// Country token at the tail of `address`, exactly as written, or `""`.
///
/// `", US"` and `", USA"` both match the first rule, so a two-letter `US`
/// tail is returned as `"US"`.
#[must_use]
pub fn extract_country(address: &str) -> String {
    COUNTRY_TAILS
        .iter()
        .find_map(|re| re.captures(address))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Alpha-2 code for the country named at the tail of `address`.
///
/// Falls back to `"US"` for an address carrying a `ST 12345` state/ZIP
/// shape, and to `""` otherwise.
#[must_use]
pub fn infer_country_code(address: &str) -> String {
    let token = extract_country(address);
    if let Some(code) = resolve_country_code(&token) {
        return code.to_string();
    }
    if US_STATE_ZIP.is_match(address) {
        return "US".to_string();
    }
    String::new()
}
