use plcap_core::{DetectionLimits, LocationRecord};

use crate::extract::{
    extract_address, extract_name, first_hit, infer_country_code, is_valid_address, Strategy,
};
use crate::normalize::clean_linkedin_address;
use crate::page::{element_text, Page};
use crate::sites::linkedin::{
    about_text, detail_values, location_cards, locations_section, section_items, value_lines,
    CITY_STATE, CONTAINER_ADDRESS, FULL_ADDRESS, HEADQUARTERS_LABELS, LOCATION_LABELS, PROFILE,
};

/// Elements short enough to hold a single address block.
const CONTAINER_SCAN: &str = "div, p, span, dd, li";
const CONTAINER_MAX_CHARS: usize = 300;
const CITY_STATE_SCAN: &str = "dd, .org-top-card-summary-info-list__info-item";

pub(super) fn extract(page: &Page, limits: &DetectionLimits) -> (String, Vec<LocationRecord>) {
    let name = extract_name(page).unwrap_or_default();

    // Location cards are authoritative when present.
    let cards = card_records(page, &name);
    if !cards.is_empty() {
        tracing::debug!(count = cards.len(), "using linkedin location cards");
        return (name, cards);
    }

    let mut records = Vec::new();
    let headquarters = first_hit(page, "headquarters", &headquarters_strategies());
    if let Some(address) = &headquarters {
        let mut record = located(name.clone(), address.clone());
        record.is_headquarters = true;
        records.push(record);
    }

    for address in additional_addresses(page, limits, headquarters.as_deref()) {
        let label = if records.is_empty() {
            name.clone()
        } else {
            format!("Office {}", records.len() + 1)
        };
        records.push(located(label, address));
    }

    if records.is_empty() && !name.is_empty() && page.is_about_page() {
        tracing::debug!(name, "no address found, emitting placeholder location");
        let mut placeholder = LocationRecord::named(name.clone(), "");
        placeholder.is_headquarters = true;
        records.push(placeholder);
    }

    (name, records)
}

fn located(name: String, address: String) -> LocationRecord {
    let mut record = LocationRecord::named(name, address);
    record.country = infer_country_code(&record.address);
    record
}

/// One record per location card, primary card first. The first slot
/// carries the business name; the rest are numbered offices.
fn card_records(page: &Page, business_name: &str) -> Vec<LocationRecord> {
    let mut cards: Vec<_> = location_cards(page)
        .into_iter()
        .filter(|card| !card.address.is_empty())
        .collect();
    cards.sort_by_key(|card| !card.is_primary);

    cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let name = if index == 0 {
                business_name.to_string()
            } else {
                format!("Office {}", index + 1)
            };
            let mut record = located(name, card.address);
            record.is_headquarters = card.is_primary;
            record
        })
        .collect()
}

/// Headquarters cascade, most specific first.
pub(super) fn headquarters_strategies() -> Vec<Strategy<'static>> {
    vec![
        Strategy::new("structural", extract_address),
        Strategy::new("detail-pair", |page: &Page| {
            detail_values(page, HEADQUARTERS_LABELS)
                .iter()
                .map(|value| clean_linkedin_address(value))
                .find(|address| !address.is_empty())
        }),
        Strategy::new("page-pattern", |page: &Page| {
            let text = about_text(page);
            let caps = FULL_ADDRESS.captures(&text)?;
            non_empty(clean_linkedin_address(caps.get(1)?.as_str()))
        }),
        Strategy::new("container-scan", |page: &Page| {
            page.select_all(CONTAINER_SCAN)
                .into_iter()
                .map(element_text)
                .filter(|text| text.chars().count() < CONTAINER_MAX_CHARS)
                .find_map(|text| {
                    let caps = CONTAINER_ADDRESS.captures(&text)?;
                    non_empty(clean_linkedin_address(caps.get(1)?.as_str()))
                })
        }),
        Strategy::new("city-state", |page: &Page| {
            page.select_all(CITY_STATE_SCAN)
                .into_iter()
                .map(element_text)
                .find_map(|text| {
                    let caps = CITY_STATE.captures(&text)?;
                    non_empty(clean_linkedin_address(caps.get(1)?.as_str()))
                })
        }),
    ]
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Addresses beyond the headquarters from "Locations"/"Offices" detail
/// values and the locations list, deduplicated case-insensitively.
fn additional_addresses(
    page: &Page,
    limits: &DetectionLimits,
    headquarters: Option<&str>,
) -> Vec<String> {
    let detailed: Vec<String> = detail_values(page, LOCATION_LABELS)
        .iter()
        .flat_map(|value| value_lines(value).map(str::to_string).collect::<Vec<_>>())
        .take(limits.max_detail_lines)
        .collect();
    let listed: Vec<String> = locations_section(page)
        .map(section_items)
        .unwrap_or_default()
        .into_iter()
        .take(limits.max_list_estimate)
        .collect();

    let mut seen: Vec<String> = headquarters.map(str::to_lowercase).into_iter().collect();
    let mut found = Vec::new();
    for raw in detailed.into_iter().chain(listed) {
        let address = clean_linkedin_address(&raw);
        if !is_valid_address(&PROFILE, &address) {
            continue;
        }
        let key = address.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        found.push(address);
    }
    found
}
