//! Page classifier: is this a business profile, and how many locations does
//! it describe?

use plcap_core::DetectionLimits;
use serde::{Deserialize, Serialize};

use crate::page::{element_text, Network, Page};
use crate::sites::{facebook, linkedin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageClassification {
    pub network: Network,
    pub is_recognized_business_page: bool,
    pub location_count: usize,
}

impl PageClassification {
    fn unrecognized(network: Network) -> Self {
        Self {
            network,
            is_recognized_business_page: false,
            location_count: 0,
        }
    }
}

/// Classify `page`. Recomputed from scratch on every call.
#[must_use]
pub fn classify(page: &Page, limits: &DetectionLimits) -> PageClassification {
    let network = page.network();
    let classification = match network {
        Network::Facebook if is_facebook_profile(page) => PageClassification {
            network,
            is_recognized_business_page: true,
            location_count: 1,
        },
        Network::LinkedIn if page.is_about_page() => PageClassification {
            network,
            is_recognized_business_page: true,
            location_count: linkedin_location_count(page, limits),
        },
        _ => PageClassification::unrecognized(network),
    };
    tracing::debug!(
        url = %page.url(),
        ?network,
        recognized = classification.is_recognized_business_page,
        count = classification.location_count,
        "classified page"
    );
    classification
}

fn is_facebook_profile(page: &Page) -> bool {
    let checks: [(&str, fn(&Page) -> bool); 4] = [
        ("profile-marker", |page: &Page| {
            facebook::PROFILE_MARKERS.iter().any(|css| page.exists(css))
        }),
        ("titled-page", |page: &Page| {
            page.title().contains("Facebook") && page.title() != "Facebook"
        }),
        ("heading", |page: &Page| page.exists("h1")),
        ("non-root-path", Page::has_non_root_path),
    ];
    checks.iter().any(|(label, check)| {
        let hit = check(page);
        if hit {
            tracing::trace!(check = *label, "facebook profile indicator");
        }
        hit
    })
}

/// Estimated number of locations on a LinkedIn About page.
///
/// * a headquarters marker contributes 1;
/// * a locations section contributes its card count or, from its text, one
///   location per two commas (at least 1, at most `max_list_estimate`),
///   whichever is larger;
/// * a "Locations"/"Offices" detail value contributes its line count, capped
///   at `max_detail_lines`, when that exceeds the section estimate;
/// * address-shaped matches in the about text (capped at
///   `max_text_matches`) act as a floor.
///
/// Every term is combined with `+` or `max`, so more cards, lines, or matches
/// never lower the result. A recognized About page always reports at least 1.
pub(crate) fn linkedin_location_count(page: &Page, limits: &DetectionLimits) -> usize {
    let headquarters = usize::from(linkedin::has_headquarters_marker(page));

    let cards = linkedin::location_card_elements(page).len();
    let listed = linkedin::locations_section(page).map_or(cards, |section| {
        cards.max(comma_estimate(&element_text(section), limits.max_list_estimate))
    });

    let detailed = linkedin::detail_values(page, linkedin::LOCATION_LABELS)
        .iter()
        .map(|value| linkedin::value_lines(value).count())
        .sum::<usize>()
        .min(limits.max_detail_lines);

    let textual = linkedin::FULL_ADDRESS
        .find_iter(&linkedin::about_text(page))
        .count()
        .min(limits.max_text_matches);

    let count = (headquarters + listed.max(detailed)).max(textual);
    tracing::debug!(
        headquarters,
        cards,
        listed,
        detailed,
        textual,
        count,
        "estimated linkedin locations"
    );
    count.max(1)
}

fn comma_estimate(text: &str, cap: usize) -> usize {
    let commas = text.matches(',').count();
    (commas / 2).max(1).min(cap)
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
