use crate::extract::{contains_any, first_hit, Strategy};
use crate::normalize::{clean_name, strip_title_suffix};
use crate::page::{element_text, Page};
use crate::sites::{profile_for, SiteProfile};

/// Best-guess business name for the page, or `None`.
///
/// Tries the network's selector list, then the page title.
#[must_use]
pub fn extract_name(page: &Page) -> Option<String> {
    let profile = profile_for(page.network())?;
    first_hit(page, "name", &name_strategies(profile))
}

/// Broad second pass: every `h1` on the page.
#[must_use]
pub fn fallback_name(page: &Page) -> Option<String> {
    let profile = profile_for(page.network())?;
    page.select_all("h1")
        .into_iter()
        .map(|h1| clean_name(&element_text(h1)))
        .find(|name| {
            let len = name.chars().count();
            len > 2 && len < profile.max_name_len && !contains_any(name, profile.name_deny)
        })
}

pub(crate) fn name_strategies(profile: &'static SiteProfile) -> Vec<Strategy<'static>> {
    let mut strategies: Vec<Strategy<'static>> = profile
        .name_selectors
        .iter()
        .map(|&css| {
            Strategy::new(css, move |page: &Page| {
                let element = page.select_first(css)?;
                let raw = if element.value().name() == "meta" {
                    element.value().attr("content")?.to_string()
                } else {
                    element_text(element)
                };
                let name = clean_name(strip_title_suffix(&raw));
                is_valid_name(profile, &name).then_some(name)
            })
        })
        .collect();

    strategies.push(Strategy::new("title", move |page: &Page| {
        let title = page.title().trim();
        if title == profile.network_title || contains_any(title, profile.title_reject) {
            return None;
        }
        let name = clean_name(strip_title_suffix(title));
        is_valid_name(profile, &name).then_some(name)
    }));

    strategies
}

fn is_valid_name(profile: &SiteProfile, name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() < profile.max_name_len
        && !contains_any(name, profile.name_deny)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facebook(html: &str) -> Page {
        Page::from_html("https://www.facebook.com/acmewidgets", html).unwrap()
    }

    #[test]
    fn page_title_testid_wins() {
        let page = facebook(
            r#"<h1>Other</h1><h1 data-testid="page-title">Acme Widgets · Manufacturer</h1>"#,
        );
        assert_eq!(extract_name(&page).as_deref(), Some("Acme Widgets"));
    }

    #[test]
    fn deny_listed_heading_falls_through_to_meta() {
        let page = facebook(
            r#"<html><head><meta property="og:title" content="Acme Widgets"></head>
               <body><h1 role="heading">Log in to Facebook</h1></body></html>"#,
        );
        assert_eq!(extract_name(&page).as_deref(), Some("Acme Widgets"));
    }

    #[test]
    fn title_fallback_strips_network_suffix() {
        let page = facebook("<html><head><title>Acme Widgets | Facebook</title></head></html>");
        assert_eq!(extract_name(&page).as_deref(), Some("Acme Widgets"));
    }

    #[test]
    fn bare_network_title_is_rejected() {
        let page = facebook("<html><head><title>Facebook</title></head></html>");
        assert_eq!(extract_name(&page), None);

        let page = facebook("<html><head><title>Log in or sign up to view</title></head></html>");
        assert_eq!(extract_name(&page), None);
    }

    #[test]
    fn overlong_name_is_rejected() {
        let long = "A".repeat(120);
        let page = facebook(&format!("<h1>{long}</h1>"));
        assert_eq!(extract_name(&page), None);
    }

    #[test]
    fn linkedin_name_comes_from_top_card() {
        let page = Page::from_html(
            "https://www.linkedin.com/company/microsoft/about/",
            r#"<html><head><title>Microsoft | LinkedIn</title></head><body>
               <div class="org-top-card-summary__title"><h1>Microsoft</h1></div></body></html>"#,
        )
        .unwrap();
        assert_eq!(extract_name(&page).as_deref(), Some("Microsoft"));
    }

    #[test]
    fn other_networks_have_no_name_strategies() {
        let page = Page::from_html("https://example.com/", "<h1>Acme</h1>").unwrap();
        assert_eq!(extract_name(&page), None);
        assert_eq!(fallback_name(&page), None);
    }

    #[test]
    fn strategies_are_tried_in_profile_order() {
        let strategies = name_strategies(&crate::sites::facebook::PROFILE);
        assert_eq!(strategies[0].label(), r#"h1[data-testid="page-title"]"#);
        assert_eq!(strategies.last().map(Strategy::label), Some("title"));
    }

    #[test]
    fn fallback_scans_every_heading() {
        let page = facebook("<h1>Home</h1><h1>Ab</h1><h1>Acme Widgets</h1>");
        assert_eq!(fallback_name(&page).as_deref(), Some("Acme Widgets"));
    }
}
