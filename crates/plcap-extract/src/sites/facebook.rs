use crate::normalize::clean_address;
use crate::sites::{AddressProbe, SiteProfile};

pub(crate) static PROFILE: SiteProfile = SiteProfile {
    network_title: "Facebook",
    title_reject: &["Log in", "Log In", "Sign up"],
    name_selectors: &[
        r#"h1[data-testid="page-title"]"#,
        r#"h1[role="heading"]"#,
        r#"[data-testid="page-title"] h1"#,
        r#"h1[dir="ltr"]"#,
        r#"span[dir="ltr"] h1"#,
        r#"meta[property="og:title"]"#,
        "h1",
        "h1 span",
        r#"[role="main"] h1"#,
        r#"[data-pagelet="ProfileCover"] h1"#,
        r#"div[data-testid="page-header"] h1"#,
        r#"div[role="main"] div:first-child h1"#,
        r#"span[dir="auto"]"#,
    ],
    name_deny: &[
        "Facebook",
        "Log in",
        "Sign up",
        "Home",
        "Photos",
        "About",
        "Posts",
        "Page ·",
        "Local business",
        "@",
        "(",
        "$",
        "Rating",
        "Review",
    ],
    max_name_len: 100,
    address_probes: &[
        AddressProbe::First(r#"[data-testid="page-location"]"#),
        AddressProbe::First(r#"[data-testid="address-section"]"#),
        AddressProbe::First(r#"div[aria-label*="Address"]"#),
        AddressProbe::First(r#"div[aria-label*="Location"]"#),
        AddressProbe::First(r#"a[href*="maps.google.com"]"#),
        AddressProbe::First(r#"a[href*="maps.app.goo.gl"]"#),
        AddressProbe::Containing {
            selector: r#"[data-testid="page_info_item"]"#,
            needle: "Address",
        },
        AddressProbe::Containing {
            selector: "div",
            needle: "Address",
        },
        AddressProbe::Containing {
            selector: "span",
            needle: "Address",
        },
        AddressProbe::Containing {
            selector: "div",
            needle: "Location",
        },
        AddressProbe::Containing {
            selector: "span",
            needle: "Location",
        },
        AddressProbe::Containing {
            selector: r#"div[role="main"] div"#,
            needle: ",",
        },
        AddressProbe::Containing {
            selector: r#"div[role="main"] span"#,
            needle: ",",
        },
        AddressProbe::First(r#"a[href*="place"]"#),
        AddressProbe::First(r#"a[href*="location"]"#),
        AddressProbe::First(r#"[data-testid="page_info"] div"#),
    ],
    address_deny: &[
        "Facebook",
        "See all",
        "Photos",
        "Reviews",
        "Page ·",
        "Local business",
        "@",
        "(",
        "$",
        "Rating",
        "Not yet rated",
    ],
    fallback_address_deny: &["©"],
    fallback_containers: "div, span",
    clean_address,
};

/// Markers that make a Facebook URL a business profile, tried in order.
pub(crate) const PROFILE_MARKERS: &[&str] = &[
    r#"h1[data-testid="page-title"]"#,
    r#"[data-testid="page-location"]"#,
    r#"[data-testid="page-contact-info"]"#,
    r#"div[aria-label*="Business"]"#,
    r#"div[aria-label*="Company"]"#,
];
