use plcap_core::DetectionLimits;

use super::*;

const ABOUT_URL: &str = "https://www.linkedin.com/company/test-manufacturing/about/";

fn run_html(url: &str, html: &str) -> Extraction {
    let page = Page::from_html(url, html).unwrap();
    run(&page, &DetectionLimits::default())
}

const MULTI_LOCATION: &str = r#"<!DOCTYPE html>
<html>
<head><title>Test Company | LinkedIn</title></head>
<body>
  <div class="org-top-card-summary__title">
    <h1>Test Manufacturing Co</h1>
  </div>
  <div class="org-top-card-summary__headquarter">
    123 Main Street, Chicago, IL 60601, United States
  </div>
  <div class="org-page-details">
    <dt>Locations</dt>
    <dd>456 Factory Road, Detroit, MI 48201
        789 Assembly Lane, Buffalo, NY 14201</dd>
  </div>
</body>
</html>"#;

// -----------------------------------------------------------------------
// LinkedIn
// -----------------------------------------------------------------------

#[test]
fn linkedin_headquarters_and_offices() {
    let result = run_html(ABOUT_URL, MULTI_LOCATION);
    assert_eq!(result.business_name, "Test Manufacturing Co");
    assert_eq!(result.records.len(), 3);

    let hq = &result.records[0];
    assert_eq!(hq.name, "Test Manufacturing Co");
    assert_eq!(hq.address, "123 Main Street, Chicago, IL 60601, United States");
    assert_eq!(hq.country, "US");
    assert!(hq.is_headquarters);

    assert_eq!(result.records[1].name, "Office 2");
    assert_eq!(result.records[1].address, "456 Factory Road, Detroit, MI 48201");
    assert_eq!(result.records[1].country, "US");
    assert!(!result.records[1].is_headquarters);
    assert_eq!(result.records[2].name, "Office 3");
    assert_eq!(result.records[2].address, "789 Assembly Lane, Buffalo, NY 14201");
}

#[test]
fn linkedin_offices_without_headquarters_lead_with_business_name() {
    let result = run_html(
        "https://www.linkedin.com/company/acme-textiles/about/",
        r#"<html><head><title>Acme Textiles | LinkedIn</title></head><body>
           <div class="org-top-card-summary__title"><h1>Acme Textiles</h1></div>
           <div class="org-page-details">
             <dt>Locations</dt><dd>4 Park Row, Leeds LS1 4AP, United Kingdom</dd>
             <dt>Offices</dt><dd>9 Quay St, Dublin D02 X285, Ireland</dd>
           </div>
           </body></html>"#,
    );
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].name, "Acme Textiles");
    assert_eq!(result.records[0].address, "4 Park Row, Leeds LS1 4AP, United Kingdom");
    assert!(!result.records[0].is_headquarters);
    assert_eq!(result.records[1].name, "Office 2");
    assert_eq!(result.records[1].address, "9 Quay St, Dublin D02 X285, Ireland");
}

#[test]
fn linkedin_about_page_without_address_gets_placeholder() {
    let result = run_html(
        "https://www.linkedin.com/company/minimal/about/",
        r#"<html><head><title>Minimal Company | LinkedIn</title></head><body>
           <div class="org-top-card-summary__title"><h1>Minimal Corp</h1></div>
           </body></html>"#,
    );
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].name, "Minimal Corp");
    assert_eq!(result.records[0].address, "");
    assert_eq!(result.records[0].country, "");
}

#[test]
fn linkedin_non_about_page_yields_nothing() {
    let result = run_html(
        "https://www.linkedin.com/company/test-manufacturing/",
        MULTI_LOCATION,
    );
    assert!(!result.classification.is_recognized_business_page);
    assert!(result.records.is_empty());
}

#[test]
fn location_cards_are_authoritative_and_primary_first() {
    let html = r#"
      <div class="org-top-card-summary__title"><h1>Cascade Outfitters</h1></div>
      <div class="org-top-card-summary__headquarter">999 Ignored Rd, Nowhere, KS 66002</div>
      <section class="org-locations-module">
        <div class="org-location-card">
          <p class="org-location-card__address">500 Second Ave, Portland, OR 97201</p>
        </div>
        <div class="org-location-card">
          <span class="org-location-card__primary-tag">Primary</span>
          <p class="org-location-card__address">1 Main St, Seattle, WA 98101</p>
        </div>
      </section>
      <dt>Locations</dt><dd>42 Elsewhere Ln, Boise, ID 83702</dd>"#;
    let result = run_html(ABOUT_URL, html);

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].name, "Cascade Outfitters");
    assert_eq!(result.records[0].address, "1 Main St, Seattle, WA 98101");
    assert!(result.records[0].is_headquarters);
    assert_eq!(result.records[1].name, "Office 2");
    assert_eq!(result.records[1].address, "500 Second Ave, Portland, OR 97201");
    assert!(!result.records[1].is_headquarters);
}

#[test]
fn headquarters_found_by_page_pattern() {
    let html = r#"
      <h1>Harbor Logistics</h1>
      <div class="org-page-details">
        <p>Our headquarters is at 77 Harbor Blvd, Long Beach, CA 90802.</p>
      </div>"#;
    let result = run_html(ABOUT_URL, html);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].address, "77 Harbor Blvd, Long Beach, CA 90802");
    assert_eq!(result.records[0].country, "US");
}

#[test]
fn headquarters_found_by_detail_pair() {
    let html = r#"
      <h1>Northwind</h1>
      <dl><dt>Headquarters</dt><dd>Redmond, Washington</dd></dl>"#;
    let result = run_html(ABOUT_URL, html);
    assert_eq!(result.records[0].address, "Redmond, Washington");
    assert_eq!(result.records[0].name, "Northwind");
}

#[test]
fn additional_offices_skip_headquarters_duplicate_and_respect_cap() {
    let html = r#"
      <h1>Acme</h1>
      <div class="org-top-card-summary__headquarter">1 Main St, Austin, TX 78701</div>
      <dt>Offices</dt>
      <dd>1 Main St, Austin, TX 78701
          2 Oak St, Dallas, TX 75201
          3 Elm St, Houston, TX 77001
          4 Pine St, Tulsa, OK 74101</dd>"#;
    let result = run_html(ABOUT_URL, html);
    let addresses: Vec<&str> = result.records.iter().map(|r| r.address.as_str()).collect();
    assert_eq!(
        addresses,
        vec![
            "1 Main St, Austin, TX 78701",
            "2 Oak St, Dallas, TX 75201",
            "3 Elm St, Houston, TX 77001",
        ]
    );
}

#[test]
fn headquarters_cascade_order() {
    let labels: Vec<&str> = linkedin::headquarters_strategies()
        .iter()
        .map(crate::extract::Strategy::label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "structural",
            "detail-pair",
            "page-pattern",
            "container-scan",
            "city-state"
        ]
    );
}

// -----------------------------------------------------------------------
// Facebook
// -----------------------------------------------------------------------

#[test]
fn facebook_single_record() {
    let result = run_html(
        "https://www.facebook.com/acmewidgets",
        r#"<h1 data-testid="page-title">Acme Widgets · Manufacturer</h1>
           <div data-testid="page-location">123 Industrial Way, Example City, CA 90210, US</div>"#,
    );
    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.name, "Acme Widgets");
    assert_eq!(record.address, "123 Industrial Way, Example City, CA 90210, US");
    assert_eq!(record.country, "US");
}

#[test]
fn facebook_fallback_recovers_address() {
    let result = run_html(
        "https://www.facebook.com/acmewidgets",
        r#"<h1 data-testid="page-title">Acme Widgets</h1>
           <section><span>58777 Godley Rd, La Grande, OR 97850</span></section>"#,
    );
    assert_eq!(result.records[0].address, "58777 Godley Rd, La Grande, OR 97850");
}

#[test]
fn facebook_page_without_business_info_yields_nothing() {
    let result = run_html(
        "https://www.facebook.com/acmewidgets",
        "<section>Nothing here</section>",
    );
    assert!(result.classification.is_recognized_business_page);
    assert!(result.records.is_empty());
}

// -----------------------------------------------------------------------
// Snapshots
// -----------------------------------------------------------------------

#[test]
fn unparseable_snapshot_is_unrecognized() {
    let snapshot = PageSnapshot::new("not a url", "<h1>Acme</h1>");
    let result = run_snapshot(&snapshot, &DetectionLimits::default());
    assert!(!result.classification.is_recognized_business_page);
    assert!(result.records.is_empty());
}

#[test]
fn extraction_serializes_camel_case() {
    let result = run_html(ABOUT_URL, MULTI_LOCATION);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["businessName"], "Test Manufacturing Co");
    assert_eq!(json["classification"]["locationCount"], 3);
    assert_eq!(json["records"][0]["isHeadquarters"], true);
}
