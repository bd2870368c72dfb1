//! Parsed page snapshots and DOM helpers shared by every extractor.

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// Raw page content captured by whatever is hosting the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub url: String,
    pub html: String,
}

impl PageSnapshot {
    #[must_use]
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Social network a page belongs to, decided by host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Facebook,
    LinkedIn,
    Other,
}

impl Network {
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let Some(host) = url.host_str() else {
            return Network::Other;
        };
        let host = host.to_ascii_lowercase();
        if host_matches(&host, "facebook.com") {
            Network::Facebook
        } else if host_matches(&host, "linkedin.com") {
            Network::LinkedIn
        } else {
            Network::Other
        }
    }

    /// Suffix appended to the configured source name on submission.
    #[must_use]
    pub fn source_suffix(self) -> Option<&'static str> {
        match self {
            Network::Facebook => Some("Facebook"),
            Network::LinkedIn => Some("LinkedIn"),
            Network::Other => None,
        }
    }
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{domain}"))
}

/// A parsed document plus the URL it was loaded from.
///
/// `scraper::Html` is not `Send`, so a `Page` lives only for the duration of
/// one synchronous extraction pass.
pub struct Page {
    url: Url,
    network: Network,
    document: Html,
    title: String,
}

impl Page {
    /// Parse a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidUrl`] if the snapshot URL is not absolute.
    pub fn parse(snapshot: &PageSnapshot) -> Result<Self, PageError> {
        Self::from_html(&snapshot.url, &snapshot.html)
    }

    /// # Errors
    ///
    /// Returns [`PageError::InvalidUrl`] if `url` is not absolute.
    pub fn from_html(url: &str, html: &str) -> Result<Self, PageError> {
        let url = Url::parse(url).map_err(|e| PageError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let document = Html::parse_document(html);
        let title = first_in(&document, "title")
            .map(element_text)
            .unwrap_or_default();
        Ok(Self {
            network: Network::from_url(&url),
            url,
            document,
            title,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn network(&self) -> Network {
        self.network
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// True on a LinkedIn company "About" page.
    #[must_use]
    pub fn is_about_page(&self) -> bool {
        self.network == Network::LinkedIn
            && self
                .url
                .path_segments()
                .is_some_and(|mut segments| segments.any(|s| s.eq_ignore_ascii_case("about")))
    }

    /// True when the URL points below the site root.
    #[must_use]
    pub fn has_non_root_path(&self) -> bool {
        let path = self.url.path().trim_matches('/');
        !path.is_empty() || self.url.query().is_some_and(|q| q.contains("id="))
    }

    /// First element matching `css`, or `None` (also for an invalid selector).
    #[must_use]
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        first_in(&self.document, css)
    }

    /// Every element matching `css` in document order.
    #[must_use]
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        let Some(selector) = parse_selector(css) else {
            return Vec::new();
        };
        self.document.select(&selector).collect()
    }

    #[must_use]
    pub fn exists(&self, css: &str) -> bool {
        self.select_first(css).is_some()
    }

    /// Visible text of the whole body.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.select_first("body")
            .map(element_text)
            .unwrap_or_default()
    }

    /// Resolve `href` against the page URL.
    #[must_use]
    pub fn resolve(&self, href: &str) -> Option<Url> {
        self.url.join(href).ok()
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url.as_str())
            .field("network", &self.network)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

pub(crate) fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!(css, error = %e, "skipping unparseable selector");
            None
        }
    }
}

fn first_in<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    document.select(&selector).next()
}

/// First descendant of `element` matching `css`.
pub(crate) fn select_within<'a>(element: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    element.select(&selector).next()
}

/// Trimmed concatenation of an element's text, skipping script and style
/// bodies.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|parent| matches!(parent.value().name(), "script" | "style" | "noscript"));
        if !hidden {
            out.push_str(text);
        }
    }
    out.trim().to_string()
}

/// The next sibling element of `element`, skipping text nodes.
pub(crate) fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}
