/// Per-page-view flags for the detection driver.
///
/// A "page view" starts at load and at every detected client-side
/// navigation to a different URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_url: Option<String>,
    popup_shown: bool,
    nothing_found_reported: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            current_url: Some(url.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    #[must_use]
    pub fn popup_shown(&self) -> bool {
        self.popup_shown
    }

    /// Claims the result popup for this page view. Returns `false` if it was
    /// already shown.
    pub fn claim_popup(&mut self) -> bool {
        !std::mem::replace(&mut self.popup_shown, true)
    }

    /// Claims the one "nothing found" notice for this page view.
    pub fn claim_nothing_found(&mut self) -> bool {
        !std::mem::replace(&mut self.nothing_found_reported, true)
    }

    /// Starts a new page view if `url` differs from the current one.
    /// Returns whether it did.
    pub fn navigate(&mut self, url: &str) -> bool {
        if self.current_url.as_deref() == Some(url) {
            return false;
        }
        *self = Self::new(url);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_claimed_once_per_page_view() {
        let mut state = SessionState::new("https://www.facebook.com/acme");
        assert!(state.claim_popup());
        assert!(!state.claim_popup());
        assert!(state.navigate("https://www.facebook.com/acme/about"));
        assert!(state.claim_popup());
    }

    #[test]
    fn same_url_navigation_keeps_flags() {
        let mut state = SessionState::new("https://www.linkedin.com/company/acme/about/");
        assert!(state.claim_nothing_found());
        assert!(!state.navigate("https://www.linkedin.com/company/acme/about/"));
        assert!(!state.claim_nothing_found());
    }
}
