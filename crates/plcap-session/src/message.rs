//! Page <-> background message handling.
//!
//! The scraping context cannot make cross-origin requests or own the
//! selection menu, so it asks the background context to do both. Each
//! request gets exactly one reply.

use plcap_core::Field;
use plcap_registry::{ProxyRequest, ProxyResponse, RegistryClient};
use serde::{Deserialize, Serialize};

use crate::dataset::LocationDatasetStore;
use crate::detect::PageEvent;
use crate::error::StoreError;
use crate::menu::{build_capture_menu, parse_menu_id, MenuItem};
use crate::store::KeyValueStore;

/// Requests the page context sends to the background context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum BackgroundRequest {
    /// Rebuild the selection menu for `count` locations.
    UpdateLocationCount { count: usize },
    /// Perform an HTTP call on the page's behalf.
    MakeApiRequest(ProxyRequest),
    GetActiveTab,
}

/// Requests the background context sends to the page context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PageRequest {
    /// Store the selected text into one field of one location.
    #[serde(rename_all = "camelCase")]
    SaveFacilityData {
        field: Field,
        location_index: usize,
        #[serde(default)]
        text: String,
    },
    LinkedInAboutPageLoaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: u64,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BackgroundReply {
    Ack {
        success: bool,
    },
    Api(ProxyResponse),
    Tab {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        tab: Option<TabInfo>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// Background context: owns the selection menu and the outbound transport.
pub struct Background {
    client: RegistryClient,
    menu: Vec<MenuItem>,
    active_tab: Option<TabInfo>,
}

impl Background {
    #[must_use]
    pub fn new(client: RegistryClient) -> Self {
        Self {
            client,
            menu: build_capture_menu(1),
            active_tab: None,
        }
    }

    #[must_use]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn set_active_tab(&mut self, tab: Option<TabInfo>) {
        self.active_tab = tab;
    }

    pub async fn handle(&mut self, request: BackgroundRequest) -> BackgroundReply {
        match request {
            BackgroundRequest::UpdateLocationCount { count } => {
                self.menu = build_capture_menu(count);
                tracing::debug!(count, items = self.menu.len(), "rebuilt capture menu");
                BackgroundReply::Ack { success: true }
            }
            BackgroundRequest::MakeApiRequest(proxy) => {
                BackgroundReply::Api(self.client.proxy(&proxy).await)
            }
            BackgroundRequest::GetActiveTab => match &self.active_tab {
                Some(tab) => BackgroundReply::Tab {
                    success: true,
                    tab: Some(tab.clone()),
                    error: None,
                },
                None => BackgroundReply::Tab {
                    success: false,
                    tab: None,
                    error: Some("No active tab found".to_string()),
                },
            },
        }
    }

    /// Turns a click on a field item into a save request for the page.
    #[must_use]
    pub fn on_menu_click(&self, menu_id: &str, selection: &str) -> Option<PageRequest> {
        let (field, location_index) = parse_menu_id(menu_id)?;
        Some(PageRequest::SaveFacilityData {
            field,
            location_index,
            text: selection.to_string(),
        })
    }

    /// Notifies the page when a LinkedIn About page has finished loading.
    #[must_use]
    pub fn on_tab_loaded(url: &str) -> Option<PageRequest> {
        (url.contains("linkedin.com") && url.contains("/about"))
            .then_some(PageRequest::LinkedInAboutPageLoaded)
    }
}

impl PageRequest {
    /// Applies the request in the page context.
    ///
    /// Returns the detection event it implies, if any. Blank selections are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the dataset cannot be persisted.
    pub fn apply<S: KeyValueStore>(
        self,
        dataset: &mut LocationDatasetStore<S>,
    ) -> Result<Option<PageEvent>, StoreError> {
        match self {
            PageRequest::SaveFacilityData {
                field,
                location_index,
                text,
            } => {
                if text.trim().is_empty() {
                    tracing::debug!(field = field.key(), "ignoring empty selection");
                } else {
                    dataset.write_field(location_index, field, &text)?;
                }
                Ok(None)
            }
            PageRequest::LinkedInAboutPageLoaded => Ok(Some(PageEvent::AboutPageLoaded)),
        }
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
