//! Selection context-menu model.
//!
//! Ids encode the target field and location index so a click can be turned
//! back into a dataset write with [`parse_menu_id`].

use plcap_core::Field;
use serde::Serialize;

pub const ROOT_MENU_ID: &str = "os-hub-menu";
const ID_PREFIX: &str = "os-hub-";
const LOCATION_PREFIX: &str = "os-hub-location-";
const INDEX_MARKER: &str = "-loc-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub title: String,
}

impl MenuItem {
    fn new(id: String, parent_id: Option<&str>, title: String) -> Self {
        Self {
            id,
            parent_id: parent_id.map(str::to_string),
            title,
        }
    }
}

/// Builds the menu for `count` detected locations, parents before children.
///
/// Up to one location gets six flat "Save as …" items; more get one submenu
/// per location.
#[must_use]
pub fn build_capture_menu(count: usize) -> Vec<MenuItem> {
    if count <= 1 {
        let mut items = vec![MenuItem::new(
            ROOT_MENU_ID.to_string(),
            None,
            "Save to Open Supply Hub".to_string(),
        )];
        items.extend(Field::ALL.into_iter().map(|field| {
            MenuItem::new(
                format!("{ID_PREFIX}{}", field.key()),
                Some(ROOT_MENU_ID),
                format!("Save as {}", field.label()),
            )
        }));
        return items;
    }

    let mut items = vec![MenuItem::new(
        ROOT_MENU_ID.to_string(),
        None,
        format!("Save to Open Supply Hub ({count} locations detected)"),
    )];
    for index in 0..count {
        let submenu_id = format!("{LOCATION_PREFIX}{index}");
        let title = if index == 0 {
            "Headquarters/Location 1".to_string()
        } else {
            format!("Location {}", index + 1)
        };
        items.push(MenuItem::new(submenu_id.clone(), Some(ROOT_MENU_ID), title));
        items.extend(Field::ALL.into_iter().map(|field| {
            MenuItem::new(
                format!("{ID_PREFIX}{}{INDEX_MARKER}{index}", field.key()),
                Some(submenu_id.as_str()),
                format!("Save as {}", field.label()),
            )
        }));
    }
    items
}

/// Field and location index a clicked menu item writes to.
///
/// Returns `None` for the root, for location submenus and for ids naming
/// no known field or carrying an unreadable index.
#[must_use]
pub fn parse_menu_id(id: &str) -> Option<(Field, usize)> {
    if id == ROOT_MENU_ID || id.starts_with(LOCATION_PREFIX) {
        return None;
    }
    let rest = id.strip_prefix(ID_PREFIX)?;
    let (field, index) = match rest.split_once(INDEX_MARKER) {
        Some((field, index)) => (field, index.trim().parse().ok()?),
        None => (rest, 0),
    };
    let field = Field::ALL.into_iter().find(|f| f.key() == field)?;
    Some((field, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_location_menu_is_flat() {
        let items = build_capture_menu(1);
        assert_eq!(items.len(), 7);
        assert_eq!(items[0].title, "Save to Open Supply Hub");
        assert!(items[1..]
            .iter()
            .all(|item| item.parent_id.as_deref() == Some(ROOT_MENU_ID)));
        assert_eq!(items[1].id, "os-hub-name");
        assert_eq!(items[1].title, "Save as Location Name");
        assert_eq!(build_capture_menu(0), items);
    }

    #[test]
    fn multi_location_menu_nests_fields_per_location() {
        let items = build_capture_menu(3);
        assert_eq!(items.len(), 1 + 3 * 7);
        assert_eq!(items[0].title, "Save to Open Supply Hub (3 locations detected)");
        assert_eq!(items[1].id, "os-hub-location-0");
        assert_eq!(items[1].title, "Headquarters/Location 1");
        assert_eq!(items[8].title, "Location 2");

        let last = items.last().unwrap();
        assert_eq!(last.id, "os-hub-parentCompany-loc-2");
        assert_eq!(last.parent_id.as_deref(), Some("os-hub-location-2"));
    }

    #[test]
    fn every_field_item_parses_back() {
        for item in build_capture_menu(4) {
            let parsed = parse_menu_id(&item.id);
            let is_field_item = item.id.contains("-loc-");
            assert_eq!(parsed.is_some(), is_field_item, "{}", item.id);
        }
        assert_eq!(
            parse_menu_id("os-hub-productType-loc-3"),
            Some((Field::ProductType, 3))
        );
        assert_eq!(parse_menu_id("os-hub-address"), Some((Field::Address, 0)));
    }

    #[test]
    fn non_field_ids_are_ignored() {
        assert_eq!(parse_menu_id(ROOT_MENU_ID), None);
        assert_eq!(parse_menu_id("os-hub-location-1"), None);
        assert_eq!(parse_menu_id("os-hub-phone"), None);
        assert_eq!(parse_menu_id("other-menu"), None);
        assert_eq!(parse_menu_id("os-hub-name-loc-x"), None);
        assert_eq!(parse_menu_id("os-hub-name-loc--1"), None);
        assert_eq!(parse_menu_id("os-hub-name-loc-99999999999999999999999"), None);
    }
}
