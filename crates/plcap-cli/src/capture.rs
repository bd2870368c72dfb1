//! Dataset commands: selection capture, the review form, and reset.

use anyhow::Context;
use plcap_core::{find_product_type, find_sector, resolve_country_code, AppConfig, Field};
use plcap_registry::RegistryClient;
use plcap_session::{
    build_capture_menu, settings, Background, JsonFileStore, LocationDatasetStore, PageRequest,
};

/// Writes `text` to one location field, addressed by menu id or by field and
/// index.
///
/// A menu id goes through the same click handling as the background context.
pub(crate) fn run_capture(
    store: JsonFileStore,
    config: &AppConfig,
    menu_id: Option<&str>,
    field: Option<Field>,
    index: usize,
    text: &str,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("nothing selected");
    }
    let request = match (menu_id, field) {
        (Some(id), _) => {
            let environment = settings::selected_environment(&store)?;
            let client =
                RegistryClient::unauthenticated(environment, config.request_timeout_secs)?;
            Background::new(client)
                .on_menu_click(id, text)
                .with_context(|| format!("not a field menu item: {id}"))?
        }
        (None, Some(field)) => PageRequest::SaveFacilityData {
            field,
            location_index: index,
            text: text.to_string(),
        },
        (None, None) => anyhow::bail!("either --menu-id or --field is required"),
    };
    let target = match &request {
        PageRequest::SaveFacilityData {
            field,
            location_index,
            ..
        } => Some((*field, *location_index)),
        PageRequest::LinkedInAboutPageLoaded => None,
    };

    let mut dataset = LocationDatasetStore::open(store)?;
    request.apply(&mut dataset)?;
    if let Some((field, index)) = target {
        println!("Saved {} for location {}", field.label(), index + 1);
    }
    Ok(())
}

pub(crate) fn run_menu(store: JsonFileStore) -> anyhow::Result<()> {
    let dataset = LocationDatasetStore::open(store)?;
    for item in build_capture_menu(dataset.detected_count()) {
        let depth = match item.parent_id.as_deref() {
            None => 0,
            Some(parent) if parent == plcap_session::ROOT_MENU_ID => 1,
            Some(_) => 2,
        };
        println!("{}{}  [{}]", "  ".repeat(depth), item.title, item.id);
    }
    Ok(())
}

pub(crate) fn run_show(store: JsonFileStore, json: bool) -> anyhow::Result<()> {
    let dataset = LocationDatasetStore::open(store)?;
    if json {
        println!("{}", serde_json::to_string_pretty(dataset.records())?);
        return Ok(());
    }
    if dataset.is_empty() {
        println!("No locations captured");
        return Ok(());
    }

    let source = dataset.source()?;
    if !source.url.is_empty() {
        println!("Source: {}", source.url);
    }
    for (index, record) in dataset.records().iter().enumerate() {
        let marker = if index == dataset.current_index() { '*' } else { ' ' };
        let hq = if record.is_headquarters { " (headquarters)" } else { "" };
        println!("{marker} Location {}{hq}", index + 1);
        for field in Field::ALL {
            let value = record.get(field);
            if !value.is_empty() {
                println!("    {:<16} {value}", field.label());
            }
        }
    }
    Ok(())
}

pub(crate) fn run_select(store: JsonFileStore, index: usize) -> anyhow::Result<()> {
    let mut dataset = LocationDatasetStore::open(store)?;
    // Locations are shown 1-based.
    let slot = index.checked_sub(1).context("locations are numbered from 1")?;
    dataset.switch_current(slot)?;
    println!("Editing location {index}");
    Ok(())
}

/// Form edit of the current location. Country, sector and product type are
/// snapped to their canonical values when recognised.
pub(crate) fn run_edit(store: JsonFileStore, field: Field, value: &str) -> anyhow::Result<()> {
    let value = canonical_value(field, value);
    let mut dataset = LocationDatasetStore::open(store)?;
    dataset.write_current_field(field, &value)?;
    println!(
        "Location {}: {} = {value}",
        dataset.current_index() + 1,
        field.label()
    );
    Ok(())
}

fn canonical_value(field: Field, value: &str) -> String {
    let value = value.trim();
    let known = match field {
        Field::Country => resolve_country_code(value),
        Field::Sector => find_sector(value),
        Field::ProductType => find_product_type(value),
        Field::Name | Field::Address | Field::ParentCompany => None,
    };
    known.map_or_else(|| value.to_string(), str::to_string)
}

pub(crate) fn run_reset(store: JsonFileStore) -> anyhow::Result<()> {
    let mut dataset = LocationDatasetStore::open(store)?;
    dataset.clear()?;
    println!("Cleared all captured locations");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use plcap_core::DetectionLimits;
    use plcap_session::StoreError;

    use super::*;

    fn temp_store(name: &str) -> (PathBuf, JsonFileStore) {
        let path = std::env::temp_dir()
            .join(format!("plcap-capture-test-{}", std::process::id()))
            .join(name);
        let _ = std::fs::remove_file(&path);
        let store = JsonFileStore::open(&path).unwrap();
        (path, store)
    }

    fn test_config(store_path: PathBuf) -> AppConfig {
        AppConfig {
            store_path,
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            bulk_pause_ms: 0,
            retry_delays_ms: Vec::new(),
            limits: DetectionLimits::default(),
            source_name: "test".to_string(),
        }
    }

    #[test]
    fn capture_by_menu_id_writes_the_addressed_location() {
        let (path, store) = temp_store("menu-id.json");
        let config = test_config(path.clone());
        run_capture(store, &config, Some("os-hub-address-loc-2"), None, 0, " 9 Dock Rd ").unwrap();

        let dataset = LocationDatasetStore::open(JsonFileStore::open(&path).unwrap()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[2].address, "9 Dock Rd");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn capture_rejects_unusable_menu_ids_and_indices() {
        let (path, store) = temp_store("bad-id.json");
        let config = test_config(path.clone());
        let err = run_capture(store, &config, Some("os-hub-name-loc-x"), None, 0, "Acme")
            .unwrap_err();
        assert!(err.to_string().contains("not a field menu item"));

        let store = JsonFileStore::open(&path).unwrap();
        let err = run_capture(store, &config, None, Some(Field::Name), usize::MAX, "Acme")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::IndexOutOfRange { .. })
        ));
        let dataset = LocationDatasetStore::open(JsonFileStore::open(&path).unwrap()).unwrap();
        assert!(dataset.is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn canonical_value_resolves_country_names() {
        assert_eq!(canonical_value(Field::Country, " united kingdom "), "GB");
        assert_eq!(canonical_value(Field::Country, "Atlantis"), "Atlantis");
    }

    #[test]
    fn canonical_value_leaves_free_text_alone() {
        assert_eq!(canonical_value(Field::Name, "  Acme  "), "Acme");
    }
}
