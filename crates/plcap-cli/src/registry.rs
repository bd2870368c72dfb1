//! Registry commands: environment and key management, parent-company
//! lookup, and submission.

use std::time::Duration;

use plcap_core::{AppConfig, Environment};
use plcap_registry::OutcomeStatus;
use plcap_session::{
    settings, submit_current, submit_dataset, JsonFileStore, LocationDatasetStore,
};

pub(crate) fn run_env(
    mut store: JsonFileStore,
    environment: Option<Environment>,
) -> anyhow::Result<()> {
    match environment {
        Some(environment) => {
            settings::select_environment(&mut store, environment)?;
            println!("Environment set to {}", environment.label());
        }
        None => {
            let environment = settings::selected_environment(&store)?;
            let has_key = settings::api_key(&store, environment)?.is_some();
            println!(
                "{} ({}){}",
                environment.label(),
                environment.base_url(),
                if has_key { "" } else { " - no API key saved" }
            );
        }
    }
    Ok(())
}

pub(crate) fn run_key(
    mut store: JsonFileStore,
    environment: Option<Environment>,
    key: &str,
) -> anyhow::Result<()> {
    if key.trim().is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    let environment = match environment {
        Some(environment) => environment,
        None => settings::selected_environment(&store)?,
    };
    settings::save_api_key(&mut store, environment, key)?;
    println!("API key saved for {}", environment.label());
    Ok(())
}

pub(crate) async fn run_lookup(
    store: &JsonFileStore,
    config: &AppConfig,
    query: &str,
) -> anyhow::Result<()> {
    let client = settings::registry_client(store, config.request_timeout_secs)?;
    let suggestions = client.search_parent_companies(query).await?;
    if suggestions.is_empty() {
        println!("No matches");
    }
    for company in suggestions {
        println!("{}", company.name);
    }
    Ok(())
}

pub(crate) async fn run_submit(
    store: JsonFileStore,
    config: &AppConfig,
    all: bool,
) -> anyhow::Result<()> {
    let environment = settings::selected_environment(&store)?;
    let client = settings::registry_client(&store, config.request_timeout_secs)?;
    let mut dataset = LocationDatasetStore::open(store)?;

    if !all {
        println!("Submitting to {}", environment.label());
        let receipt = submit_current(&mut dataset, &client, &config.source_name).await?;
        println!("{}", receipt.summary());
        return Ok(());
    }

    println!(
        "Submitting {} locations to {}",
        dataset.len(),
        environment.label()
    );
    let pause = Duration::from_millis(config.bulk_pause_ms);
    let report = submit_dataset(&mut dataset, &client, &config.source_name, pause).await?;
    for outcome in &report.outcomes {
        let detail = match &outcome.status {
            OutcomeStatus::Submitted { receipt } => receipt.summary(),
            OutcomeStatus::Failed { reason } => format!("Failed: {reason}"),
        };
        println!("{:>3}. {} - {detail}", outcome.index + 1, outcome.name);
    }
    println!("{}", report.summary());
    if !report.is_complete_success() {
        anyhow::bail!("{} of {} submissions failed", report.failed, report.outcomes.len());
    }
    Ok(())
}
