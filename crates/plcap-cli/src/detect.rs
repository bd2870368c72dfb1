//! Detection commands over saved page snapshots.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use plcap_core::AppConfig;
use plcap_extract::{run_snapshot, Extraction, PageSnapshot};
use plcap_session::{
    build_capture_menu, DetectionDriver, DetectionEvent, Interaction, JsonFileStore,
    LocationDatasetStore, PageEvent, PageSource, RetrySchedule,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub(crate) fn run_detect(
    store: JsonFileStore,
    config: &AppConfig,
    url: &str,
    html: &Path,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(html)
        .with_context(|| format!("failed to read {}", html.display()))?;
    let extraction = run_snapshot(&PageSnapshot::new(url, html), &config.limits);

    if json {
        println!("{}", serde_json::to_string_pretty(&extraction)?);
    } else {
        print_extraction(&extraction);
    }
    if dry_run || extraction.records.is_empty() {
        return Ok(());
    }

    let mut dataset = LocationDatasetStore::open(store)?;
    store_extraction(&mut dataset, url, &extraction)?;
    Ok(())
}

/// Page source backed by a file that may change between attempts.
struct FileSource {
    url: Arc<Mutex<String>>,
    path: PathBuf,
}

impl PageSource for FileSource {
    fn snapshot(&mut self) -> Option<PageSnapshot> {
        let html = match std::fs::read_to_string(&self.path) {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "page not available");
                return None;
            }
        };
        let url = self.url.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Some(PageSnapshot::new(url, html))
    }
}

pub(crate) async fn run_watch(
    store: JsonFileStore,
    config: &AppConfig,
    url: String,
    html: PathBuf,
) -> anyhow::Result<()> {
    let mut dataset = LocationDatasetStore::open(store)?;
    let current_url = Arc::new(Mutex::new(url.clone()));
    let source = FileSource {
        url: Arc::clone(&current_url),
        path: html,
    };
    let schedule = RetrySchedule::from_millis(&config.retry_delays_ms);
    let driver = DetectionDriver::new(source, config.limits, schedule, url);

    let (events_tx, events_rx) = mpsc::channel(16);
    let (results_tx, mut results_rx) = mpsc::channel(16);
    tokio::spawn(read_page_events(events_tx, current_url));
    let driver = tokio::spawn(driver.run(events_rx, results_tx));

    while let Some(event) = results_rx.recv().await {
        match event {
            DetectionEvent::Detected { url, extraction } => {
                print_extraction(&extraction);
                store_extraction(&mut dataset, &url, &extraction)?;
            }
            DetectionEvent::NothingFound { url } => {
                println!("Could not find business info on {url}");
            }
        }
    }
    driver.await.context("detection driver panicked")?;
    Ok(())
}

/// Forwards stdin lines as page events until EOF.
async fn read_page_events(events: mpsc::Sender<PageEvent>, current_url: Arc<Mutex<String>>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read page events");
                break;
            }
        };
        let Some(event) = parse_page_event(&line) else {
            if !line.trim().is_empty() {
                eprintln!("unknown event: {line} (expected scroll, click, about or nav <url>)");
            }
            continue;
        };
        if let PageEvent::Navigated(url) = &event {
            *current_url.lock().unwrap_or_else(PoisonError::into_inner) = url.clone();
        }
        if events.send(event).await.is_err() {
            break;
        }
    }
}

fn parse_page_event(line: &str) -> Option<PageEvent> {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some(("nav", url)) if !url.trim().is_empty() => {
            Some(PageEvent::Navigated(url.trim().to_string()))
        }
        _ => match line {
            "scroll" => Some(PageEvent::Interaction(Interaction::Scroll)),
            "click" => Some(PageEvent::Interaction(Interaction::Click)),
            "about" => Some(PageEvent::AboutPageLoaded),
            _ => None,
        },
    }
}

fn store_extraction(
    dataset: &mut LocationDatasetStore<JsonFileStore>,
    url: &str,
    extraction: &Extraction,
) -> anyhow::Result<()> {
    dataset.replace_all(extraction.records.clone())?;
    dataset.set_source(url, extraction.classification.network.source_suffix())?;

    let menu = build_capture_menu(dataset.detected_count());
    if let Some(root) = menu.first() {
        println!("{}", root.title);
    }
    Ok(())
}

fn print_extraction(extraction: &Extraction) {
    let classification = &extraction.classification;
    if !classification.is_recognized_business_page {
        println!("Not a recognized business page");
        return;
    }
    println!(
        "{:?} business page, {} location(s) estimated",
        classification.network, classification.location_count
    );
    if extraction.records.is_empty() {
        println!("Could not find business info");
        return;
    }
    for (index, record) in extraction.records.iter().enumerate() {
        let country = if record.country.is_empty() { "??" } else { &record.country };
        println!("{:>3}. {} | {} | {country}", index + 1, record.name, record.address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_event_lines() {
        assert_eq!(
            parse_page_event(" scroll "),
            Some(PageEvent::Interaction(Interaction::Scroll))
        );
        assert_eq!(parse_page_event("about"), Some(PageEvent::AboutPageLoaded));
        assert_eq!(
            parse_page_event("nav https://www.linkedin.com/company/acme/about/"),
            Some(PageEvent::Navigated(
                "https://www.linkedin.com/company/acme/about/".to_string()
            ))
        );
        assert_eq!(parse_page_event("nav"), None);
        assert_eq!(parse_page_event("jump"), None);
    }
}
