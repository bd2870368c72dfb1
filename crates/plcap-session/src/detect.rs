//! Detection driver: runs the extraction pipeline on a delay schedule after
//! load, on first scroll and first click, on client-side navigation, and
//! when the host reports that an About page finished loading.

use std::collections::VecDeque;
use std::time::Duration;

use plcap_core::DetectionLimits;
use plcap_extract::{run_snapshot, Extraction, PageSnapshot};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::session::SessionState;
use crate::trigger::{Interaction, OneShotTriggers};

/// Supplies the document as currently rendered.
pub trait PageSource {
    /// `None` while nothing is loaded.
    fn snapshot(&mut self) -> Option<PageSnapshot>;
}

/// Delays after page load (or navigation) at which detection runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySchedule {
    delays: Vec<Duration>,
}

impl RetrySchedule {
    /// Offsets measured from load, not from the previous attempt.
    #[must_use]
    pub fn from_millis(delays: &[u64]) -> Self {
        Self {
            delays: delays.iter().copied().map(Duration::from_millis).collect(),
        }
    }

    #[must_use]
    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    fn deadlines(&self, start: Instant) -> VecDeque<Instant> {
        self.delays.iter().map(|delay| start + *delay).collect()
    }
}

/// Input from the hosting page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Interaction(Interaction),
    /// The URL changed without a document reload.
    Navigated(String),
    AboutPageLoaded,
}

/// Output for the review surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetectionEvent {
    Detected { url: String, extraction: Extraction },
    /// A recognized business page on which every strategy missed, reported
    /// once the schedule is exhausted.
    NothingFound { url: String },
}

pub struct DetectionDriver<P> {
    source: P,
    limits: DetectionLimits,
    schedule: RetrySchedule,
    session: SessionState,
    triggers: OneShotTriggers,
}

impl<P: PageSource> DetectionDriver<P> {
    #[must_use]
    pub fn new(
        source: P,
        limits: DetectionLimits,
        schedule: RetrySchedule,
        url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            limits,
            schedule,
            session: SessionState::new(url),
            triggers: OneShotTriggers::default(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Runs until `events` is closed and no scheduled attempt remains.
    ///
    /// Returns the final session state. Stops early if `results` is closed.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<PageEvent>,
        results: mpsc::Sender<DetectionEvent>,
    ) -> SessionState {
        let mut pending = self.schedule.deadlines(Instant::now());
        let mut events_open = true;

        loop {
            if !events_open && pending.is_empty() {
                break;
            }
            let next = pending.front().copied();

            let outcome = tokio::select! {
                event = events.recv(), if events_open => match event {
                    Some(event) => self.handle(event, &mut pending),
                    None => {
                        events_open = false;
                        None
                    }
                },
                () = sleep_until(next.unwrap_or_else(Instant::now)), if next.is_some() => {
                    pending.pop_front();
                    self.attempt("schedule", pending.is_empty())
                }
            };

            if let Some(outcome) = outcome {
                if results.send(outcome).await.is_err() {
                    tracing::debug!("detection results receiver closed");
                    break;
                }
            }
        }
        self.session
    }

    fn handle(
        &mut self,
        event: PageEvent,
        pending: &mut VecDeque<Instant>,
    ) -> Option<DetectionEvent> {
        match event {
            PageEvent::Interaction(kind) => {
                if self.triggers.fire(kind) {
                    self.attempt("interaction", pending.is_empty())
                } else {
                    None
                }
            }
            PageEvent::Navigated(url) => {
                if !self.session.navigate(&url) {
                    return None;
                }
                tracing::debug!(url, "client-side navigation");
                *pending = self.schedule.deadlines(Instant::now());
                self.attempt("navigation", pending.is_empty())
            }
            PageEvent::AboutPageLoaded => self.attempt("about-page", pending.is_empty()),
        }
    }

    /// One synchronous pipeline pass.
    ///
    /// Skipped once the popup has been shown for this page view.
    /// `exhausted` marks the last chance this page view gets, which is when
    /// a miss is reported.
    pub fn attempt(&mut self, trigger: &'static str, exhausted: bool) -> Option<DetectionEvent> {
        if self.session.popup_shown() {
            tracing::trace!(trigger, "popup already shown for this page view");
            return None;
        }
        let Some(snapshot) = self.source.snapshot() else {
            tracing::debug!(trigger, "no document to scan");
            return None;
        };

        let extraction = run_snapshot(&snapshot, &self.limits);
        if !extraction.records.is_empty() {
            if !self.session.claim_popup() {
                return None;
            }
            tracing::info!(
                trigger,
                url = snapshot.url,
                count = extraction.records.len(),
                "locations detected"
            );
            return Some(DetectionEvent::Detected {
                url: snapshot.url,
                extraction,
            });
        }

        if exhausted
            && extraction.classification.is_recognized_business_page
            && self.session.claim_nothing_found()
        {
            tracing::info!(trigger, url = snapshot.url, "could not find business info");
            return Some(DetectionEvent::NothingFound { url: snapshot.url });
        }
        tracing::debug!(trigger, "detection attempt found nothing");
        None
    }
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
