//! Session state for one browsing context: the persisted store, the location
//! dataset, detection scheduling, the capture menu and page/background
//! messaging.

pub mod dataset;
pub mod detect;
pub mod error;
pub mod menu;
pub mod message;
pub mod session;
pub mod settings;
pub mod store;
pub mod submit;
pub mod trigger;

pub use dataset::{CaptureSource, LocationDatasetStore, MAX_LOCATIONS};
pub use detect::{DetectionDriver, DetectionEvent, PageEvent, PageSource, RetrySchedule};
pub use error::{SessionError, StoreError};
pub use menu::{build_capture_menu, parse_menu_id, MenuItem, ROOT_MENU_ID};
pub use message::{Background, BackgroundReply, BackgroundRequest, PageRequest, TabInfo};
pub use session::SessionState;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use submit::{submit_current, submit_dataset};
pub use trigger::{Interaction, OneShot, OneShotTriggers};
