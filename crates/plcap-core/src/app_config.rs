use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Registry deployment that submissions and lookups are sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Staging => "https://staging.opensupplyhub.org/api",
            Environment::Production => "https://opensupplyhub.org/api",
        }
    }

    /// Upper-case label shown next to anything that will hit this environment.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Environment::Staging => "STAGING",
            Environment::Production => "PRODUCTION",
        }
    }

    /// Storage key holding this environment's API key.
    #[must_use]
    pub fn api_key_storage_key(self) -> String {
        format!("apiKey_{self}")
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(CoreError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Upper bounds on the location-count estimates the page classifier makes.
///
/// These bound how many location slots a single noisy section can produce;
/// they are tuning values and can be overridden from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionLimits {
    /// Cap on the comma-density estimate for a locations list without cards.
    pub max_list_estimate: usize,
    /// Cap on the line-count estimate for a "Locations"/"Offices" detail value.
    pub max_detail_lines: usize,
    /// Cap on address-shaped regex matches in free about-text.
    pub max_text_matches: usize,
}

impl Default for DetectionLimits {
    fn default() -> Self {
        Self {
            max_list_estimate: 4,
            max_detail_lines: 3,
            max_text_matches: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub bulk_pause_ms: u64,
    pub retry_delays_ms: Vec<u64>,
    pub limits: DetectionLimits,
    pub source_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_defaults_to_staging() {
        assert_eq!(Environment::default(), Environment::Staging);
    }

    #[test]
    fn environment_parses_and_displays() {
        assert_eq!("Production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("staging".parse::<Environment>(), Ok(Environment::Staging));
        assert!("qa".parse::<Environment>().is_err());
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn api_key_storage_key_is_per_environment() {
        assert_eq!(Environment::Staging.api_key_storage_key(), "apiKey_staging");
        assert_eq!(
            Environment::Production.api_key_storage_key(),
            "apiKey_production"
        );
    }

    #[test]
    fn base_urls_differ() {
        assert_ne!(
            Environment::Staging.base_url(),
            Environment::Production.base_url()
        );
    }
}
