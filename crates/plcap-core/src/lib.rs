pub mod app_config;
pub mod config;
pub mod country;
pub mod record;
pub mod taxonomy;

pub use app_config::{AppConfig, DetectionLimits, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use country::{country_name, resolve_country_code, Country, COUNTRIES};
pub use record::{Field, LocationRecord};
pub use taxonomy::{find_product_type, find_sector, PRODUCT_TYPES, SECTORS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown location field: {0}")]
    UnknownField(String),

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}
