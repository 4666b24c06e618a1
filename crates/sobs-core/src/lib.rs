//! Shared domain types and configuration for the share-of-search tool.

pub mod app_config;
pub mod brands;
pub mod config;
pub mod month;
pub mod provider;
pub mod settings;
pub mod types;

pub use app_config::{AppConfig, Environment, GoogleAdsCredentials};
pub use brands::{load_brands, Brand, BrandsFile, BRAND_PALETTE};
pub use config::{load_app_config, load_app_config_from_env};
pub use month::YearMonth;
pub use provider::{KeywordVolumeProvider, VolumeRequest};
pub use settings::{Granularity, Location, Network, Settings};
pub use types::{Period, ResultRow, Sample};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid month '{0}': expected YYYY-MM")]
    InvalidYearMonth(String),

    #[error("month {0} is out of range; must be 1-12")]
    MonthOutOfRange(u32),

    #[error("invalid granularity '{0}': expected monthly, quarterly, or yearly")]
    InvalidGranularity(String),

    #[error("invalid network '{0}': expected GOOGLE_SEARCH or GOOGLE_SEARCH_AND_PARTNERS")]
    InvalidNetwork(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("brands validation failed: {0}")]
    Validation(String),
}
