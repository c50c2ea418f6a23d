//! Shared domain types, collaborator traits, and configuration for leadscout.

pub mod app_config;
pub mod config;
pub mod listings;
pub mod ports;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use listings::{
    FetchHalt, FetchedListings, Listing, ProbeOutcome, ResultRecord, SearchQuery, EMAIL_NOT_FOUND,
    NOTHING_HERE,
};
pub use ports::{ListingSource, NoopObserver, PageProber, ProgressObserver, QueryNormalizer};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
