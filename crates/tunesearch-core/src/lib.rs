//! Domain types and configuration shared by the tunesearch crates.
//!
//! [`StoreItem`] and [`SearchResponse`] model the iTunes Search API JSON
//! contract, [`SearchQuery`] builds the parameter map sent to the search
//! endpoint, and [`load_app_config`] reads runtime settings from the
//! environment.

pub mod app_config;
pub mod config;
pub mod items;
pub mod query;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_SEARCH_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use items::{SearchResponse, StoreItem};
pub use query::{MediaType, SearchParameters, SearchQuery};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
