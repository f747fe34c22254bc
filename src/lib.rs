//! linkedin2md: export a public LinkedIn profile as markdown
//!
//! This crate renders a public profile page, extracts its named sections
//! (headline, summary, experience, education, ...) from the resulting
//! markup and emits them as a markdown document.

pub mod config;
pub mod extract;
pub mod fetcher;
pub mod output;
pub mod pipeline;

use thiserror::Error;

/// Main error type for profile conversion
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] fetcher::FetchError),

    #[error("Invalid profile identifier: '{0}'")]
    InvalidIdentifier(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for profile conversion
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{FieldRecord, Layout, ProfileDocument, SectionDescriptor, SECTIONS};
pub use fetcher::{ChromeRenderer, Fetcher, HttpRenderer, PageRenderer};
pub use pipeline::Coordinator;
