//! Configuration module for linkedin2md
//!
//! The command-line tool always runs with [`Config::default`]. Embedders can
//! load the same settings from a TOML document instead.
//!
//! # Example
//!
//! ```no_run
//! use linkedin2md::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkedin2md.toml")).unwrap();
//! println!("Profiles are loaded from {}", config.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DEFAULT_BASE_URL};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
