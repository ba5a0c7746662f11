//! Configuration module for Wordsweep
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every field has a default, so a crawl can run without
//! any file at all.
//!
//! # Example
//!
//! ```no_run
//! use wordsweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wordsweep.toml")).unwrap();
//! println!("Page limit: {:?}", config.crawler.page_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
