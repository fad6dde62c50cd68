//! Configuration loading and management for the attendance engine.
//!
//! This module provides functionality to load extraction heuristics and
//! aggregation settings from YAML files, plus the server settings read from
//! the environment.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Mode: {:?}", config.aggregation().mode);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AggregationMode, AggregationRules, ExtractionRules, RulesConfig, ServerSettings};
