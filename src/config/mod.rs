//! Configuration loading and management for the Timecard Engine.
//!
//! This module loads the accounting policy (overtime threshold, overtime
//! multiplier, standard annual hours) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccountingPolicy, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD,
    DEFAULT_STANDARD_ANNUAL_HOURS, OvertimeConfig, PolicyFile, PolicyMetadata, WageConfig,
};
