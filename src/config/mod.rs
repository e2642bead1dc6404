//! Configuration loading and management for the Severance Engine.
//!
//! This module loads the statutory reference data from YAML files: statute
//! metadata and engine limits, effective-dated minimum wages and the
//! national holiday list.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/py").unwrap();
//! println!("Loaded statute: {}", config.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PROBATION_DAYS, EngineLimits, HolidaysConfig, MinimumWageConfig, SeveranceConfig,
    StatuteConfig, StatuteMetadata,
};
