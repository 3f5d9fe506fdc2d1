//! Configuration loading and management for the Payroll Computation Engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files: the reporting currency and the default exchange-rate table used
//! when no external rate source is reachable.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Reporting currency: {}", config.engine().reporting_currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata};
