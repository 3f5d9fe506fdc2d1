//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the engine deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable deployment name.
    pub name: String,
    /// The configuration version or effective date.
    pub version: String,
}

/// Engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Deployment metadata.
    pub metadata: EngineMetadata,
    /// The currency all staff totals are normalized into.
    pub reporting_currency: String,
    /// Default exchange rates, each "1 unit of X to reporting currency".
    /// Populated from `rates.yaml`; shadowed by externally fetched rates
    /// and manual overrides at run time.
    #[serde(default)]
    pub exchange_rates: HashMap<String, Decimal>,
}

/// Rates configuration file structure (`rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Map of currency code to multiplier into the reporting currency.
    pub rates: HashMap<String, Decimal>,
}
