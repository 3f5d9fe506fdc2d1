//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files, with a fail-soft path falling back to the
//! compiled-in defaults when the files are unreachable.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::calculation::ExchangeRateTable;
use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, RatesConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── engine.yaml   # Metadata and reporting currency
/// └── rates.yaml    # Default exchange-rate table
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let table = loader.rate_table();
/// println!("Reporting in {}", table.reporting_currency());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if a file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let mut config = Self::load_yaml::<EngineConfig>(&engine_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RatesConfig>(&rates_path)?;
        config.exchange_rates = rates.rates;

        Ok(Self { config })
    }

    /// Loads configuration, falling back to the compiled-in defaults.
    ///
    /// External configuration must fail soft: a missing or broken file logs a
    /// warning and computation proceeds on the default table rather than
    /// blocking.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(loader) => loader,
            Err(err) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "Falling back to compiled-in engine configuration"
                );
                Self::fallback()
            }
        }
    }

    /// The compiled-in configuration mirroring the shipped YAML defaults.
    pub fn fallback() -> Self {
        let table = ExchangeRateTable::default_table();
        let reporting_currency = table.reporting_currency().to_string();
        let exchange_rates = [
            "GBP", "USD", "EUR", "INR", "AED", "AUD", "CAD", "PHP", "ZAR", "NGN",
        ]
        .into_iter()
        .map(|code| (code.to_string(), table.rate_for(code)))
        .collect();

        Self {
            config: EngineConfig {
                metadata: super::types::EngineMetadata {
                    name: "payroll-engine defaults".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                reporting_currency,
                exchange_rates,
            },
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn engine(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the exchange-rate table from the configured defaults.
    pub fn rate_table(&self) -> ExchangeRateTable {
        ExchangeRateTable::new(
            self.config.reporting_currency.clone(),
            self.config.exchange_rates.clone(),
        )
    }
}
