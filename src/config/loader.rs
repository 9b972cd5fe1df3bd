//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pay
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PayConfig;

/// Loads and provides access to the pay configuration.
///
/// # File Format
///
/// ```text
/// in_charge_bonus: 0.25
/// fuel_rate_per_mile: 0.30
/// pay_cycle_days: 28
/// default_pay_rate: 12.21
/// ```
///
/// Every key is optional; missing keys take the built-in defaults.
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pay.yaml")?;
/// println!("Fuel rate: {}", loader.config().fuel_rate_per_mile);
/// # Ok::<(), shift_pay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed values (`ConfigParseError`)
    /// - A value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("pay_cycle_days: 14\n", "inline").unwrap();
    /// assert_eq!(loader.config().pay_cycle_days, 14);
    /// ```
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to a defaulted struct
        let config = if content.trim().is_empty() {
            PayConfig::default()
        } else {
            serde_yaml::from_str::<PayConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        config.validate()?;

        debug!(
            origin,
            in_charge_bonus = %config.in_charge_bonus,
            fuel_rate_per_mile = %config.fuel_rate_per_mile,
            pay_cycle_days = config.pay_cycle_days,
            "Loaded pay configuration"
        );

        Ok(Self { config })
    }

    /// Returns the loaded pay configuration.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }

    /// Consumes the loader and returns the pay configuration.
    pub fn into_config(self) -> PayConfig {
        self.config
    }
}
