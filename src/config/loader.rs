//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AlertRules, EngineConfig, PayrollRules};

/// Loads and provides access to the engine configuration.
///
/// # File Layout
///
/// ```text
/// payroll:
///   standard_hours_per_day: "8"
///   overtime_multiplier: "1.25"
/// alerts:
///   default_window_days: 30
/// ```
///
/// # Example
///
/// ```no_run
/// use site_payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// println!("Overtime multiplier: {}", loader.payroll_rules().overtime_multiplier);
/// # Ok::<(), site_payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unusable values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text. `source` names it in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config, source)?;

        info!(
            source = %source,
            standard_hours_per_day = %config.payroll.standard_hours_per_day,
            overtime_multiplier = %config.payroll.overtime_multiplier,
            default_window_days = config.alerts.default_window_days,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    fn validate(config: &EngineConfig, source: &str) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::ConfigParseError {
            path: source.to_string(),
            message: message.to_string(),
        };

        if config.payroll.standard_hours_per_day <= Decimal::ZERO {
            return Err(invalid("payroll.standard_hours_per_day must be positive"));
        }
        if config.alerts.default_window_days < 0 {
            return Err(invalid("alerts.default_window_days must not be negative"));
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the payroll rules.
    pub fn payroll_rules(&self) -> &PayrollRules {
        &self.config.payroll
    }

    /// Returns the alert rules.
    pub fn alert_rules(&self) -> &AlertRules {
        &self.config.alerts
    }
}
