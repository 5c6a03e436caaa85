//! Configuration types for the payroll and alert engine.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! key is optional; missing keys fall back to the standard rules.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{OVERTIME_MULTIPLIER, STANDARD_HOURS_PER_DAY};
use crate::error::EngineResult;
use crate::models::{DEFAULT_ALERT_WINDOW_DAYS, RateProfile};

/// Rules applied by the payroll calculator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollRules {
    /// Hours in a paid working day. Rate profiles built from these rules
    /// divide the daily rate by this.
    pub standard_hours_per_day: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            standard_hours_per_day: STANDARD_HOURS_PER_DAY,
            overtime_multiplier: OVERTIME_MULTIPLIER,
        }
    }
}

impl PayrollRules {
    /// Builds a rate profile for the given daily rate under these rules.
    pub fn rate_profile(&self, daily_rate: Decimal) -> EngineResult<RateProfile> {
        RateProfile::with_hours_per_day(daily_rate, self.standard_hours_per_day)
    }
}

/// Rules applied by the date alert classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlertRules {
    /// Window used when a tracked date does not specify its own.
    pub default_window_days: i64,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self {
            default_window_days: DEFAULT_ALERT_WINDOW_DAYS,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Payroll rules.
    pub payroll: PayrollRules,
    /// Alert rules.
    pub alerts: AlertRules,
}
