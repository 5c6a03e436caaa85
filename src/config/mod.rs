//! Configuration loading for the payroll and alert engine.
//!
//! The configuration holds the payroll rules (day length, overtime
//! multiplier) and alert rules (default look-ahead window). Defaults match
//! the standard rules, so a missing key never changes results.
//!
//! # Example
//!
//! ```no_run
//! use site_payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Window: {} days", config.alert_rules().default_window_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AlertRules, EngineConfig, PayrollRules};
