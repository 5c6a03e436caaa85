//! Calculation logic for the payroll and alert engine.
//!
//! This module contains the pure calculators: hourly rate derivation, the
//! payroll computation (basic, overtime and gross pay, late deduction, total
//! deductions and net pay), and date alert classification.

mod date_alert;
mod hourly_rate;
mod payroll;

pub use date_alert::{classify_date, classify_instant, combine_alerts, days_until};
pub use hourly_rate::{HOURLY_RATE_DECIMALS, STANDARD_HOURS_PER_DAY, derive_hourly_rate};
pub(crate) use hourly_rate::standard_hourly_rate;
pub use payroll::{
    MINUTES_PER_HOUR, NEGATIVE_INPUT, NEGATIVE_NET_PAY, OVERTIME_MULTIPLIER, PayrollComputation,
    compute_payroll, compute_payroll_with_rules, process_payroll, recalculate_payroll,
};
