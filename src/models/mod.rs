//! Domain models for the payroll and alert engine.
//!
//! This module contains the plain data types the calculators consume and
//! produce: rate profiles, attendance and deduction inputs, pay periods,
//! payroll records, audit traces and date alerts.

mod alert;
mod audit;
mod pay_period;
mod payroll_inputs;
mod payroll_record;
mod rate_profile;

pub use alert::{
    Alert, AlertStatus, DEFAULT_ALERT_WINDOW_DAYS, OverallAlert, TrackedDate, TrackedEntity,
};
pub use audit::{AuditStep, AuditTrace, AuditWarning, WarningSeverity};
pub use pay_period::PayPeriod;
pub use payroll_inputs::{AttendanceInput, DeductionSet, PayrollInputs};
pub use payroll_record::{PayBreakdown, PayrollRecord, PayrollStatus};
pub use rate_profile::RateProfile;
