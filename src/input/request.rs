//! Raw entry types as they arrive from the dashboard forms.
//!
//! Every field is optional text. Parsing turns an entry into the typed inputs
//! the calculators consume.

use serde::{Deserialize, Serialize};

use super::parse::{parse_amount, parse_date, parse_required_date, parse_status, parse_window_days};
use crate::calculation::process_payroll;
use crate::config::{AlertRules, PayrollRules};
use crate::error::EngineResult;
use crate::models::{
    AttendanceInput, DeductionSet, PayPeriod, PayrollInputs, PayrollRecord, TrackedDate,
    TrackedEntity,
};

/// Attendance, rate and deduction fields of one payroll entry.
///
/// # Example
///
/// ```
/// use site_payroll_engine::config::PayrollRules;
/// use site_payroll_engine::input::RawPayrollEntry;
/// use rust_decimal::Decimal;
///
/// let entry: RawPayrollEntry = serde_json::from_str(
///     r#"{"daily_rate": "800", "working_days": "22", "sss": ""}"#,
/// )
/// .unwrap();
///
/// let inputs = entry.parse(&PayrollRules::default()).unwrap();
/// assert_eq!(inputs.rate.hourly_rate(), Decimal::from(100));
/// assert_eq!(inputs.deductions.sss, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPayrollEntry {
    /// Daily rate.
    pub daily_rate: Option<String>,
    /// Days worked.
    pub working_days: Option<String>,
    /// Overtime hours.
    pub overtime_hours: Option<String>,
    /// Minutes late.
    pub late_minutes: Option<String>,
    /// SSS contribution.
    pub sss: Option<String>,
    /// PhilHealth contribution.
    pub philhealth: Option<String>,
    /// Pag-IBIG contribution.
    pub pagibig: Option<String>,
    /// Guarantee bond.
    pub gbond: Option<String>,
    /// Other deductions.
    pub others: Option<String>,
}

impl RawPayrollEntry {
    /// Parses every field into payroll inputs.
    ///
    /// Blank fields become zero. The first malformed field aborts with
    /// `InvalidInput` naming it.
    pub fn parse(&self, rules: &PayrollRules) -> EngineResult<PayrollInputs> {
        let daily_rate = parse_amount("daily_rate", self.daily_rate.as_deref())?;
        Ok(PayrollInputs {
            rate: rules.rate_profile(daily_rate)?,
            attendance: AttendanceInput {
                working_days: parse_amount("working_days", self.working_days.as_deref())?,
                overtime_hours: parse_amount("overtime_hours", self.overtime_hours.as_deref())?,
                late_minutes: parse_amount("late_minutes", self.late_minutes.as_deref())?,
            },
            deductions: DeductionSet {
                sss: parse_amount("sss", self.sss.as_deref())?,
                philhealth: parse_amount("philhealth", self.philhealth.as_deref())?,
                pagibig: parse_amount("pagibig", self.pagibig.as_deref())?,
                gbond: parse_amount("gbond", self.gbond.as_deref())?,
                others: parse_amount("others", self.others.as_deref())?,
            },
        })
    }
}

/// A payroll run as submitted: who, which period, which status, and the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPayrollRun {
    /// The employee being paid.
    pub employee_id: String,
    /// First day of the pay period.
    pub start_date: Option<String>,
    /// Last day of the pay period.
    pub end_date: Option<String>,
    /// Status label; blank means `Pending`.
    pub status: Option<String>,
    /// Rate, attendance and deductions.
    #[serde(flatten)]
    pub entry: RawPayrollEntry,
}

impl RawPayrollRun {
    /// Parses the run and processes it into a payroll record.
    pub fn into_record(&self, rules: &PayrollRules) -> EngineResult<PayrollRecord> {
        let start = parse_required_date("start_date", self.start_date.as_deref())?;
        let end = parse_required_date("end_date", self.end_date.as_deref())?;
        let pay_period = PayPeriod::new(start, end)?;
        let status = parse_status(self.status.as_deref())?;
        let inputs = self.entry.parse(rules)?;

        let mut record = process_payroll(self.employee_id.clone(), pay_period, inputs, rules)?;
        record.status = status;
        Ok(record)
    }
}

/// A tracked date as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTrackedDate {
    /// What the date is, e.g. "LTO Renewal".
    pub label: String,
    /// The date; blank means not recorded.
    pub date: Option<String>,
    /// Window in days; blank means the configured default.
    pub window_days: Option<String>,
}

impl RawTrackedDate {
    /// Parses into a [`TrackedDate`]. Errors name the field as `<label>.date`
    /// or `<label>.window_days`.
    pub fn parse(&self, rules: &AlertRules) -> EngineResult<TrackedDate> {
        let date = parse_date(&format!("{}.date", self.label), self.date.as_deref())?;
        let window_days = parse_window_days(
            &format!("{}.window_days", self.label),
            self.window_days.as_deref(),
            rules.default_window_days,
        )?;
        Ok(TrackedDate::new(self.label.clone(), date).with_window(window_days))
    }
}

/// A vehicle, piece of equipment or material as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTrackedEntity {
    /// Display name.
    pub name: String,
    /// Tracked dates.
    pub dates: Vec<RawTrackedDate>,
}

impl RawTrackedEntity {
    /// Parses every tracked date of the entity.
    pub fn parse(&self, rules: &AlertRules) -> EngineResult<TrackedEntity> {
        let dates = self
            .dates
            .iter()
            .map(|raw| raw.parse(rules))
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(TrackedEntity::new(self.name.clone(), dates))
    }
}
