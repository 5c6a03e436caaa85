//! Attendance and deduction inputs for a single payroll run.
//!
//! These values are supplied fresh for every run and are never persisted on
//! their own. Every field defaults to zero when absent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RateProfile;

/// Attendance figures for one employee over one pay period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceInput {
    /// Days worked in the period (may be fractional).
    pub working_days: Decimal,
    /// Overtime hours worked in the period.
    pub overtime_hours: Decimal,
    /// Total minutes late in the period.
    pub late_minutes: Decimal,
}

/// Statutory and other deductions for one payroll run.
///
/// The late deduction is not part of this set; it is derived from the
/// attendance input during computation.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::DeductionSet;
/// use rust_decimal::Decimal;
///
/// let deductions: DeductionSet = serde_json::from_str(r#"{"sss": "500"}"#).unwrap();
/// assert_eq!(deductions.sss, Decimal::from(500));
/// assert_eq!(deductions.philhealth, Decimal::ZERO);
/// assert_eq!(deductions.total(), Some(Decimal::from(500)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionSet {
    /// Social Security System contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG fund contribution.
    pub pagibig: Decimal,
    /// Guarantee bond withholding.
    pub gbond: Decimal,
    /// Any other deduction.
    pub others: Decimal,
}

impl DeductionSet {
    /// Sum of the itemized deductions, excluding the late deduction.
    ///
    /// Returns `None` if the sum does not fit in a decimal.
    pub fn total(&self) -> Option<Decimal> {
        self.items()
            .into_iter()
            .try_fold(Decimal::ZERO, |sum, (_, amount)| sum.checked_add(amount))
    }

    /// The itemized deductions as `(name, amount)` pairs, in a fixed order.
    pub fn items(&self) -> [(&'static str, Decimal); 5] {
        [
            ("sss", self.sss),
            ("philhealth", self.philhealth),
            ("pagibig", self.pagibig),
            ("gbond", self.gbond),
            ("others", self.others),
        ]
    }
}

/// Everything the payroll calculator needs for one employee and one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollInputs {
    /// The employee's rate profile.
    pub rate: RateProfile,
    /// Attendance for the pay period.
    pub attendance: AttendanceInput,
    /// Deductions for the pay period.
    pub deductions: DeductionSet,
}

impl PayrollInputs {
    /// Returns the names of any input fields holding a negative value.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.rate.daily_rate() < Decimal::ZERO {
            fields.push("daily_rate");
        }
        let attendance = [
            ("working_days", self.attendance.working_days),
            ("overtime_hours", self.attendance.overtime_hours),
            ("late_minutes", self.attendance.late_minutes),
        ];
        for (name, value) in attendance.into_iter().chain(self.deductions.items()) {
            if value < Decimal::ZERO {
                fields.push(name);
            }
        }
        fields
    }
}
