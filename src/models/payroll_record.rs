//! Payroll record and status models.
//!
//! A [`PayrollRecord`] is created when a payroll run is processed. Its figures
//! only change by recomputing from new inputs, and its status only changes by
//! direct assignment.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::{AuditWarning, PayPeriod, PayrollInputs};
use crate::error::{EngineError, EngineResult};

/// Lifecycle label of a payroll record.
///
/// Any status may be assigned from any other; there are no preconditions.
/// Approvals and holds are handled by people, not by this engine.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::PayrollStatus;
///
/// let status: PayrollStatus = "On Hold".parse().unwrap();
/// assert_eq!(status, PayrollStatus::OnHold);
/// assert_eq!(status.to_string(), "On Hold");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Computed, awaiting processing.
    #[default]
    Pending,
    /// Being processed.
    Processing,
    /// Released for payment.
    Released,
    /// Paid out.
    Paid,
    /// Held back pending a human decision.
    OnHold,
}

impl PayrollStatus {
    /// Every status, in dashboard order.
    pub const ALL: [PayrollStatus; 5] = [
        PayrollStatus::Pending,
        PayrollStatus::Processing,
        PayrollStatus::Released,
        PayrollStatus::Paid,
        PayrollStatus::OnHold,
    ];

    /// The label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            PayrollStatus::Pending => "Pending",
            PayrollStatus::Processing => "Processing",
            PayrollStatus::Released => "Released",
            PayrollStatus::Paid => "Paid",
            PayrollStatus::OnHold => "On Hold",
        }
    }

    /// Statuses that may be assigned next. Always every other status.
    pub fn next_statuses(&self) -> Vec<PayrollStatus> {
        Self::ALL.into_iter().filter(|s| s != self).collect()
    }
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PayrollStatus {
    type Err = EngineError;

    /// Parses a dashboard label or its snake_case form, ignoring case.
    fn from_str(s: &str) -> EngineResult<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "pending" => Ok(PayrollStatus::Pending),
            "processing" => Ok(PayrollStatus::Processing),
            "released" => Ok(PayrollStatus::Released),
            "paid" => Ok(PayrollStatus::Paid),
            "on_hold" | "onhold" => Ok(PayrollStatus::OnHold),
            _ => Err(EngineError::invalid_input("status", s)),
        }
    }
}

/// The computed figures of a payroll run.
///
/// Invariants: `gross_pay = basic_pay + overtime_pay`,
/// `total_deductions = late_deduction + sss + philhealth + pagibig + gbond + others`,
/// `net_pay = gross_pay - total_deductions`. Net pay may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hourly rate derived from the daily rate.
    pub hourly_rate: Decimal,
    /// Daily rate times working days.
    pub basic_pay: Decimal,
    /// Overtime hours at the overtime multiplier.
    pub overtime_pay: Decimal,
    /// Basic pay plus overtime pay.
    pub gross_pay: Decimal,
    /// Pay withheld for minutes late.
    pub late_deduction: Decimal,
    /// Late deduction plus all itemized deductions.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
}

/// A processed payroll run for one employee and one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Identifier assigned when the run was processed.
    pub id: Uuid,
    /// The employee this record pays.
    pub employee_id: String,
    /// The period covered.
    pub pay_period: PayPeriod,
    /// Current lifecycle label.
    pub status: PayrollStatus,
    /// The inputs the figures were computed from.
    pub inputs: PayrollInputs,
    /// The computed figures.
    #[serde(flatten)]
    pub breakdown: PayBreakdown,
    /// Data-quality warnings raised by the last computation.
    #[serde(default)]
    pub warnings: Vec<AuditWarning>,
}

impl PayrollRecord {
    /// Assigns a new status and returns the previous one.
    ///
    /// No transition is refused.
    pub fn set_status(&mut self, status: PayrollStatus) -> PayrollStatus {
        let previous = self.status;
        self.status = status;
        info!(
            record_id = %self.id,
            employee_id = %self.employee_id,
            from = %previous,
            to = %status,
            "Payroll status changed"
        );
        previous
    }

    /// Returns true if the last computation produced a negative net pay.
    pub fn has_negative_net_pay(&self) -> bool {
        self.breakdown.net_pay < Decimal::ZERO
    }
}
