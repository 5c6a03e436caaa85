//! Payroll totals for dashboard summaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollRecord, PayrollStatus};

/// Totals across a set of payroll records.
///
/// Sums are exact decimal sums of the per-record figures, with no
/// intermediate rounding, so they do not depend on record order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Sum of gross pay.
    pub total_gross: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net: Decimal,
    /// Number of records summed.
    pub count: usize,
}

impl PayrollSummary {
    /// Adds one record to the totals.
    ///
    /// Fails with `ArithmeticOverflow` if a total leaves the decimal range,
    /// in which case the summary is left unchanged.
    pub fn add(&mut self, record: &PayrollRecord) -> EngineResult<()> {
        let breakdown = &record.breakdown;
        let total_gross = sum(self.total_gross, breakdown.gross_pay, "total_gross")?;
        let total_deductions = sum(
            self.total_deductions,
            breakdown.total_deductions,
            "total_deductions",
        )?;
        let total_net = sum(self.total_net, breakdown.net_pay, "total_net")?;

        self.total_gross = total_gross;
        self.total_deductions = total_deductions;
        self.total_net = total_net;
        self.count += 1;
        Ok(())
    }
}

fn sum(total: Decimal, amount: Decimal, step: &str) -> EngineResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| EngineError::overflow(step))
}

/// Sums gross pay, deductions and net pay across `records`.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::PayrollRecord;
/// use site_payroll_engine::reporting::summarize_payroll;
///
/// let records: Vec<PayrollRecord> = Vec::new();
/// let summary = summarize_payroll(&records).unwrap();
/// assert_eq!(summary.count, 0);
/// ```
pub fn summarize_payroll<'a, I>(records: I) -> EngineResult<PayrollSummary>
where
    I: IntoIterator<Item = &'a PayrollRecord>,
{
    let mut summary = PayrollSummary::default();
    for record in records {
        summary.add(record)?;
    }
    Ok(summary)
}

/// Totals per status, in dashboard status order. Statuses with no records are omitted.
pub fn summarize_by_status(
    records: &[PayrollRecord],
) -> EngineResult<Vec<(PayrollStatus, PayrollSummary)>> {
    let mut totals = Vec::new();
    for status in PayrollStatus::ALL {
        let summary = summarize_payroll(records.iter().filter(|r| r.status == status))?;
        if summary.count > 0 {
            totals.push((status, summary));
        }
    }
    Ok(totals)
}
