//! Record filtering for dashboard views.

use serde::{Deserialize, Serialize};

use crate::models::{PayPeriod, PayrollRecord, PayrollStatus};

/// Criteria for narrowing a list of payroll records. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollFilter {
    /// Only records with this status.
    pub status: Option<PayrollStatus>,
    /// Only records for this employee.
    pub employee_id: Option<String>,
    /// Only records whose pay period overlaps this one.
    pub period: Option<PayPeriod>,
}

impl PayrollFilter {
    /// Returns true if `record` satisfies every set criterion.
    pub fn matches(&self, record: &PayrollRecord) -> bool {
        self.status.is_none_or(|status| record.status == status)
            && self
                .employee_id
                .as_deref()
                .is_none_or(|id| record.employee_id == id)
            && self
                .period
                .is_none_or(|period| record.pay_period.overlaps(&period))
    }

    /// The matching records, in their original order.
    pub fn apply<'a>(&self, records: &'a [PayrollRecord]) -> Vec<&'a PayrollRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
