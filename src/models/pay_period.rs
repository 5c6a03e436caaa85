//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the inclusive date range a
//! payroll run covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a pay period with an inclusive date range.
///
/// The start date never falls after the end date. This is checked by
/// [`PayPeriod::new`] and when a period is deserialized.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
/// )
/// .unwrap();
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
/// assert_eq!(period.day_count(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PayPeriodFields")]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
struct PayPeriodFields {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<PayPeriodFields> for PayPeriod {
    type Error = EngineError;

    fn try_from(fields: PayPeriodFields) -> EngineResult<Self> {
        PayPeriod::new(fields.start_date, fields.end_date)
    }
}

impl PayPeriod {
    /// Creates a pay period, rejecting a start date after the end date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidPayPeriod {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns true if the two periods share at least one day.
    pub fn overlaps(&self, other: &PayPeriod) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}
