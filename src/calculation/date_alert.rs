//! Date alert classification.
//!
//! Classifies a tracked date relative to today as overdue, due soon or
//! nothing to report, and combines the alerts of one entity into an overall
//! alert.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tracing::debug;

use crate::models::{Alert, AlertStatus, OverallAlert, TrackedEntity};

/// Whole days from `now` to `target`, rounded up at full precision.
///
/// Any positive remainder rounds up, down to the nanosecond: a target a tenth
/// of a day or half a second ahead counts as one day away. A target half a
/// day behind counts as zero, so something due today is never overdue.
///
/// # Examples
///
/// ```
/// use site_payroll_engine::calculation::days_until;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let later_today = now + chrono::Duration::hours(3);
/// let yesterday = now - chrono::Duration::hours(30);
///
/// assert_eq!(days_until(later_today, now), 1);
/// assert_eq!(days_until(now, now), 0);
/// assert_eq!(days_until(yesterday, now), -1);
/// ```
pub fn days_until(target: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let delta = target - now;
    // num_days truncates toward zero, so only a positive remainder rounds up.
    let whole_days = delta.num_days();
    if delta - TimeDelta::days(whole_days) > TimeDelta::zero() {
        whole_days + 1
    } else {
        whole_days
    }
}

/// Classifies a calendar date against today.
///
/// # Rules
///
/// 1. No date: status `None`, `days_diff` 0, empty message.
/// 2. Before today: `Overdue`, "Overdue by N day(s)".
/// 3. Within `window_days` (inclusive, today counts): `DueSoon`, "Due in N day(s)".
/// 4. Further out: `None`.
///
/// # Examples
///
/// ```
/// use site_payroll_engine::calculation::classify_date;
/// use site_payroll_engine::models::AlertStatus;
/// use chrono::{Duration, NaiveDate};
///
/// let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
///
/// let alert = classify_date(Some(today + Duration::days(10)), today, 30);
/// assert_eq!(alert.status, AlertStatus::DueSoon);
/// assert_eq!(alert.message, "Due in 10 day(s)");
///
/// let alert = classify_date(Some(today - Duration::days(3)), today, 30);
/// assert_eq!(alert.status, AlertStatus::Overdue);
/// assert_eq!(alert.days_diff, -3);
/// assert_eq!(alert.message, "Overdue by 3 day(s)");
/// ```
pub fn classify_date(target: Option<NaiveDate>, today: NaiveDate, window_days: i64) -> Alert {
    match target {
        Some(target) => classify_days_diff((target - today).num_days(), window_days),
        None => Alert::none(),
    }
}

/// Classifies a timestamp against the current time, rounding the day
/// difference up.
pub fn classify_instant(
    target: Option<NaiveDateTime>,
    now: NaiveDateTime,
    window_days: i64,
) -> Alert {
    match target {
        Some(target) => classify_days_diff(days_until(target, now), window_days),
        None => Alert::none(),
    }
}

fn classify_days_diff(days_diff: i64, window_days: i64) -> Alert {
    let alert = if days_diff < 0 {
        Alert {
            status: AlertStatus::Overdue,
            days_diff,
            message: format!("Overdue by {} day(s)", days_diff.abs()),
        }
    } else if days_diff <= window_days {
        Alert {
            status: AlertStatus::DueSoon,
            days_diff,
            message: format!("Due in {} day(s)", days_diff),
        }
    } else {
        Alert {
            status: AlertStatus::None,
            days_diff,
            message: String::new(),
        }
    };
    debug!(days_diff, window_days, status = ?alert.status, "Date classified");
    alert
}

/// Combines several alerts into one overall alert.
///
/// The overall status is the most urgent one. Every non-empty message is
/// kept, in input order.
pub fn combine_alerts<'a, I>(alerts: I) -> OverallAlert
where
    I: IntoIterator<Item = &'a Alert>,
{
    let mut status = AlertStatus::None;
    let mut messages = Vec::new();
    for alert in alerts {
        status = status.max(alert.status);
        if !alert.message.is_empty() {
            messages.push(alert.message.clone());
        }
    }
    OverallAlert {
        status,
        messages,
        show_warning: status != AlertStatus::None,
    }
}

impl OverallAlert {
    /// Combines two alerts, typically a renewal and a maintenance date.
    ///
    /// # Example
    ///
    /// ```
    /// use site_payroll_engine::calculation::classify_date;
    /// use site_payroll_engine::models::{AlertStatus, OverallAlert};
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    /// let renewal = classify_date(Some(today + Duration::days(5)), today, 30);
    /// let maintenance = classify_date(Some(today - Duration::days(2)), today, 30);
    ///
    /// let overall = OverallAlert::combine(&renewal, &maintenance);
    /// assert_eq!(overall.status, AlertStatus::Overdue);
    /// assert_eq!(overall.messages.len(), 2);
    /// assert!(overall.show_warning);
    /// ```
    pub fn combine(first: &Alert, second: &Alert) -> OverallAlert {
        combine_alerts([first, second])
    }
}

impl TrackedEntity {
    /// Classifies every tracked date on this entity against `today`.
    pub fn alerts(&self, today: NaiveDate) -> Vec<Alert> {
        self.dates
            .iter()
            .map(|tracked| classify_date(tracked.date, today, tracked.window_days))
            .collect()
    }

    /// The combined alert for this entity.
    pub fn overall_alert(&self, today: NaiveDate) -> OverallAlert {
        combine_alerts(&self.alerts(today))
    }
}
