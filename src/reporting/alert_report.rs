//! Fleet and inventory alert lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::classify_date;
use crate::models::{Alert, AlertStatus, TrackedEntity};

/// One alert in a dashboard list, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertItem {
    /// Name of the vehicle, equipment or material.
    pub entity_name: String,
    /// Which tracked date raised it, e.g. "LTO Renewal".
    pub date_label: String,
    /// The alert itself.
    pub alert: Alert,
}

/// Active alerts partitioned by status.
///
/// Both lists keep input order: entity order first, then date order within
/// an entity. They are not re-sorted by urgency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReport {
    /// Alerts whose date has passed.
    pub overdue: Vec<AlertItem>,
    /// Alerts whose date falls within its window.
    pub due_soon: Vec<AlertItem>,
}

impl AlertReport {
    /// Total number of alerts in both lists.
    pub fn total(&self) -> usize {
        self.overdue.len() + self.due_soon.len()
    }

    /// Returns true if nothing is overdue or due soon.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Classifies every tracked date of every entity and collects the active alerts.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::{TrackedDate, TrackedEntity};
/// use site_payroll_engine::reporting::collect_alerts;
/// use chrono::{Duration, NaiveDate};
///
/// let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
/// let fleet = vec![TrackedEntity::new(
///     "ABC 1234",
///     vec![
///         TrackedDate::new("LTO Renewal", Some(today - Duration::days(3))),
///         TrackedDate::new("Maintenance", Some(today + Duration::days(10))),
///     ],
/// )];
///
/// let report = collect_alerts(&fleet, today);
/// assert_eq!(report.overdue[0].date_label, "LTO Renewal");
/// assert_eq!(report.due_soon[0].date_label, "Maintenance");
/// ```
pub fn collect_alerts(entities: &[TrackedEntity], today: NaiveDate) -> AlertReport {
    let mut report = AlertReport::default();
    for entity in entities {
        for tracked in &entity.dates {
            let alert = classify_date(tracked.date, today, tracked.window_days);
            let target = match alert.status {
                AlertStatus::Overdue => &mut report.overdue,
                AlertStatus::DueSoon => &mut report.due_soon,
                AlertStatus::None => continue,
            };
            target.push(AlertItem {
                entity_name: entity.name.clone(),
                date_label: tracked.label.clone(),
                alert,
            });
        }
    }
    debug!(
        entities = entities.len(),
        overdue = report.overdue.len(),
        due_soon = report.due_soon.len(),
        "Alerts collected"
    );
    report
}
