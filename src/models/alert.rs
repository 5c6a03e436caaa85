//! Date alert models.
//!
//! A [`TrackedDate`] is a date of interest on a vehicle, piece of equipment or
//! material (an LTO renewal, a maintenance date). Classifying it against today
//! yields an [`Alert`]; the alerts of one entity combine into an
//! [`OverallAlert`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default look-ahead window for "due soon", in days.
pub const DEFAULT_ALERT_WINDOW_DAYS: i64 = 30;

/// Three-way alert classification.
///
/// Ordered by urgency: `None < DueSoon < Overdue`, so the most urgent of
/// several statuses is their maximum.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::AlertStatus;
///
/// let worst = [AlertStatus::DueSoon, AlertStatus::Overdue, AlertStatus::None]
///     .into_iter()
///     .max()
///     .unwrap();
/// assert_eq!(worst, AlertStatus::Overdue);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Nothing to report.
    #[default]
    None,
    /// Falls within the look-ahead window.
    DueSoon,
    /// Already past.
    Overdue,
}

/// The classification of a single tracked date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// The classification.
    pub status: AlertStatus,
    /// Whole days from today to the target; negative when overdue.
    pub days_diff: i64,
    /// Human-readable description; empty when the status is `None`.
    pub message: String,
}

impl Alert {
    /// The alert for an absent date.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if this alert should be surfaced.
    pub fn is_active(&self) -> bool {
        self.status != AlertStatus::None
    }
}

/// The combined alert state of an entity that tracks several dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallAlert {
    /// The most urgent of the underlying statuses.
    pub status: AlertStatus,
    /// Every non-empty underlying message, in the order given.
    pub messages: Vec<String>,
    /// True whenever `status` is not `None`.
    pub show_warning: bool,
}

/// A date of interest and the window within which it counts as due soon.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::TrackedDate;
/// use chrono::NaiveDate;
///
/// let renewal = TrackedDate::new("LTO Renewal", NaiveDate::from_ymd_opt(2025, 6, 30));
/// assert_eq!(renewal.window_days, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedDate {
    /// What the date is, e.g. "LTO Renewal" or "Maintenance".
    pub label: String,
    /// The date itself; `None` when not recorded.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Days ahead of the date at which it becomes due soon.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

fn default_window_days() -> i64 {
    DEFAULT_ALERT_WINDOW_DAYS
}

impl TrackedDate {
    /// Creates a tracked date with the default 30-day window.
    pub fn new(label: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            label: label.into(),
            date,
            window_days: DEFAULT_ALERT_WINDOW_DAYS,
        }
    }

    /// Replaces the window.
    pub fn with_window(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }
}

/// A vehicle, piece of equipment or material that carries tracked dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedEntity {
    /// Display name, e.g. a plate number or equipment name.
    pub name: String,
    /// The dates tracked on this entity, usually a renewal and a maintenance date.
    #[serde(default)]
    pub dates: Vec<TrackedDate>,
}

impl TrackedEntity {
    /// Creates an entity with the given dates.
    pub fn new(name: impl Into<String>, dates: Vec<TrackedDate>) -> Self {
        Self {
            name: name.into(),
            dates,
        }
    }
}
