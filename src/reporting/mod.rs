//! Aggregate reporting for dashboard totals and alert lists.
//!
//! Sums payroll figures across a filtered set of records, and gathers the
//! alerts of a fleet or inventory into overdue and due-soon lists.

mod alert_report;
mod filter;
mod payroll_summary;

pub use alert_report::{AlertItem, AlertReport, collect_alerts};
pub use filter::PayrollFilter;
pub use payroll_summary::{PayrollSummary, summarize_by_status, summarize_payroll};
