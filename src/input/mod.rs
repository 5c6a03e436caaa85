//! Raw input parsing.
//!
//! Converts form-style text fields into the typed inputs of the calculators.

mod parse;
mod request;

pub use parse::{parse_amount, parse_date, parse_required_date, parse_status, parse_window_days};
pub use request::{RawPayrollEntry, RawPayrollRun, RawTrackedDate, RawTrackedEntity};
