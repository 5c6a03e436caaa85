//! Field parsers for raw form text.
//!
//! Blank or absent text means "not filled in" and falls back to a default
//! (zero, no date, the default window). Text that is present but cannot be
//! read fails with [`EngineError::InvalidInput`] naming the field, so a typo in
//! a monetary field is never silently treated as zero.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollStatus;

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|text| !text.is_empty())
}

/// Parses a decimal amount; blank is zero.
///
/// # Examples
///
/// ```
/// use site_payroll_engine::input::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("sss", Some(" 500.25 ")).unwrap().to_string(), "500.25");
/// assert_eq!(parse_amount("sss", Some("")).unwrap(), Decimal::ZERO);
/// assert_eq!(parse_amount("sss", None).unwrap(), Decimal::ZERO);
/// assert!(parse_amount("sss", Some("five hundred")).is_err());
/// ```
pub fn parse_amount(field: &str, raw: Option<&str>) -> EngineResult<Decimal> {
    match non_blank(raw) {
        Some(text) => {
            Decimal::from_str(text).map_err(|_| EngineError::invalid_input(field, text))
        }
        None => Ok(Decimal::ZERO),
    }
}

/// Parses a calendar date; blank is no date.
///
/// Accepts `YYYY-MM-DD`, a naive ISO timestamp (`YYYY-MM-DDTHH:MM:SS`), or an
/// RFC 3339 timestamp. Timestamps keep only their date.
pub fn parse_date(field: &str, raw: Option<&str>) -> EngineResult<Option<NaiveDate>> {
    let Some(text) = non_blank(raw) else {
        return Ok(None);
    };
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(timestamp.date()));
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(Some(timestamp.date_naive()));
    }
    Err(EngineError::invalid_input(field, text))
}

/// Parses a date that must be present.
pub fn parse_required_date(field: &str, raw: Option<&str>) -> EngineResult<NaiveDate> {
    parse_date(field, raw)?.ok_or_else(|| EngineError::invalid_input(field, raw.unwrap_or("")))
}

/// Parses an alert window in whole days; blank is `default`.
pub fn parse_window_days(field: &str, raw: Option<&str>, default: i64) -> EngineResult<i64> {
    match non_blank(raw) {
        Some(text) => text
            .parse::<i64>()
            .map_err(|_| EngineError::invalid_input(field, text)),
        None => Ok(default),
    }
}

/// Parses a payroll status label; blank is `Pending`.
pub fn parse_status(raw: Option<&str>) -> EngineResult<PayrollStatus> {
    match non_blank(raw) {
        Some(text) => text.parse(),
        None => Ok(PayrollStatus::Pending),
    }
}
