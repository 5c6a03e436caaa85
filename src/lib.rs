//! Payroll computation and date-based alert engine for a construction
//! company's administrative dashboard.
//!
//! This crate turns employee rates, attendance and deductions into gross pay,
//! deductions and net pay, classifies tracked dates (vehicle renewals,
//! equipment maintenance) as overdue or due soon, and aggregates both for
//! dashboard summaries. Everything is a pure function of plain data.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod reporting;
