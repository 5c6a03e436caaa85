//! Payroll computation.
//!
//! Turns a rate profile, attendance and deductions into basic pay, overtime
//! pay, gross pay, the late deduction, total deductions and net pay. The
//! arithmetic is exact decimal arithmetic; the only rounding is on the hourly
//! rate, which the rate profile already carries.
//!
//! Inputs are neither validated nor clamped. A negative input flows through
//! the arithmetic and produces an audit warning, as does a negative net pay.
//! Every operation is checked: a figure that leaves the decimal range fails
//! with `ArithmeticOverflow` naming the step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PayrollRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, PayBreakdown, PayPeriod, PayrollInputs, PayrollRecord, PayrollStatus,
    WarningSeverity,
};

/// Overtime hours are paid at 125% of the hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Minutes in an hour, used to price the late deduction.
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Warning code raised when net pay comes out below zero.
pub const NEGATIVE_NET_PAY: &str = "NEGATIVE_NET_PAY";

/// Warning code raised when any input field is negative.
pub const NEGATIVE_INPUT: &str = "NEGATIVE_INPUT";

/// The result of a payroll computation: the figures and how they were reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollComputation {
    /// The computed figures.
    pub breakdown: PayBreakdown,
    /// Every step taken, plus any data-quality warnings.
    pub audit_trace: AuditTrace,
}

/// Computes a payroll breakdown under the standard rules.
///
/// # Examples
///
/// ```
/// use site_payroll_engine::calculation::compute_payroll;
/// use site_payroll_engine::models::{AttendanceInput, DeductionSet, PayrollInputs, RateProfile};
/// use rust_decimal::Decimal;
///
/// let inputs = PayrollInputs {
///     rate: RateProfile::new(Decimal::from(800)),
///     attendance: AttendanceInput {
///         working_days: Decimal::from(22),
///         overtime_hours: Decimal::from(5),
///         late_minutes: Decimal::from(30),
///     },
///     deductions: DeductionSet {
///         sss: Decimal::from(500),
///         philhealth: Decimal::from(200),
///         pagibig: Decimal::from(100),
///         ..Default::default()
///     },
/// };
///
/// let result = compute_payroll(&inputs).unwrap();
/// assert_eq!(result.breakdown.gross_pay, Decimal::from(18225));
/// assert_eq!(result.breakdown.total_deductions, Decimal::from(850));
/// assert_eq!(result.breakdown.net_pay, Decimal::from(17375));
/// ```
pub fn compute_payroll(inputs: &PayrollInputs) -> EngineResult<PayrollComputation> {
    compute_payroll_with_rules(inputs, &PayrollRules::default())
}

/// Computes a payroll breakdown under the given rules.
///
/// The hourly rate and the day length behind it come from the rate profile;
/// `rules` supplies the overtime multiplier.
///
/// 1. `basic_pay = daily_rate * working_days`
/// 2. `overtime_pay = hourly_rate * overtime_multiplier * overtime_hours`
/// 3. `gross_pay = basic_pay + overtime_pay`
/// 4. `late_deduction = hourly_rate / 60 * late_minutes`
/// 5. `total_deductions = late_deduction + sss + philhealth + pagibig + gbond + others`
/// 6. `net_pay = gross_pay - total_deductions`
///
/// # Errors
///
/// `ArithmeticOverflow` if any figure does not fit in a decimal.
pub fn compute_payroll_with_rules(
    inputs: &PayrollInputs,
    rules: &PayrollRules,
) -> EngineResult<PayrollComputation> {
    let mut trace = AuditTrace::default();
    let daily_rate = inputs.rate.daily_rate();
    let hourly_rate = inputs.rate.hourly_rate();
    let hours_per_day = inputs.rate.hours_per_day();
    let attendance = &inputs.attendance;
    let deductions = &inputs.deductions;

    trace.record(
        "hourly_rate",
        "Hourly Rate",
        serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "hours_per_day": hours_per_day.normalize().to_string()
        }),
        serde_json::json!({ "hourly_rate": hourly_rate.to_string() }),
        format!(
            "${} / {} hours = ${} (rounded to cents)",
            daily_rate.normalize(),
            hours_per_day.normalize(),
            hourly_rate
        ),
    );

    let basic_pay = checked(daily_rate.checked_mul(attendance.working_days), "basic_pay")?;
    trace.record(
        "basic_pay",
        "Basic Pay",
        serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "working_days": attendance.working_days.normalize().to_string()
        }),
        serde_json::json!({ "basic_pay": basic_pay.normalize().to_string() }),
        format!(
            "${} x {} days = ${}",
            daily_rate.normalize(),
            attendance.working_days.normalize(),
            basic_pay.normalize()
        ),
    );

    let overtime_pay = checked(
        hourly_rate
            .checked_mul(rules.overtime_multiplier)
            .and_then(|premium| premium.checked_mul(attendance.overtime_hours)),
        "overtime_pay",
    )?;
    trace.record(
        "overtime_pay",
        "Overtime Pay",
        serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "multiplier": rules.overtime_multiplier.normalize().to_string(),
            "overtime_hours": attendance.overtime_hours.normalize().to_string()
        }),
        serde_json::json!({ "overtime_pay": overtime_pay.normalize().to_string() }),
        format!(
            "${} x {} x {} hours = ${}",
            hourly_rate.normalize(),
            rules.overtime_multiplier.normalize(),
            attendance.overtime_hours.normalize(),
            overtime_pay.normalize()
        ),
    );

    let gross_pay = checked(basic_pay.checked_add(overtime_pay), "gross_pay")?;
    trace.record(
        "gross_pay",
        "Gross Pay",
        serde_json::json!({
            "basic_pay": basic_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        serde_json::json!({ "gross_pay": gross_pay.normalize().to_string() }),
        format!(
            "${} + ${} = ${}",
            basic_pay.normalize(),
            overtime_pay.normalize(),
            gross_pay.normalize()
        ),
    );

    // Multiply before dividing so whole-cent results stay exact.
    let late_deduction = checked(
        hourly_rate
            .checked_mul(attendance.late_minutes)
            .and_then(|cost| cost.checked_div(MINUTES_PER_HOUR)),
        "late_deduction",
    )?;
    trace.record(
        "late_deduction",
        "Late Deduction",
        serde_json::json!({
            "hourly_rate": hourly_rate.normalize().to_string(),
            "late_minutes": attendance.late_minutes.normalize().to_string()
        }),
        serde_json::json!({ "late_deduction": late_deduction.normalize().to_string() }),
        format!(
            "${} / 60 x {} minutes = ${}",
            hourly_rate.normalize(),
            attendance.late_minutes.normalize(),
            late_deduction.normalize()
        ),
    );

    let itemized_total = checked(deductions.total(), "total_deductions")?;
    let total_deductions = checked(
        late_deduction.checked_add(itemized_total),
        "total_deductions",
    )?;
    let mut itemized = serde_json::Map::new();
    itemized.insert(
        "late_deduction".to_string(),
        late_deduction.normalize().to_string().into(),
    );
    for (name, amount) in deductions.items() {
        itemized.insert(name.to_string(), amount.normalize().to_string().into());
    }
    trace.record(
        "total_deductions",
        "Total Deductions",
        serde_json::Value::Object(itemized),
        serde_json::json!({ "total_deductions": total_deductions.normalize().to_string() }),
        format!(
            "${} late + ${} itemized = ${}",
            late_deduction.normalize(),
            itemized_total.normalize(),
            total_deductions.normalize()
        ),
    );

    let net_pay = checked(gross_pay.checked_sub(total_deductions), "net_pay")?;
    trace.record(
        "net_pay",
        "Net Pay",
        serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string()
        }),
        serde_json::json!({ "net_pay": net_pay.normalize().to_string() }),
        format!(
            "${} - ${} = ${}",
            gross_pay.normalize(),
            total_deductions.normalize(),
            net_pay.normalize()
        ),
    );

    let negative_fields = inputs.negative_fields();
    if !negative_fields.is_empty() {
        warn!(fields = ?negative_fields, "Payroll inputs contain negative values");
        trace.warn(
            NEGATIVE_INPUT,
            format!("Negative input values: {}", negative_fields.join(", ")),
            WarningSeverity::Medium,
        );
    }

    if net_pay < Decimal::ZERO {
        warn!(net_pay = %net_pay, "Net pay is negative");
        trace.warn(
            NEGATIVE_NET_PAY,
            format!(
                "Deductions of ${} exceed gross pay of ${}",
                total_deductions.normalize(),
                gross_pay.normalize()
            ),
            WarningSeverity::High,
        );
    }

    debug!(
        gross_pay = %gross_pay,
        total_deductions = %total_deductions,
        net_pay = %net_pay,
        "Payroll computed"
    );

    Ok(PayrollComputation {
        breakdown: PayBreakdown {
            hourly_rate,
            basic_pay,
            overtime_pay,
            gross_pay,
            late_deduction,
            total_deductions,
            net_pay,
        },
        audit_trace: trace,
    })
}

fn checked(value: Option<Decimal>, step: &str) -> EngineResult<Decimal> {
    value.ok_or_else(|| {
        warn!(step, "Payroll arithmetic overflowed");
        EngineError::overflow(step)
    })
}

/// Processes a payroll run into a new `Pending` record with a fresh id.
pub fn process_payroll(
    employee_id: impl Into<String>,
    pay_period: PayPeriod,
    inputs: PayrollInputs,
    rules: &PayrollRules,
) -> EngineResult<PayrollRecord> {
    let computation = compute_payroll_with_rules(&inputs, rules)?;
    let record = PayrollRecord {
        id: Uuid::new_v4(),
        employee_id: employee_id.into(),
        pay_period,
        status: PayrollStatus::Pending,
        inputs,
        breakdown: computation.breakdown,
        warnings: computation.audit_trace.warnings,
    };
    debug!(
        record_id = %record.id,
        employee_id = %record.employee_id,
        net_pay = %record.breakdown.net_pay,
        "Payroll record processed"
    );
    Ok(record)
}

/// Replaces a record's inputs and recomputes every derived figure.
///
/// The id, pay period and status are left as they are. Returns the audit
/// trace of the new computation. On error the record is not touched.
pub fn recalculate_payroll(
    record: &mut PayrollRecord,
    inputs: PayrollInputs,
    rules: &PayrollRules,
) -> EngineResult<AuditTrace> {
    let computation = compute_payroll_with_rules(&inputs, rules)?;
    record.inputs = inputs;
    record.breakdown = computation.breakdown;
    record.warnings = computation.audit_trace.warnings.clone();
    Ok(computation.audit_trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceInput, DeductionSet, RateProfile};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn example_inputs() -> PayrollInputs {
        PayrollInputs {
            rate: RateProfile::new(dec("800")),
            attendance: AttendanceInput {
                working_days: dec("22"),
                overtime_hours: dec("5"),
                late_minutes: dec("30"),
            },
            deductions: DeductionSet {
                sss: dec("500"),
                philhealth: dec("200"),
                pagibig: dec("100"),
                gbond: dec("0"),
                others: dec("0"),
            },
        }
    }

    fn march_first_half() -> PayPeriod {
        PayPeriod::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        )
        .unwrap()
    }

    /// PC-001: worked example from the payroll sheet
    #[test]
    fn test_worked_example() {
        let result = compute_payroll(&example_inputs()).unwrap().breakdown;

        assert_eq!(result.hourly_rate, dec("100.00"));
        assert_eq!(result.basic_pay, dec("17600"));
        assert_eq!(result.overtime_pay, dec("625.00"));
        assert_eq!(result.gross_pay, dec("18225.00"));
        assert_eq!(result.late_deduction, dec("50.00"));
        assert_eq!(result.total_deductions, dec("850.00"));
        assert_eq!(result.net_pay, dec("17375.00"));
    }

    /// PC-002: blank inputs give all-zero figures
    #[test]
    fn test_all_zero_inputs() {
        let result = compute_payroll(&PayrollInputs::default()).unwrap();
        assert_eq!(result.breakdown, PayBreakdown::default());
        assert!(result.audit_trace.warnings.is_empty());
    }

    /// PC-003: negative net pay is kept and flagged
    #[test]
    fn test_negative_net_pay_is_not_clamped() {
        let inputs = PayrollInputs {
            rate: RateProfile::new(dec("500")),
            attendance: AttendanceInput {
                working_days: dec("1"),
                ..Default::default()
            },
            deductions: DeductionSet {
                sss: dec("700"),
                ..Default::default()
            },
        };
        let result = compute_payroll(&inputs).unwrap();
        assert_eq!(result.breakdown.net_pay, dec("-200"));
        assert!(result.audit_trace.has_warning(NEGATIVE_NET_PAY));
    }

    /// PC-004: negative inputs propagate mathematically
    #[test]
    fn test_negative_working_days_propagate() {
        let inputs = PayrollInputs {
            rate: RateProfile::new(dec("800")),
            attendance: AttendanceInput {
                working_days: dec("-2"),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = compute_payroll(&inputs).unwrap();
        assert_eq!(result.breakdown.basic_pay, dec("-1600"));
        assert_eq!(result.breakdown.net_pay, dec("-1600"));
        assert!(result.audit_trace.has_warning(NEGATIVE_INPUT));
        assert!(result.audit_trace.warnings[0].message.contains("working_days"));
    }

    /// PC-005: overtime uses the rounded hourly rate
    #[test]
    fn test_overtime_uses_rounded_hourly_rate() {
        let inputs = PayrollInputs {
            rate: RateProfile::new(dec("645")),
            attendance: AttendanceInput {
                overtime_hours: dec("2"),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = compute_payroll(&inputs).unwrap().breakdown;
        assert_eq!(result.hourly_rate, dec("80.63"));
        // 80.63 * 1.25 * 2
        assert_eq!(result.overtime_pay, dec("201.575"));
    }

    /// PC-006: basic pay uses the unrounded daily rate
    #[test]
    fn test_fractional_working_days() {
        let inputs = PayrollInputs {
            rate: RateProfile::new(dec("537.50")),
            attendance: AttendanceInput {
                working_days: dec("10.5"),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = compute_payroll(&inputs).unwrap().breakdown;
        assert_eq!(result.basic_pay, dec("5643.75"));
    }

    #[test]
    fn test_late_deduction_for_uneven_minutes() {
        let inputs = PayrollInputs {
            rate: RateProfile::new(dec("600")),
            attendance: AttendanceInput {
                late_minutes: dec("15"),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = compute_payroll(&inputs).unwrap().breakdown;
        // 75.00 / 60 * 15
        assert_eq!(result.late_deduction, dec("18.75"));
        assert_eq!(result.net_pay, dec("-18.75"));
    }

    #[test]
    fn test_identities_hold() {
        let inputs = PayrollInputs {
            deductions: DeductionSet {
                gbond: dec("12.34"),
                others: dec("0.01"),
                ..example_inputs().deductions
            },
            ..example_inputs()
        };
        let b = compute_payroll(&inputs).unwrap().breakdown;
        assert_eq!(b.gross_pay, b.basic_pay + b.overtime_pay);
        assert_eq!(
            b.total_deductions,
            b.late_deduction + dec("500") + dec("200") + dec("100") + dec("12.34") + dec("0.01")
        );
        assert_eq!(b.net_pay, b.gross_pay - b.total_deductions);
    }

    #[test]
    fn test_custom_overtime_multiplier() {
        let rules = PayrollRules {
            overtime_multiplier: dec("1.5"),
            ..Default::default()
        };
        let result = compute_payroll_with_rules(&example_inputs(), &rules).unwrap().breakdown;
        assert_eq!(result.overtime_pay, dec("750"));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let inputs = example_inputs();
        assert_eq!(compute_payroll(&inputs).unwrap(), compute_payroll(&inputs).unwrap());
    }

    #[test]
    fn test_audit_trace_has_seven_steps_in_order() {
        let trace = compute_payroll(&example_inputs()).unwrap().audit_trace;
        let ids: Vec<&str> = trace.steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "hourly_rate",
                "basic_pay",
                "overtime_pay",
                "gross_pay",
                "late_deduction",
                "total_deductions",
                "net_pay"
            ]
        );
        assert_eq!(trace.steps[6].step_number, 7);
    }

    #[test]
    fn test_audit_reasoning_explains_overtime() {
        let trace = compute_payroll(&example_inputs()).unwrap().audit_trace;
        let overtime = &trace.steps[2];
        assert!(overtime.reasoning.contains("$100"));
        assert!(overtime.reasoning.contains("1.25"));
        assert!(overtime.reasoning.contains("$625"));
        assert_eq!(overtime.output["overtime_pay"].as_str().unwrap(), "625");
    }

    #[test]
    fn test_audit_total_deductions_itemizes_every_deduction() {
        let trace = compute_payroll(&example_inputs()).unwrap().audit_trace;
        let input = &trace.steps[5].input;
        for key in ["late_deduction", "sss", "philhealth", "pagibig", "gbond", "others"] {
            assert!(input.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(input["sss"].as_str().unwrap(), "500");
    }

    #[test]
    fn test_process_payroll_creates_pending_record() {
        let record = process_payroll(
            "emp_001",
            march_first_half(),
            example_inputs(),
            &PayrollRules::default(),
        )
        .unwrap();
        assert_eq!(record.status, PayrollStatus::Pending);
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.breakdown.net_pay, dec("17375"));
        assert!(record.warnings.is_empty());
    }

    #[test]
    fn test_process_payroll_assigns_distinct_ids() {
        let rules = PayrollRules::default();
        let a = process_payroll("emp_001", march_first_half(), example_inputs(), &rules).unwrap();
        let b = process_payroll("emp_001", march_first_half(), example_inputs(), &rules).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_recalculate_keeps_identity_and_status() {
        let rules = PayrollRules::default();
        let mut record =
            process_payroll("emp_001", march_first_half(), example_inputs(), &rules).unwrap();
        record.set_status(PayrollStatus::Released);
        let id = record.id;

        let mut edited = example_inputs();
        edited.attendance.working_days = dec("20");
        let trace = recalculate_payroll(&mut record, edited, &rules).unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.status, PayrollStatus::Released);
        assert_eq!(record.inputs.attendance.working_days, dec("20"));
        assert_eq!(record.breakdown.basic_pay, dec("16000"));
        assert_eq!(record.breakdown.net_pay, dec("15775"));
        assert_eq!(trace.steps.len(), 7);
    }

    #[test]
    fn test_recalculate_refreshes_warnings() {
        let rules = PayrollRules::default();
        let mut inputs = example_inputs();
        inputs.deductions.others = dec("100000");
        let mut record = process_payroll("emp_001", march_first_half(), inputs, &rules).unwrap();
        assert!(record.has_negative_net_pay());
        assert_eq!(record.warnings.len(), 1);

        recalculate_payroll(&mut record, example_inputs(), &rules).unwrap();
        assert!(!record.has_negative_net_pay());
        assert!(record.warnings.is_empty());
    }

    /// PC-007: a figure beyond the decimal range is an error, not a panic
    #[test]
    fn test_basic_pay_overflow_is_reported() {
        let inputs = PayrollInputs {
            rate: RateProfile::new(Decimal::MAX),
            attendance: AttendanceInput {
                working_days: dec("2"),
                ..Default::default()
            },
            ..Default::default()
        };
        match compute_payroll(&inputs) {
            Err(EngineError::ArithmeticOverflow { step }) => assert_eq!(step, "basic_pay"),
            other => panic!("Expected ArithmeticOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_deduction_overflow_is_reported() {
        let inputs = PayrollInputs {
            deductions: DeductionSet {
                sss: Decimal::MAX,
                gbond: Decimal::MAX,
                ..Default::default()
            },
            ..example_inputs()
        };
        assert!(matches!(
            compute_payroll(&inputs),
            Err(EngineError::ArithmeticOverflow { step }) if step == "total_deductions"
        ));
    }

    #[test]
    fn test_net_pay_overflow_is_reported() {
        let inputs = PayrollInputs {
            rate: RateProfile::new(Decimal::MAX),
            attendance: AttendanceInput {
                working_days: dec("1"),
                ..Default::default()
            },
            deductions: DeductionSet {
                sss: Decimal::MIN,
                ..Default::default()
            },
        };
        assert!(matches!(
            compute_payroll(&inputs),
            Err(EngineError::ArithmeticOverflow { step }) if step == "net_pay"
        ));
    }

    #[test]
    fn test_failed_recalculation_leaves_record_untouched() {
        let rules = PayrollRules::default();
        let mut record =
            process_payroll("emp_001", march_first_half(), example_inputs(), &rules).unwrap();
        let before = record.clone();

        let mut huge = example_inputs();
        huge.attendance.overtime_hours = Decimal::MAX;
        assert!(recalculate_payroll(&mut record, huge, &rules).is_err());
        assert_eq!(record, before);
    }

    /// PC-008: the trace explains the hourly rate with the profile's own day length
    #[test]
    fn test_hourly_step_uses_profile_day_length() {
        let rules = PayrollRules {
            standard_hours_per_day: dec("10"),
            ..Default::default()
        };
        let inputs = PayrollInputs {
            rate: rules.rate_profile(dec("1000")).unwrap(),
            ..example_inputs()
        };
        let result = compute_payroll_with_rules(&inputs, &rules).unwrap();
        let step = &result.audit_trace.steps[0];

        assert_eq!(result.breakdown.hourly_rate, dec("100"));
        assert_eq!(
            step.reasoning,
            format!("$1000 / 10 hours = ${} (rounded to cents)", result.breakdown.hourly_rate)
        );
        assert_eq!(step.input["hours_per_day"].as_str().unwrap(), "10");
        assert_eq!(
            step.output["hourly_rate"].as_str().unwrap(),
            result.breakdown.hourly_rate.to_string()
        );
    }

    #[test]
    fn test_eight_hour_profile_under_ten_hour_rules_reports_eight() {
        let rules = PayrollRules {
            standard_hours_per_day: dec("10"),
            ..Default::default()
        };
        let result = compute_payroll_with_rules(&example_inputs(), &rules).unwrap();
        assert_eq!(result.breakdown.hourly_rate, dec("100"));
        assert_eq!(
            result.audit_trace.steps[0].reasoning,
            format!("$800 / 8 hours = ${} (rounded to cents)", result.breakdown.hourly_rate)
        );
    }
}
