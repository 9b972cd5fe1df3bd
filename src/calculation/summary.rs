//! Summary aggregation.
//!
//! Turns a set of shifts into per-shift pay lines and aggregates them into
//! totals and averages, optionally scoped to a week or a pay cycle first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PayConfig;
use crate::models::{
    AuditTrace, AuditWarning, PaySummary, Shift, ShiftPayLine, Store, SummaryReport, UserSettings,
    WARNING_BREAK_EXCEEDS_SPAN, WARNING_FUEL_CLAIM_AT_HOME_STORE, WARNING_STORE_MILEAGE_MISSING,
    WARNING_UNKNOWN_STORE, find_store,
};

use super::fuel_expense::{FuelEligibility, calculate_fuel_expense, fuel_expense};
use super::pay_cycle::pay_cycle_containing;
use super::shift_pay::{calculate_shift_pay, hourly_rate};
use super::week_grouping::week_bounds;

/// Which shifts a summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "date", rename_all = "snake_case")]
pub enum SummaryScope {
    /// Every shift.
    AllTime,
    /// The Monday-start week containing the date.
    Week(NaiveDate),
    /// The pay cycle containing the date. Empty when no payday is set.
    PayCycle(NaiveDate),
}

fn build_line(
    shift: &Shift,
    hours: Decimal,
    rate: Decimal,
    gross_pay: Decimal,
    fuel: Decimal,
    stores: &[Store],
) -> ShiftPayLine {
    ShiftPayLine {
        shift_id: shift.id.clone(),
        date: shift.date,
        start_time: shift.start_time.format("%H:%M").to_string(),
        end_time: shift.end_time.format("%H:%M").to_string(),
        break_duration: shift.break_duration,
        in_charge: shift.in_charge,
        store_label: find_store(stores, shift.store_id.as_deref()).map(Store::label),
        hours,
        rate,
        gross_pay,
        fuel,
        total_pay: gross_pay + fuel,
    }
}

/// Computes the pay line for a single shift.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::shift_pay_line;
/// use shift_pay_engine::config::PayConfig;
/// use shift_pay_engine::models::{Shift, UserSettings};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     30,
/// );
/// let settings = UserSettings { pay_rate: Decimal::from(12), ..UserSettings::default() };
///
/// let line = shift_pay_line(&shift, &settings, &[], &PayConfig::default());
/// assert_eq!(line.hours, Decimal::new(75, 1));
/// assert_eq!(line.total_pay, Decimal::from(90));
/// ```
pub fn shift_pay_line(
    shift: &Shift,
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> ShiftPayLine {
    let hours = shift.worked_hours();
    let rate = hourly_rate(settings.pay_rate, shift, config);
    let fuel = fuel_expense(shift, stores, settings.home_store(), config);
    build_line(shift, hours, rate, hours * rate, fuel, stores)
}

/// Computes pay lines for every shift, ascending by date.
///
/// Shifts on the same date keep their input order.
pub fn shift_pay_lines(
    shifts: &[Shift],
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> Vec<ShiftPayLine> {
    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    ordered.sort_by_key(|s| s.date);
    ordered
        .into_iter()
        .map(|shift| shift_pay_line(shift, settings, stores, config))
        .collect()
}

/// Aggregates already computed lines into totals and averages.
pub fn summarize_lines(lines: &[ShiftPayLine]) -> PaySummary {
    let shift_count = lines.len();
    let total_hours: Decimal = lines.iter().map(|l| l.hours).sum();
    let gross_pay: Decimal = lines.iter().map(|l| l.gross_pay).sum();
    let total_fuel: Decimal = lines.iter().map(|l| l.fuel).sum();
    let total_pay = gross_pay + total_fuel;

    let (avg_pay_per_shift, avg_hours_per_shift) = if shift_count == 0 {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let count = Decimal::from(shift_count);
        (total_pay / count, total_hours / count)
    };

    PaySummary {
        shift_count,
        total_hours,
        gross_pay,
        total_fuel,
        total_pay,
        avg_pay_per_shift,
        avg_hours_per_shift,
    }
}

/// Sums hours, gross pay and fuel across shifts and derives the averages.
///
/// Averages are zero for an empty input.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::summarize;
/// use shift_pay_engine::config::PayConfig;
/// use shift_pay_engine::models::{PaySummary, UserSettings};
///
/// let summary = summarize(&[], &UserSettings::default(), &[], &PayConfig::default());
/// assert_eq!(summary, PaySummary::default());
/// ```
pub fn summarize(
    shifts: &[Shift],
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> PaySummary {
    let summary = summarize_lines(&shift_pay_lines(shifts, settings, stores, config));
    debug!(
        shift_count = summary.shift_count,
        total_pay = %summary.total_pay,
        "Summarized shifts"
    );
    summary
}

/// Returns the shifts that fall inside a scope.
pub fn filter_by_scope(
    shifts: &[Shift],
    scope: SummaryScope,
    settings: &UserSettings,
    config: &PayConfig,
) -> Vec<Shift> {
    match scope {
        SummaryScope::AllTime => shifts.to_vec(),
        SummaryScope::Week(anchor) => {
            let bounds = week_bounds(anchor);
            shifts
                .iter()
                .filter(|s| bounds.contains_date(s.date))
                .cloned()
                .collect()
        }
        SummaryScope::PayCycle(anchor) => {
            let Some(last_payday) = settings.last_payday else {
                return Vec::new();
            };
            let cycle = pay_cycle_containing(anchor, last_payday, config);
            shifts
                .iter()
                .filter(|s| cycle.contains_date(s.date))
                .cloned()
                .collect()
        }
    }
}

/// Summarizes only the shifts inside a scope.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::{SummaryScope, summarize_scope};
/// use shift_pay_engine::config::PayConfig;
/// use shift_pay_engine::models::{Shift, UserSettings};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// let shifts = vec![
///     Shift::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), nine, five, 0),
///     Shift::new(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(), nine, five, 0),
/// ];
///
/// let week = SummaryScope::Week(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
/// let settings = UserSettings::default();
/// let summary = summarize_scope(&shifts, week, &settings, &[], &PayConfig::default());
/// assert_eq!(summary.shift_count, 1);
/// ```
pub fn summarize_scope(
    shifts: &[Shift],
    scope: SummaryScope,
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> PaySummary {
    summarize(
        &filter_by_scope(shifts, scope, settings, config),
        settings,
        stores,
        config,
    )
}

fn push_warning(trace: &mut AuditTrace, code: &str, shift: &Shift, message: String) {
    warn!(shift_id = %shift.id, code, "{}", message);
    trace.warnings.push(AuditWarning {
        code: code.to_string(),
        message,
        shift_id: shift.id.clone(),
    });
}

/// Computes lines and totals for a set of shifts, recording every step.
///
/// Each shift contributes a shift pay step followed by a fuel expense step.
/// Inputs the engine degrades on (a break longer than the shift, a store that
/// does not resolve, a fuel claim at the home store or at a store with no
/// mileage) add a warning to the trace.
pub fn build_summary_report(
    shifts: &[Shift],
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> SummaryReport {
    let mut ordered: Vec<&Shift> = shifts.iter().collect();
    ordered.sort_by_key(|s| s.date);

    let mut audit_trace = AuditTrace::default();
    let mut lines = Vec::with_capacity(ordered.len());
    let mut step_number = 1;

    for shift in ordered {
        let pay = calculate_shift_pay(shift, settings.pay_rate, config, step_number);
        audit_trace.steps.push(pay.audit_step);
        step_number += 1;

        let fuel = calculate_fuel_expense(
            shift,
            stores,
            settings.home_store(),
            config,
            step_number,
        );
        audit_trace.steps.push(fuel.audit_step);
        step_number += 1;

        if shift.break_exceeds_span() {
            push_warning(
                &mut audit_trace,
                WARNING_BREAK_EXCEEDS_SPAN,
                shift,
                format!(
                    "Break of {} minutes exceeds the {} minute shift; hours set to 0",
                    shift.break_duration,
                    shift.span_minutes()
                ),
            );
        }
        if let Some(store_id) = shift.store_id.as_deref() {
            if find_store(stores, Some(store_id)).is_none() {
                push_warning(
                    &mut audit_trace,
                    WARNING_UNKNOWN_STORE,
                    shift,
                    format!("Store '{}' not found", store_id),
                );
            }
        }
        match fuel.eligibility {
            FuelEligibility::HomeStore => push_warning(
                &mut audit_trace,
                WARNING_FUEL_CLAIM_AT_HOME_STORE,
                shift,
                "Fuel claimed for a shift at the home store; not reimbursed".to_string(),
            ),
            FuelEligibility::MileageMissing => push_warning(
                &mut audit_trace,
                WARNING_STORE_MILEAGE_MISSING,
                shift,
                "Fuel claimed for a store with no mileage recorded; not reimbursed".to_string(),
            ),
            _ => {}
        }

        lines.push(build_line(
            shift,
            pay.hours,
            pay.rate,
            pay.gross_pay,
            fuel.amount,
            stores,
        ));
    }

    let summary = summarize_lines(&lines);
    debug!(
        shift_count = summary.shift_count,
        step_count = audit_trace.steps.len(),
        warning_count = audit_trace.warnings.len(),
        "Built summary report"
    );

    SummaryReport {
        lines,
        summary,
        audit_trace,
    }
}
