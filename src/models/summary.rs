//! Summary result models for the Shift Pay Engine.
//!
//! This module contains the per-shift [`ShiftPayLine`], the [`PaySummary`]
//! totals, the week and pay cycle views built from them, and the audit trace
//! that explains how each figure was reached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Warning raised when a shift's break is longer than the shift itself.
pub const WARNING_BREAK_EXCEEDS_SPAN: &str = "BREAK_EXCEEDS_SPAN";

/// Warning raised when a shift references a store that is not in the snapshot.
pub const WARNING_UNKNOWN_STORE: &str = "UNKNOWN_STORE";

/// Warning raised when a fuel claim is made for a shift at the home store.
pub const WARNING_FUEL_CLAIM_AT_HOME_STORE: &str = "FUEL_CLAIM_AT_HOME_STORE";

/// Warning raised when a fuel claim is made for a store with no mileage.
pub const WARNING_STORE_MILEAGE_MISSING: &str = "STORE_MILEAGE_MISSING";

/// Decimal places used when presenting money and hours.
const DISPLAY_DP: u32 = 2;

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings mark inputs the engine degraded gracefully on, such as a fuel
/// claim against an unknown store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The shift the warning refers to.
    pub shift_id: String,
}

/// The complete audit trace for a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if any warning carries the given code.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The computed pay for one shift, ready for a table row or an export line.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::ShiftPayLine;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let line = ShiftPayLine {
///     shift_id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     start_time: "09:00".to_string(),
///     end_time: "17:00".to_string(),
///     break_duration: 30,
///     in_charge: false,
///     store_label: None,
///     hours: Decimal::new(75, 1),
///     rate: Decimal::new(1200, 2),
///     gross_pay: Decimal::new(9000, 2),
///     fuel: Decimal::ZERO,
///     total_pay: Decimal::new(9000, 2),
/// };
/// assert_eq!(line.total_pay, line.gross_pay + line.fuel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPayLine {
    /// The ID of the shift this line was computed from.
    pub shift_id: String,
    /// The shift date.
    pub date: NaiveDate,
    /// Start time as `HH:mm`.
    pub start_time: String,
    /// End time as `HH:mm`.
    pub end_time: String,
    /// Unpaid break in minutes.
    pub break_duration: u32,
    /// Whether the in-charge bonus applied.
    pub in_charge: bool,
    /// `name (number)` of the store, when it resolves.
    pub store_label: Option<String>,
    /// Worked hours.
    pub hours: Decimal,
    /// Effective hourly rate including any bonus.
    pub rate: Decimal,
    /// Hours multiplied by rate.
    pub gross_pay: Decimal,
    /// Fuel reimbursement.
    pub fuel: Decimal,
    /// Gross pay plus fuel.
    pub total_pay: Decimal,
}

/// Aggregated totals over a set of shifts.
///
/// All figures are held at full precision; use [`PaySummary::rounded`] when
/// presenting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Number of shifts summarized.
    pub shift_count: usize,
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Total gross pay.
    pub gross_pay: Decimal,
    /// Total fuel reimbursement.
    pub total_fuel: Decimal,
    /// Gross pay plus fuel.
    pub total_pay: Decimal,
    /// Total pay divided by shift count, zero when there are no shifts.
    pub avg_pay_per_shift: Decimal,
    /// Total hours divided by shift count, zero when there are no shifts.
    pub avg_hours_per_shift: Decimal,
}

impl PaySummary {
    /// Returns a copy with every figure rounded to two decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::PaySummary;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let summary = PaySummary {
    ///     gross_pay: Decimal::from_str("91.875").unwrap(),
    ///     ..PaySummary::default()
    /// };
    /// assert_eq!(summary.rounded().gross_pay, Decimal::from_str("91.88").unwrap());
    /// ```
    pub fn rounded(&self) -> Self {
        Self {
            shift_count: self.shift_count,
            total_hours: round_display(self.total_hours),
            gross_pay: round_display(self.gross_pay),
            total_fuel: round_display(self.total_fuel),
            total_pay: round_display(self.total_pay),
            avg_pay_per_shift: round_display(self.avg_pay_per_shift),
            avg_hours_per_shift: round_display(self.avg_hours_per_shift),
        }
    }
}

/// Rounds a value half away from zero to two decimals, the way currency is shown.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Per-shift lines, their totals and the audit trace behind them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// One line per shift, ascending by date.
    pub lines: Vec<ShiftPayLine>,
    /// Totals over the lines.
    pub summary: PaySummary,
    /// Steps and warnings recorded while computing the lines.
    pub audit_trace: AuditTrace,
}

/// One Monday-start week of shifts with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// The Monday that starts the week.
    pub week_start: NaiveDate,
    /// The Sunday that ends the week.
    pub week_end: NaiveDate,
    /// One line per shift, ascending by date.
    pub lines: Vec<ShiftPayLine>,
    /// Totals over the week.
    pub summary: PaySummary,
}

/// One pay cycle with its weeks and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCycleSummary {
    /// First day of the cycle.
    pub start_date: NaiveDate,
    /// The payday that ends the cycle.
    pub end_date: NaiveDate,
    /// Weeks in the cycle, most recent first.
    pub weeks: Vec<WeekSummary>,
    /// Totals over the whole cycle.
    pub summary: PaySummary,
}

/// Shift history, grouped by pay cycle when a payday is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "grouping", content = "groups", rename_all = "snake_case")]
pub enum ShiftHistory {
    /// Grouped by pay cycle, most recent first.
    ByPayCycle(Vec<PayCycleSummary>),
    /// Grouped by week only, most recent first; used when no payday is set.
    ByWeek(Vec<WeekSummary>),
}

impl ShiftHistory {
    /// Returns true if the history holds no groups.
    pub fn is_empty(&self) -> bool {
        match self {
            ShiftHistory::ByPayCycle(cycles) => cycles.is_empty(),
            ShiftHistory::ByWeek(weeks) => weeks.is_empty(),
        }
    }
}

/// Everything the dashboard shows for one viewed week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    /// The Monday that starts the viewed week.
    pub week_start: NaiveDate,
    /// The Sunday that ends the viewed week.
    pub week_end: NaiveDate,
    /// Whether adding or deleting shifts in this week is blocked.
    pub is_locked: bool,
    /// One line per shift in the week, ascending by date.
    pub lines: Vec<ShiftPayLine>,
    /// Totals over the week. Always computed, locked or not.
    pub summary: PaySummary,
    /// The next payday after today, when a last payday is set.
    pub next_payday: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_summary() -> PaySummary {
        PaySummary {
            shift_count: 3,
            total_hours: dec("22.3333333333"),
            gross_pay: dec("272.675"),
            total_fuel: dec("6.00"),
            total_pay: dec("278.675"),
            avg_pay_per_shift: dec("92.8916666666"),
            avg_hours_per_shift: dec("7.4444444444"),
        }
    }

    #[test]
    fn test_rounded_applies_two_decimals() {
        let rounded = sample_summary().rounded();

        assert_eq!(rounded.shift_count, 3);
        assert_eq!(rounded.total_hours, dec("22.33"));
        assert_eq!(rounded.gross_pay, dec("272.68"));
        assert_eq!(rounded.total_pay, dec("278.68"));
        assert_eq!(rounded.avg_pay_per_shift, dec("92.89"));
        assert_eq!(rounded.avg_hours_per_shift, dec("7.44"));
    }

    #[test]
    fn test_round_display_midpoint_goes_away_from_zero() {
        assert_eq!(round_display(dec("0.125")), dec("0.13"));
        assert_eq!(round_display(dec("0.135")), dec("0.14"));
    }

    #[test]
    fn test_default_summary_is_all_zero() {
        let summary = PaySummary::default();
        assert_eq!(summary.shift_count, 0);
        assert_eq!(summary.total_pay, Decimal::ZERO);
        assert_eq!(summary.avg_hours_per_shift, Decimal::ZERO);
    }

    #[test]
    fn test_audit_trace_has_warning() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning {
                code: WARNING_UNKNOWN_STORE.to_string(),
                message: "store 'x' not found".to_string(),
                shift_id: "shift_001".to_string(),
            }],
        };

        assert!(trace.has_warning(WARNING_UNKNOWN_STORE));
        assert!(!trace.has_warning(WARNING_BREAK_EXCEEDS_SPAN));
    }

    #[test]
    fn test_summary_serializes_decimals_as_strings() {
        let json = serde_json::to_string(&PaySummary {
            gross_pay: dec("90.00"),
            ..PaySummary::default()
        })
        .unwrap();

        assert!(json.contains("\"gross_pay\":\"90.00\""));
        assert!(json.contains("\"shift_count\":0"));
    }

    #[test]
    fn test_history_serialization_is_tagged() {
        let history = ShiftHistory::ByWeek(vec![]);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"grouping":"by_week","groups":[]}"#);
        assert!(history.is_empty());
    }
}
