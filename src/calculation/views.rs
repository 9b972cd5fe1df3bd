//! Week view and shift history.
//!
//! Ready-to-render reductions built on the grouper and the aggregator. The
//! week view drives the dashboard; the history lists every shift grouped by
//! pay cycle, or by week alone when no payday is known.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::PayConfig;
use crate::models::{
    PayCycle, PayCycleSummary, Shift, ShiftHistory, Store, UserSettings, WeekSummary, WeekView,
};

use super::edit_window::is_week_locked;
use super::pay_cycle::{group_by_pay_cycle, next_payday};
use super::summary::{shift_pay_lines, summarize_lines};
use super::week_grouping::{group_by_week, shifts_in_week, week_bounds};

/// Summarizes the shifts of one week.
///
/// `shifts` should already be limited to the week; they are not filtered.
pub fn summarize_week(
    week_start: NaiveDate,
    shifts: &[Shift],
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> WeekSummary {
    let bounds = week_bounds(week_start);
    let lines = shift_pay_lines(shifts, settings, stores, config);
    let summary = summarize_lines(&lines);
    WeekSummary {
        week_start: bounds.start,
        week_end: bounds.end,
        lines,
        summary,
    }
}

/// Summarizes a pay cycle and each of its weeks, most recent week first.
pub fn summarize_pay_cycle(
    cycle: &PayCycle,
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> PayCycleSummary {
    let weeks: Vec<WeekSummary> = cycle
        .weeks
        .iter()
        .rev()
        .map(|(start, shifts)| summarize_week(*start, shifts, settings, stores, config))
        .collect();
    let all_lines: Vec<_> = weeks
        .iter()
        .rev()
        .flat_map(|w| w.lines.iter().cloned())
        .collect();

    PayCycleSummary {
        start_date: cycle.start_date,
        end_date: cycle.end_date,
        weeks,
        summary: summarize_lines(&all_lines),
    }
}

/// Builds the dashboard view of the week containing `viewed_date`.
///
/// The summary is computed whether or not the week is locked.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::week_view;
/// use shift_pay_engine::config::PayConfig;
/// use shift_pay_engine::models::{Shift, UserSettings};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shifts = vec![Shift::new(
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     0,
/// )];
/// let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
///
/// let view = week_view(
///     &shifts,
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     today,
///     &UserSettings::default(),
///     &[],
///     &PayConfig::default(),
/// );
/// assert!(view.is_locked);
/// assert_eq!(view.summary.shift_count, 1);
/// ```
pub fn week_view(
    shifts: &[Shift],
    viewed_date: NaiveDate,
    today: NaiveDate,
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> WeekView {
    let bounds = week_bounds(viewed_date);
    let lines = shift_pay_lines(&shifts_in_week(shifts, viewed_date), settings, stores, config);
    let summary = summarize_lines(&lines);

    WeekView {
        week_start: bounds.start,
        week_end: bounds.end,
        is_locked: is_week_locked(bounds.start, today),
        lines,
        summary,
        next_payday: next_payday(settings.last_payday, today, config),
    }
}

/// Builds the full shift history, newest first at every level.
///
/// With a last payday set, shifts are grouped into pay cycles and then weeks;
/// without one, into weeks only.
pub fn build_history(
    shifts: &[Shift],
    settings: &UserSettings,
    stores: &[Store],
    config: &PayConfig,
) -> ShiftHistory {
    let history = match settings.last_payday {
        Some(last_payday) => ShiftHistory::ByPayCycle(
            group_by_pay_cycle(shifts, last_payday, config)
                .iter()
                .map(|cycle| summarize_pay_cycle(cycle, settings, stores, config))
                .collect(),
        ),
        None => ShiftHistory::ByWeek(
            group_by_week(shifts)
                .iter()
                .rev()
                .map(|(start, week)| summarize_week(*start, week, settings, stores, config))
                .collect(),
        ),
    };

    debug!(
        shift_count = shifts.len(),
        by_pay_cycle = matches!(history, ShiftHistory::ByPayCycle(_)),
        "Built shift history"
    );
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_shift(id: &str, on: NaiveDate) -> Shift {
        Shift {
            id: id.to_string(),
            date: on,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            break_duration: 30,
            in_charge: false,
            store_id: None,
            is_fuel_claim: false,
        }
    }

    fn settings(last_payday: Option<NaiveDate>) -> UserSettings {
        UserSettings {
            pay_rate: dec("12.00"),
            last_payday,
            home_store_id: None,
        }
    }

    /// HV-001: week view of the current week
    #[test]
    fn test_week_view_current_week() {
        let shifts = vec![
            make_shift("wed", date(2024, 1, 17)),
            make_shift("mon", date(2024, 1, 15)),
            make_shift("prev", date(2024, 1, 14)),
        ];
        let today = date(2024, 1, 17);

        let view = week_view(
            &shifts,
            today,
            today,
            &settings(Some(date(2024, 1, 1))),
            &[],
            &PayConfig::default(),
        );

        assert_eq!(view.week_start, date(2024, 1, 15));
        assert_eq!(view.week_end, date(2024, 1, 21));
        assert!(!view.is_locked);
        let ids: Vec<&str> = view.lines.iter().map(|l| l.shift_id.as_str()).collect();
        assert_eq!(ids, vec!["mon", "wed"]);
        assert_eq!(view.summary.gross_pay, dec("180.00"));
        assert_eq!(view.next_payday, Some(date(2024, 1, 29)));
    }

    /// HV-002: locked week still reports totals
    #[test]
    fn test_week_view_locked_week_has_totals() {
        let shifts = vec![make_shift("old", date(2024, 1, 3))];

        let view = week_view(
            &shifts,
            date(2024, 1, 3),
            date(2024, 1, 17),
            &settings(None),
            &[],
            &PayConfig::default(),
        );

        assert!(view.is_locked);
        assert_eq!(view.summary.shift_count, 1);
        assert_eq!(view.summary.total_hours, dec("7.5"));
        assert!(view.next_payday.is_none());
    }

    /// HV-003: history falls back to weeks without a payday
    #[test]
    fn test_history_by_week_without_payday() {
        let shifts = vec![
            make_shift("a", date(2024, 1, 15)),
            make_shift("b", date(2024, 1, 23)),
            make_shift("c", date(2024, 1, 16)),
        ];

        let history = build_history(&shifts, &settings(None), &[], &PayConfig::default());

        let ShiftHistory::ByWeek(weeks) = history else {
            panic!("expected weekly grouping");
        };
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, date(2024, 1, 22));
        assert_eq!(weeks[1].week_start, date(2024, 1, 15));
        assert_eq!(weeks[1].week_end, date(2024, 1, 21));
        assert_eq!(weeks[1].summary.shift_count, 2);
        assert_eq!(weeks[1].lines[0].shift_id, "a");
    }

    /// HV-004: history grouped by pay cycle, newest first
    #[test]
    fn test_history_by_pay_cycle() {
        let shifts = vec![
            make_shift("payday", date(2024, 1, 1)),
            make_shift("first", date(2024, 1, 2)),
            make_shift("later", date(2024, 1, 24)),
        ];

        let history = build_history(
            &shifts,
            &settings(Some(date(2024, 1, 1))),
            &[],
            &PayConfig::default(),
        );

        let ShiftHistory::ByPayCycle(cycles) = history else {
            panic!("expected pay cycle grouping");
        };
        assert_eq!(cycles.len(), 2);

        let current = &cycles[0];
        assert_eq!(current.start_date, date(2024, 1, 2));
        assert_eq!(current.end_date, date(2024, 1, 29));
        assert_eq!(current.summary.shift_count, 2);
        assert_eq!(current.weeks[0].week_start, date(2024, 1, 22));
        assert_eq!(current.weeks[1].week_start, date(2024, 1, 1));

        let previous = &cycles[1];
        assert_eq!(previous.end_date, date(2024, 1, 1));
        assert_eq!(previous.summary.shift_count, 1);
    }

    #[test]
    fn test_cycle_summary_equals_sum_of_weeks() {
        let shifts: Vec<Shift> = (2..=29)
            .step_by(3)
            .map(|d| make_shift(&format!("s{}", d), date(2024, 1, d)))
            .collect();

        let history = build_history(
            &shifts,
            &settings(Some(date(2024, 1, 1))),
            &[],
            &PayConfig::default(),
        );
        let ShiftHistory::ByPayCycle(cycles) = history else {
            panic!("expected pay cycle grouping");
        };
        assert_eq!(cycles.len(), 1);

        let cycle = &cycles[0];
        let week_total: Decimal = cycle.weeks.iter().map(|w| w.summary.total_pay).sum();
        let week_count: usize = cycle.weeks.iter().map(|w| w.summary.shift_count).sum();
        assert_eq!(cycle.summary.total_pay, week_total);
        assert_eq!(cycle.summary.shift_count, week_count);
        assert_eq!(week_count, shifts.len());
    }

    #[test]
    fn test_empty_history() {
        let history = build_history(&[], &settings(None), &[], &PayConfig::default());
        assert!(history.is_empty());

        let history = build_history(
            &[],
            &settings(Some(date(2024, 1, 1))),
            &[],
            &PayConfig::default(),
        );
        assert!(history.is_empty());
    }
}
