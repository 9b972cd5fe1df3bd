//! Week detection and grouping.
//!
//! Weeks start on Monday and run seven days inclusive. This module finds the
//! week any date belongs to and buckets shifts by week.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Shift, WeekBounds};

/// Returns the Monday on or before the given date.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::week_start;
/// use chrono::NaiveDate;
///
/// // 2024-01-17 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// assert_eq!(week_start(wednesday), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Returns the Monday-to-Sunday week containing the anchor date.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::week_bounds;
/// use chrono::NaiveDate;
///
/// // 2024-01-21 is a Sunday, the last day of its week
/// let bounds = week_bounds(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());
/// assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());
/// ```
pub fn week_bounds(anchor: NaiveDate) -> WeekBounds {
    let start = week_start(anchor);
    WeekBounds {
        start,
        end: start + Duration::days(6),
    }
}

/// Groups shifts by the Monday of their week.
///
/// Shifts within a week are ordered by ascending date; shifts on the same date
/// keep their input order. Iterate the map in reverse for newest-first display.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::group_by_week;
/// use shift_pay_engine::models::Shift;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// let shifts = vec![
///     Shift::new(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(), nine, five, 0),
///     Shift::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), nine, five, 0),
///     Shift::new(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap(), nine, five, 0),
/// ];
///
/// let weeks = group_by_week(&shifts);
/// assert_eq!(weeks.len(), 2);
/// assert_eq!(weeks[&NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()].len(), 2);
/// ```
pub fn group_by_week(shifts: &[Shift]) -> BTreeMap<NaiveDate, Vec<Shift>> {
    let mut weeks: BTreeMap<NaiveDate, Vec<Shift>> = BTreeMap::new();
    for shift in shifts {
        weeks
            .entry(week_start(shift.date))
            .or_default()
            .push(shift.clone());
    }
    for week in weeks.values_mut() {
        week.sort_by_key(|s| s.date);
    }
    weeks
}

/// Returns the shifts that fall inside the week containing the anchor date,
/// ordered by ascending date.
pub fn shifts_in_week(shifts: &[Shift], anchor: NaiveDate) -> Vec<Shift> {
    let bounds = week_bounds(anchor);
    let mut selected: Vec<Shift> = shifts
        .iter()
        .filter(|s| bounds.contains_date(s.date))
        .cloned()
        .collect();
    selected.sort_by_key(|s| s.date);
    selected
}
