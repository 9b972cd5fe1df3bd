//! Edit-window policy.
//!
//! Shifts may only be added or deleted in the current week and the next one.
//! On Mondays the previous week also stays open so it can be corrected after
//! it ends. Totals are never affected by the lock; it only gates mutation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::week_grouping::week_start;

/// The inclusive range of dates that can currently be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditWindow {
    /// First editable date: this week's Monday, or last week's on a Monday.
    pub first_date: NaiveDate,
    /// Last editable date: the Sunday ending next week.
    pub last_date: NaiveDate,
}

impl EditWindow {
    /// Checks if a given date falls within the window.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.first_date && date <= self.last_date
    }
}

/// Returns the range of dates editable relative to `today`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::editable_window;
/// use chrono::NaiveDate;
///
/// // 2024-01-17 is a Wednesday
/// let window = editable_window(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
/// assert_eq!(window.first_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// assert_eq!(window.last_date, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
/// ```
pub fn editable_window(today: NaiveDate) -> EditWindow {
    let current_week_start = week_start(today);
    let first_date = if today.weekday() == Weekday::Mon {
        current_week_start - Duration::days(7)
    } else {
        current_week_start
    };
    EditWindow {
        first_date,
        last_date: current_week_start + Duration::days(13),
    }
}

/// Returns true if shifts in the viewed week may not be added or deleted.
///
/// The viewed date is normalized to its Monday, so any day of the week may be
/// passed. The current and next weeks are open; the previous week is open only
/// when today is a Monday; every other week is locked.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::is_week_locked;
/// use chrono::NaiveDate;
///
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// let this_monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let last_monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
///
/// assert!(!is_week_locked(this_monday, wednesday));
/// assert!(is_week_locked(last_monday, wednesday));
/// assert!(!is_week_locked(last_monday, this_monday));
/// ```
pub fn is_week_locked(viewed_week_start: NaiveDate, today: NaiveDate) -> bool {
    let viewed = week_start(viewed_week_start);
    let current_week_start = week_start(today);
    let next_week_start = current_week_start + Duration::days(7);
    let previous_week_start = current_week_start - Duration::days(7);

    if viewed == current_week_start || viewed == next_week_start {
        return false;
    }
    if today.weekday() == Weekday::Mon && viewed == previous_week_start {
        return false;
    }
    true
}

/// Returns true if a date may be picked for a new shift.
///
/// Dates after the end of next week, and dates before the start of the editable
/// window, are not selectable.
pub fn is_date_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    editable_window(today).contains_date(date)
}
