//! Week and pay cycle models.
//!
//! This module contains the [`WeekBounds`] and [`PayCycle`] types that the
//! grouper buckets shifts into.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Shift;

/// An inclusive date range running Monday through Sunday.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::WeekBounds;
/// use chrono::NaiveDate;
///
/// let week = WeekBounds {
///     start: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(),
/// };
///
/// assert!(week.contains_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())); // Monday
/// assert!(week.contains_date(NaiveDate::from_ymd_opt(2024, 1, 21).unwrap())); // Sunday
/// assert!(!week.contains_date(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekBounds {
    /// The Monday that starts the week (inclusive).
    pub start: NaiveDate,
    /// The Sunday that ends the week (inclusive).
    pub end: NaiveDate,
}

impl WeekBounds {
    /// Checks if a given date falls within this week, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// One fixed-length pay cycle and the shifts worked in it, bucketed by week.
///
/// Cycles are identified by their end date, which is a payday. Weeks are keyed
/// by their Monday; a week that straddles two cycles appears in both, each
/// holding only the shifts on its side of the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCycle {
    /// First day of the cycle (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the cycle (inclusive); the payday.
    pub end_date: NaiveDate,
    /// Shifts in the cycle keyed by week start, each list in ascending date order.
    pub weeks: BTreeMap<NaiveDate, Vec<Shift>>,
}

impl PayCycle {
    /// Creates a cycle with no shifts.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            weeks: BTreeMap::new(),
        }
    }

    /// Checks if a given date falls within this cycle, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::PayCycle;
    /// use chrono::NaiveDate;
    ///
    /// let cycle = PayCycle::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
    /// );
    /// assert!(cycle.contains_date(NaiveDate::from_ymd_opt(2024, 1, 29).unwrap()));
    /// assert!(!cycle.contains_date(NaiveDate::from_ymd_opt(2024, 1, 30).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates over every shift in the cycle, week by week in ascending order.
    pub fn shifts(&self) -> impl Iterator<Item = &Shift> {
        self.weeks.values().flatten()
    }

    /// Returns the number of shifts in the cycle.
    pub fn shift_count(&self) -> usize {
        self.weeks.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_shift(id: &str, on: NaiveDate) -> Shift {
        Shift {
            id: id.to_string(),
            date: on,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            break_duration: 0,
            in_charge: false,
            store_id: None,
            is_fuel_claim: false,
        }
    }

    /// PC-001: contains_date on both boundaries
    #[test]
    fn test_contains_date_on_boundaries() {
        let cycle = PayCycle::new(date(2024, 1, 2), date(2024, 1, 29));

        assert!(cycle.contains_date(date(2024, 1, 2)));
        assert!(cycle.contains_date(date(2024, 1, 29)));
        assert!(!cycle.contains_date(date(2024, 1, 1)));
        assert!(!cycle.contains_date(date(2024, 1, 30)));
    }

    /// PC-002: shifts iterate week by week
    #[test]
    fn test_shifts_iterate_in_week_order() {
        let mut cycle = PayCycle::new(date(2024, 1, 2), date(2024, 1, 29));
        cycle
            .weeks
            .insert(date(2024, 1, 15), vec![make_shift("b", date(2024, 1, 16))]);
        cycle.weeks.insert(
            date(2024, 1, 8),
            vec![
                make_shift("a1", date(2024, 1, 8)),
                make_shift("a2", date(2024, 1, 10)),
            ],
        );

        let ids: Vec<&str> = cycle.shifts().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b"]);
        assert_eq!(cycle.shift_count(), 3);
    }

    #[test]
    fn test_empty_cycle_has_no_shifts() {
        let cycle = PayCycle::new(date(2024, 1, 2), date(2024, 1, 29));
        assert_eq!(cycle.shift_count(), 0);
        assert!(cycle.shifts().next().is_none());
    }

    #[test]
    fn test_serialize_week_bounds() {
        let week = WeekBounds {
            start: date(2024, 1, 15),
            end: date(2024, 1, 21),
        };
        let json = serde_json::to_string(&week).unwrap();
        assert_eq!(json, r#"{"start":"2024-01-15","end":"2024-01-21"}"#);
    }

    #[test]
    fn test_serialize_pay_cycle_keys_weeks_by_date() {
        let mut cycle = PayCycle::new(date(2024, 1, 2), date(2024, 1, 29));
        cycle
            .weeks
            .insert(date(2024, 1, 15), vec![make_shift("s1", date(2024, 1, 16))]);

        let json = serde_json::to_string(&cycle).unwrap();
        assert!(json.contains("\"start_date\":\"2024-01-02\""));
        assert!(json.contains("\"end_date\":\"2024-01-29\""));
        assert!(json.contains("\"2024-01-15\":["));
    }
}
