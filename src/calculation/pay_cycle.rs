//! Pay cycle grouping and payday estimation.
//!
//! Pay cycles are fixed-length periods (28 days by default) that recur from a
//! known payday in both directions. Each cycle ends on a payday and starts the
//! day after the previous one.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::config::PayConfig;
use crate::models::{PayCycle, Shift};

use super::week_grouping::week_start;

/// Returns the payday that ends the cycle containing `date`.
///
/// This is the first `last_payday + k × cycle length` on or after `date`, with
/// `k` negative for dates before the anchor. The cycle length is at most
/// [`MAX_PAY_CYCLE_DAYS`](crate::config::MAX_PAY_CYCLE_DAYS), so the result
/// stays within a cycle of `date`.
fn cycle_end_for(date: NaiveDate, last_payday: NaiveDate, cycle_days: i64) -> NaiveDate {
    let offset = (date - last_payday).num_days();
    let cycles = (offset + cycle_days - 1).div_euclid(cycle_days);
    last_payday + Duration::days(cycles * cycle_days)
}

/// Returns the empty pay cycle that contains `date`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::pay_cycle_containing;
/// use shift_pay_engine::config::PayConfig;
/// use chrono::NaiveDate;
///
/// let last_payday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let cycle = pay_cycle_containing(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     last_payday,
///     &PayConfig::default(),
/// );
/// assert_eq!(cycle.start_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
/// assert_eq!(cycle.end_date, NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
/// ```
pub fn pay_cycle_containing(
    date: NaiveDate,
    last_payday: NaiveDate,
    config: &PayConfig,
) -> PayCycle {
    let cycle_days = config.cycle_days();
    let end_date = cycle_end_for(date, last_payday, cycle_days);
    PayCycle::new(end_date - Duration::days(cycle_days - 1), end_date)
}

/// Groups shifts into pay cycles anchored on the last payday.
///
/// Each shift goes to the cycle whose end date is the first payday on or
/// after the shift date; inside a cycle, shifts are bucketed by Monday-start
/// week in ascending date order. Only cycles that hold shifts are returned,
/// most recent first.
///
/// Cycles extend backwards from the anchor as well as forwards: a shift dated
/// before `last_payday` goes to the earlier cycle that actually contains it,
/// not to the cycle ending on `last_payday`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::group_by_pay_cycle;
/// use shift_pay_engine::config::PayConfig;
/// use shift_pay_engine::models::Shift;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// let last_payday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let shifts = vec![
///     Shift::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), nine, five, 0),
///     Shift::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), nine, five, 0),
/// ];
///
/// let cycles = group_by_pay_cycle(&shifts, last_payday, &PayConfig::default());
/// assert_eq!(cycles.len(), 2);
/// assert_eq!(cycles[0].end_date, NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
/// assert_eq!(cycles[1].end_date, last_payday);
/// ```
pub fn group_by_pay_cycle(
    shifts: &[Shift],
    last_payday: NaiveDate,
    config: &PayConfig,
) -> Vec<PayCycle> {
    let mut cycles: BTreeMap<NaiveDate, PayCycle> = BTreeMap::new();

    for shift in shifts {
        let cycle = pay_cycle_containing(shift.date, last_payday, config);
        cycles
            .entry(cycle.end_date)
            .or_insert(cycle)
            .weeks
            .entry(week_start(shift.date))
            .or_default()
            .push(shift.clone());
    }

    for cycle in cycles.values_mut() {
        for week in cycle.weeks.values_mut() {
            week.sort_by_key(|s| s.date);
        }
    }

    debug!(
        shift_count = shifts.len(),
        cycle_count = cycles.len(),
        last_payday = %last_payday,
        "Grouped shifts into pay cycles"
    );

    cycles.into_values().rev().collect()
}

/// Returns the first payday strictly after `today`.
///
/// Paydays recur every cycle length from `last_payday`. If `last_payday` is
/// itself after today it is returned unchanged. Returns `None` when no payday
/// has been set, or when the next payday lies beyond the last representable
/// date.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::next_payday;
/// use shift_pay_engine::config::PayConfig;
/// use chrono::NaiveDate;
///
/// let next = next_payday(
///     NaiveDate::from_ymd_opt(2024, 1, 1),
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     &PayConfig::default(),
/// );
/// assert_eq!(next, NaiveDate::from_ymd_opt(2024, 1, 29));
/// ```
pub fn next_payday(
    last_payday: Option<NaiveDate>,
    today: NaiveDate,
    config: &PayConfig,
) -> Option<NaiveDate> {
    let last_payday = last_payday?;
    if last_payday > today {
        return Some(last_payday);
    }
    let cycle_days = config.cycle_days();
    let elapsed = (today - last_payday).num_days();
    let cycles = elapsed / cycle_days + 1;
    last_payday.checked_add_signed(Duration::days(cycles * cycle_days))
}

/// Returns the number of days from `today` until the next payday.
pub fn days_until_next_payday(
    last_payday: Option<NaiveDate>,
    today: NaiveDate,
    config: &PayConfig,
) -> Option<i64> {
    next_payday(last_payday, today, config).map(|payday| (payday - today).num_days())
}
