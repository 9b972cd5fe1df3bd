//! Shift model and related types.
//!
//! This module defines the [`Shift`] struct for representing a logged work
//! period, and the arithmetic that turns its wall-clock bounds into worked
//! hours.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Minutes in a day, added to a span whose end time is before its start.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Represents one worked period.
///
/// Start and end are naive times of day on the shift's `date`. An end time
/// earlier than the start time means the shift ran past midnight.
///
/// Records use camelCase field names, and times are written as `HH:mm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Wall-clock start time.
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    /// Wall-clock end time.
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_duration: u32,
    /// Whether the shift was worked in charge (earns the in-charge bonus).
    #[serde(default)]
    pub in_charge: bool,
    /// The store the shift was worked at, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Whether fuel reimbursement is requested for this shift.
    #[serde(default)]
    pub is_fuel_claim: bool,
}

impl Shift {
    /// Creates a shift with a freshly generated identifier and no flags set.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pay_engine::models::Shift;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let shift = Shift::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    ///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    ///     30,
    /// );
    /// assert!(!shift.id.is_empty());
    /// assert!(!shift.in_charge);
    /// ```
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_duration: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            start_time,
            end_time,
            break_duration,
            in_charge: false,
            store_id: None,
            is_fuel_claim: false,
        }
    }

    /// Returns true if the end time is before the start time.
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Minutes between start and end, before the break is deducted.
    ///
    /// Overnight shifts get 24 hours added. A shift whose start equals its end
    /// has a span of zero.
    pub fn span_minutes(&self) -> i64 {
        let minutes = self
            .end_time
            .signed_duration_since(self.start_time)
            .num_minutes();
        if minutes < 0 {
            minutes + MINUTES_PER_DAY
        } else {
            minutes
        }
    }

    /// Returns true if the unpaid break is longer than the shift itself.
    pub fn break_exceeds_span(&self) -> bool {
        i64::from(self.break_duration) > self.span_minutes()
    }

    /// Calculates the worked hours for the shift.
    ///
    /// The span between start and end (plus 24 hours for an overnight shift)
    /// minus the unpaid break, in hours. A break longer than the span yields
    /// zero rather than negative hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pay_engine::models::Shift;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    ///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     30,
    /// );
    /// assert_eq!(shift.worked_hours(), Decimal::new(75, 1)); // 7.5 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let worked_minutes = (self.span_minutes() - i64::from(self.break_duration)).max(0);
        Decimal::from(worked_minutes) / Decimal::from(60)
    }

    /// Checks the record for inconsistencies the calculators would hide.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] if the id is blank or the break is
    /// longer than the shift span.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: "shift id must not be empty".to_string(),
            });
        }
        if self.break_exceeds_span() {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!(
                    "break of {} minutes exceeds shift span of {} minutes",
                    self.break_duration,
                    self.span_minutes()
                ),
            });
        }
        Ok(())
    }
}

/// Serde adapter for `HH:mm` times of day.
///
/// Seconds are accepted on input so records written with `HH:mm:ss` still load.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| D::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}
