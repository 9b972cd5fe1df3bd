//! Per-shift pay calculation.
//!
//! This module turns one shift and a base hourly rate into worked hours, an
//! effective hourly rate (base plus the in-charge bonus) and gross pay.

use rust_decimal::Decimal;

use crate::config::PayConfig;
use crate::models::{AuditStep, Shift};

/// The result of calculating pay for one shift, including the audit step.
#[derive(Debug, Clone)]
pub struct ShiftPayResult {
    /// Worked hours after the unpaid break.
    pub hours: Decimal,
    /// Effective hourly rate including any bonus.
    pub rate: Decimal,
    /// Hours multiplied by rate.
    pub gross_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns worked hours for a shift.
///
/// The span from start to end (plus 24 hours when the shift crosses midnight),
/// less the unpaid break, in hours. Never negative.
pub fn worked_hours(shift: &Shift) -> Decimal {
    shift.worked_hours()
}

/// Returns the effective hourly rate for a shift.
///
/// The base rate plus the configured in-charge bonus when the shift was worked
/// in charge.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::hourly_rate;
/// use shift_pay_engine::config::PayConfig;
/// use shift_pay_engine::models::Shift;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut shift = Shift::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     0,
/// );
/// shift.in_charge = true;
///
/// let rate = hourly_rate(Decimal::from_str("12.00").unwrap(), &shift, &PayConfig::default());
/// assert_eq!(rate, Decimal::from_str("12.25").unwrap());
/// ```
pub fn hourly_rate(base_rate: Decimal, shift: &Shift, config: &PayConfig) -> Decimal {
    if shift.in_charge {
        base_rate + config.in_charge_bonus
    } else {
        base_rate
    }
}

/// Returns worked hours multiplied by the effective hourly rate.
pub fn gross_pay(shift: &Shift, base_rate: Decimal, config: &PayConfig) -> Decimal {
    worked_hours(shift) * hourly_rate(base_rate, shift, config)
}

/// Calculates hours, rate and gross pay for a shift and records how.
///
/// # Arguments
///
/// * `shift` - The shift to calculate pay for
/// * `base_rate` - The user's base hourly rate
/// * `config` - The pay configuration supplying the in-charge bonus
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_shift_pay(
    shift: &Shift,
    base_rate: Decimal,
    config: &PayConfig,
    step_number: u32,
) -> ShiftPayResult {
    let hours = shift.worked_hours();
    let rate = hourly_rate(base_rate, shift, config);
    let gross_pay = hours * rate;

    let mut reasoning = format!(
        "{}h span - {}min break = {}h × ${} = ${}",
        (Decimal::from(shift.span_minutes()) / Decimal::from(60)).normalize(),
        shift.break_duration,
        hours.round_dp(4).normalize(),
        rate.normalize(),
        gross_pay.round_dp(4).normalize()
    );
    if shift.is_overnight() {
        reasoning.push_str(" (overnight: 24h added to span)");
    }
    if shift.in_charge {
        reasoning.push_str(&format!(
            " (in charge: +${}/h)",
            config.in_charge_bonus.normalize()
        ));
    }
    if shift.break_exceeds_span() {
        reasoning.push_str(" (break exceeds span: hours clamped to 0)");
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_pay".to_string(),
        rule_name: "Shift Pay".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "date": shift.date.to_string(),
            "start_time": shift.start_time.format("%H:%M").to_string(),
            "end_time": shift.end_time.format("%H:%M").to_string(),
            "break_minutes": shift.break_duration,
            "in_charge": shift.in_charge,
            "base_rate": base_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "hours": hours.normalize().to_string(),
            "rate": rate.normalize().to_string(),
            "gross_pay": gross_pay.normalize().to_string(),
            "overnight": shift.is_overnight()
        }),
        reasoning,
    };

    ShiftPayResult {
        hours,
        rate,
        gross_pay,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(start: &str, end: &str, break_duration: u32, in_charge: bool) -> Shift {
        Shift {
            id: "shift_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            break_duration,
            in_charge,
            store_id: None,
            is_fuel_claim: false,
        }
    }

    /// TP-001: in-charge bonus stacks on the base rate
    #[test]
    fn test_in_charge_bonus_stacks() {
        let shift = make_shift("09:00", "17:00", 0, true);
        assert_eq!(
            hourly_rate(dec("12.00"), &shift, &PayConfig::default()),
            dec("12.25")
        );
    }

    /// TP-002: no bonus without the in-charge flag
    #[test]
    fn test_base_rate_without_flag() {
        let shift = make_shift("09:00", "17:00", 0, false);
        assert_eq!(
            hourly_rate(dec("12.00"), &shift, &PayConfig::default()),
            dec("12.00")
        );
    }

    /// TP-003: gross pay is hours times effective rate
    #[test]
    fn test_gross_pay_in_charge() {
        // 7.5h × 12.25 = 91.875
        let shift = make_shift("09:00", "17:00", 30, true);
        assert_eq!(
            gross_pay(&shift, dec("12.00"), &PayConfig::default()),
            dec("91.875")
        );
    }

    /// TP-004: overnight gross pay
    #[test]
    fn test_gross_pay_overnight() {
        // 7.5h × 12.00 = 90.00
        let shift = make_shift("22:00", "06:00", 30, false);
        assert_eq!(
            gross_pay(&shift, dec("12.00"), &PayConfig::default()),
            dec("90.00")
        );
    }

    #[test]
    fn test_configured_bonus_is_used() {
        let config = PayConfig {
            in_charge_bonus: dec("1.00"),
            ..PayConfig::default()
        };
        let shift = make_shift("09:00", "17:00", 0, true);
        assert_eq!(hourly_rate(dec("12.00"), &shift, &config), dec("13.00"));
    }

    #[test]
    fn test_break_longer_than_span_pays_nothing() {
        let shift = make_shift("09:00", "09:20", 30, false);
        assert_eq!(
            gross_pay(&shift, dec("12.00"), &PayConfig::default()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_calculate_shift_pay_matches_helpers() {
        let shift = make_shift("22:00", "06:00", 30, true);
        let config = PayConfig::default();

        let result = calculate_shift_pay(&shift, dec("12.00"), &config, 3);

        assert_eq!(result.hours, dec("7.5"));
        assert_eq!(result.rate, dec("12.25"));
        assert_eq!(result.gross_pay, gross_pay(&shift, dec("12.00"), &config));
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "shift_pay");
    }

    #[test]
    fn test_audit_step_records_inputs_and_outputs() {
        let shift = make_shift("22:00", "06:00", 30, true);
        let result = calculate_shift_pay(&shift, dec("12.00"), &PayConfig::default(), 1);
        let step = &result.audit_step;

        assert_eq!(step.input["shift_id"], "shift_001");
        assert_eq!(step.input["start_time"], "22:00");
        assert_eq!(step.input["break_minutes"], 30);
        assert_eq!(step.output["hours"], "7.5");
        assert_eq!(step.output["rate"], "12.25");
        assert_eq!(step.output["overnight"], true);
        assert!(step.reasoning.contains("overnight"));
        assert!(step.reasoning.contains("in charge"));
    }

    #[test]
    fn test_audit_reasoning_mentions_clamping() {
        let shift = make_shift("09:00", "09:20", 30, false);
        let result = calculate_shift_pay(&shift, dec("12.00"), &PayConfig::default(), 1);

        assert!(result.audit_step.reasoning.contains("clamped"));
    }
}
