//! Configuration types for pay calculation.
//!
//! This module contains the strongly-typed [`PayConfig`] structure that is
//! deserialized from YAML, together with the named rate constants it defaults
//! to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Bonus added to the hourly rate for a shift worked in charge (0.25 per hour).
pub const IN_CHARGE_BONUS: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Fuel reimbursement per mile travelled (0.30 per mile).
pub const FUEL_RATE_PER_MILE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Length of a pay cycle in days.
pub const PAY_CYCLE_DAYS: u32 = 28;

/// Longest accepted pay cycle, in days.
pub const MAX_PAY_CYCLE_DAYS: u32 = 366;

/// Base hourly rate given to a user who has not set one (12.21).
pub const DEFAULT_PAY_RATE: Decimal = Decimal::from_parts(1221, 0, 0, false, 2);

/// Rates and cycle settings used by every calculation.
///
/// Keys missing from a configuration file fall back to the named constants.
///
/// # Example
///
/// ```
/// use shift_pay_engine::config::{PayConfig, IN_CHARGE_BONUS, PAY_CYCLE_DAYS};
///
/// let config = PayConfig::default();
/// assert_eq!(config.in_charge_bonus, IN_CHARGE_BONUS);
/// assert_eq!(config.pay_cycle_days, PAY_CYCLE_DAYS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayConfig {
    /// Per-hour bonus for shifts flagged as in charge.
    pub in_charge_bonus: Decimal,
    /// Reimbursement per mile for fuel claims.
    pub fuel_rate_per_mile: Decimal,
    /// Number of days in one pay cycle.
    pub pay_cycle_days: u32,
    /// Pay rate assumed for new users.
    pub default_pay_rate: Decimal,
}

impl Default for PayConfig {
    fn default() -> Self {
        Self {
            in_charge_bonus: IN_CHARGE_BONUS,
            fuel_rate_per_mile: FUEL_RATE_PER_MILE,
            pay_cycle_days: PAY_CYCLE_DAYS,
            default_pay_rate: DEFAULT_PAY_RATE,
        }
    }
}

impl PayConfig {
    /// Checks that every value is usable by the calculators.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> EngineResult<()> {
        if self.in_charge_bonus.is_sign_negative() {
            return Err(invalid("in_charge_bonus", "must not be negative"));
        }
        if self.fuel_rate_per_mile.is_sign_negative() {
            return Err(invalid("fuel_rate_per_mile", "must not be negative"));
        }
        if self.pay_cycle_days == 0 {
            return Err(invalid("pay_cycle_days", "must be greater than zero"));
        }
        if self.pay_cycle_days > MAX_PAY_CYCLE_DAYS {
            return Err(invalid(
                "pay_cycle_days",
                &format!("must be at most {}", MAX_PAY_CYCLE_DAYS),
            ));
        }
        if self.default_pay_rate <= Decimal::ZERO {
            return Err(invalid("default_pay_rate", "must be positive"));
        }
        Ok(())
    }

    /// The pay cycle length as a signed day count for date arithmetic.
    ///
    /// Clamped to `1..=MAX_PAY_CYCLE_DAYS` so a config built without
    /// [`validate`](Self::validate) still yields in-range dates.
    pub(crate) fn cycle_days(&self) -> i64 {
        i64::from(self.pay_cycle_days.clamp(1, MAX_PAY_CYCLE_DAYS))
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_constants_match_reference_values() {
        assert_eq!(IN_CHARGE_BONUS, dec("0.25"));
        assert_eq!(FUEL_RATE_PER_MILE, dec("0.30"));
        assert_eq!(DEFAULT_PAY_RATE, dec("12.21"));
        assert_eq!(PAY_CYCLE_DAYS, 28);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        let config = PayConfig {
            in_charge_bonus: dec("-0.25"),
            ..PayConfig::default()
        };
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "in_charge_bonus");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_cycle_length_is_rejected() {
        let config = PayConfig {
            pay_cycle_days: 0,
            ..PayConfig::default()
        };
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "pay_cycle_days");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_length_upper_bound() {
        let at_bound = PayConfig {
            pay_cycle_days: MAX_PAY_CYCLE_DAYS,
            ..PayConfig::default()
        };
        assert!(at_bound.validate().is_ok());

        let too_long = PayConfig {
            pay_cycle_days: 4_000_000_000,
            ..PayConfig::default()
        };
        match too_long.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "pay_cycle_days");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
        assert_eq!(too_long.cycle_days(), i64::from(MAX_PAY_CYCLE_DAYS));
    }

    #[test]
    fn test_zero_default_pay_rate_is_rejected() {
        let config = PayConfig {
            default_pay_rate: Decimal::ZERO,
            ..PayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults_for_missing_keys() {
        let config: PayConfig = serde_yaml::from_str("fuel_rate_per_mile: 0.45\n").unwrap();
        assert_eq!(config.fuel_rate_per_mile, dec("0.45"));
        assert_eq!(config.in_charge_bonus, IN_CHARGE_BONUS);
        assert_eq!(config.pay_cycle_days, PAY_CYCLE_DAYS);
    }
}
