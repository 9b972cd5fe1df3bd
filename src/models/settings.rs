//! User settings consumed by the calculators.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAY_RATE;
use crate::error::{EngineError, EngineResult};

/// Per-user settings that parameterize pay and grouping.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::UserSettings;
/// use rust_decimal::Decimal;
///
/// let settings = UserSettings::default();
/// assert_eq!(settings.pay_rate, Decimal::new(1221, 2));
/// assert!(settings.last_payday.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Base hourly rate.
    pub pay_rate: Decimal,
    /// End date of a known pay cycle. Without it only weekly grouping applies.
    #[serde(default)]
    pub last_payday: Option<NaiveDate>,
    /// The store considered home; fuel is never reimbursed for it.
    #[serde(default)]
    pub home_store_id: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            pay_rate: DEFAULT_PAY_RATE,
            last_payday: None,
            home_store_id: None,
        }
    }
}

impl UserSettings {
    /// Returns the home store id as a string slice.
    pub fn home_store(&self) -> Option<&str> {
        self.home_store_id.as_deref()
    }

    /// Checks that the pay rate is usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] if the pay rate is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pay_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidSettings {
                field: "payRate".to_string(),
                message: format!("must be positive, got {}", self.pay_rate),
            });
        }
        Ok(())
    }
}
