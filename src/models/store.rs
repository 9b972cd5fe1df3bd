//! Store model.
//!
//! A store is a work location a shift can be recorded against. Its mileage
//! drives fuel reimbursement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// A work location.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::Store;
/// use rust_decimal::Decimal;
///
/// let store = Store::new("High Street", "0421", Some(Decimal::from(10)));
/// assert_eq!(store.label(), "High Street (0421)");
/// assert!(store.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique identifier for the store.
    pub id: String,
    /// Display name of the store.
    pub name: String,
    /// Four digit store number.
    pub number: String,
    /// Round-trip distance from the user's home in miles, if known.
    ///
    /// Fuel reimbursement multiplies this figure by two on top.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<Decimal>,
}

impl Store {
    /// Creates a store with a freshly generated identifier.
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        mileage: Option<Decimal>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            number: number.into(),
            mileage,
        }
    }

    /// Returns the `name (number)` label used in shift listings.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.number)
    }

    /// Checks the store number and mileage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStore`] if the name is blank, the number
    /// is not exactly four ASCII digits, or the mileage is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("store name must not be empty"));
        }
        if self.number.len() != 4 || !self.number.chars().all(|c| c.is_ascii_digit()) {
            return Err(self.invalid("store number must be exactly 4 digits"));
        }
        if self.mileage.is_some_and(|m| m.is_sign_negative()) {
            return Err(self.invalid("mileage must not be negative"));
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidStore {
            store_id: self.id.clone(),
            message: message.to_string(),
        }
    }
}

/// Looks up a store by id.
///
/// Returns `None` for an absent id or one with no matching store.
pub fn find_store<'a>(stores: &'a [Store], store_id: Option<&str>) -> Option<&'a Store> {
    let store_id = store_id?;
    stores.iter().find(|s| s.id == store_id)
}
