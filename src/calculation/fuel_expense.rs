//! Fuel expense calculation functionality.
//!
//! This module provides functions for calculating the fuel reimbursement for a
//! shift worked away from the home store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayConfig;
use crate::models::{AuditStep, Shift, Store, find_store};

/// Why a shift was or was not reimbursed for fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelEligibility {
    /// The claim is paid.
    Eligible,
    /// The shift is not flagged as a fuel claim.
    NotClaimed,
    /// The shift has no store recorded.
    NoStore,
    /// The shift's store id does not match any known store.
    UnknownStore,
    /// The shift was worked at the home store.
    HomeStore,
    /// The store has no mileage recorded.
    MileageMissing,
}

impl FuelEligibility {
    /// Returns true if the claim is paid.
    pub fn is_eligible(self) -> bool {
        self == FuelEligibility::Eligible
    }
}

impl std::fmt::Display for FuelEligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelEligibility::Eligible => write!(f, "eligible"),
            FuelEligibility::NotClaimed => write!(f, "not claimed"),
            FuelEligibility::NoStore => write!(f, "no store recorded"),
            FuelEligibility::UnknownStore => write!(f, "unknown store"),
            FuelEligibility::HomeStore => write!(f, "home store"),
            FuelEligibility::MileageMissing => write!(f, "store mileage missing"),
        }
    }
}

/// The result of calculating fuel expense, including the audit step.
#[derive(Debug, Clone)]
pub struct FuelExpenseResult {
    /// The reimbursement amount; zero unless eligible.
    pub amount: Decimal,
    /// The outcome of the eligibility checks.
    pub eligibility: FuelEligibility,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Decides whether a shift's fuel claim is payable.
///
/// On success returns the store's mileage alongside [`FuelEligibility::Eligible`].
fn check_eligibility(
    shift: &Shift,
    stores: &[Store],
    home_store_id: Option<&str>,
) -> (FuelEligibility, Option<Decimal>) {
    if !shift.is_fuel_claim {
        return (FuelEligibility::NotClaimed, None);
    }
    let Some(store_id) = shift.store_id.as_deref() else {
        return (FuelEligibility::NoStore, None);
    };
    let Some(store) = find_store(stores, Some(store_id)) else {
        return (FuelEligibility::UnknownStore, None);
    };
    if home_store_id == Some(store_id) {
        return (FuelEligibility::HomeStore, None);
    }
    match store.mileage {
        Some(mileage) => (FuelEligibility::Eligible, Some(mileage)),
        None => (FuelEligibility::MileageMissing, None),
    }
}

/// Returns the fuel reimbursement for a shift.
///
/// The amount is `mileage × 2 × fuel_rate_per_mile` (a round trip) when the
/// shift is flagged as a fuel claim, its store resolves and has a mileage, and
/// that store is not the home store. Otherwise it is zero; an unknown store is
/// not an error.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::fuel_expense;
/// use shift_pay_engine::config::PayConfig;
/// use shift_pay_engine::models::{Shift, Store};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let store = Store::new("Retail Park", "0815", Some(Decimal::from(10)));
/// let mut shift = Shift::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     0,
/// );
/// shift.store_id = Some(store.id.clone());
/// shift.is_fuel_claim = true;
///
/// let stores = vec![store];
/// let amount = fuel_expense(&shift, &stores, None, &PayConfig::default());
/// assert_eq!(amount, Decimal::from_str("6.00").unwrap());
/// ```
pub fn fuel_expense(
    shift: &Shift,
    stores: &[Store],
    home_store_id: Option<&str>,
    config: &PayConfig,
) -> Decimal {
    match check_eligibility(shift, stores, home_store_id) {
        (FuelEligibility::Eligible, Some(mileage)) => {
            mileage * Decimal::TWO * config.fuel_rate_per_mile
        }
        _ => Decimal::ZERO,
    }
}

/// Calculates the fuel reimbursement for a shift and records the decision.
///
/// # Arguments
///
/// * `shift` - The shift the claim belongs to
/// * `stores` - The known stores
/// * `home_store_id` - The user's home store, if set
/// * `config` - The pay configuration supplying the rate per mile
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_fuel_expense(
    shift: &Shift,
    stores: &[Store],
    home_store_id: Option<&str>,
    config: &PayConfig,
    step_number: u32,
) -> FuelExpenseResult {
    let (eligibility, mileage) = check_eligibility(shift, stores, home_store_id);
    let amount = match mileage {
        Some(mileage) => mileage * Decimal::TWO * config.fuel_rate_per_mile,
        None => Decimal::ZERO,
    };

    let reasoning = match mileage {
        Some(mileage) => format!(
            "{} miles × 2 × ${}/mile = ${}",
            mileage.normalize(),
            config.fuel_rate_per_mile.normalize(),
            amount.normalize()
        ),
        None => format!("No fuel reimbursement: {}", eligibility),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "fuel_expense".to_string(),
        rule_name: "Fuel Expense".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "is_fuel_claim": shift.is_fuel_claim,
            "store_id": shift.store_id,
            "home_store_id": home_store_id,
            "rate_per_mile": config.fuel_rate_per_mile.normalize().to_string()
        }),
        output: serde_json::json!({
            "eligibility": eligibility,
            "mileage": mileage.map(|m| m.normalize().to_string()),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    FuelExpenseResult {
        amount,
        eligibility,
        audit_step,
    }
}
