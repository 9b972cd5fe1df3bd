//! Configuration loading and management for the Shift Pay Engine.
//!
//! This module provides the pay rate constants and the [`PayConfig`] that
//! carries them, loadable from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pay.yaml").unwrap();
//! println!("In-charge bonus: {}", config.config().in_charge_bonus);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PAY_RATE, FUEL_RATE_PER_MILE, IN_CHARGE_BONUS, MAX_PAY_CYCLE_DAYS, PAY_CYCLE_DAYS,
    PayConfig,
};
