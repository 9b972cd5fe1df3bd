//! Core data models for the Shift Pay Engine.
//!
//! This module contains the input records (shifts, stores, user settings) and
//! the grouped and summarized structures the calculators produce.

mod pay_cycle;
mod settings;
mod shift;
mod store;
mod summary;

pub use pay_cycle::{PayCycle, WeekBounds};
pub use settings::UserSettings;
pub use shift::Shift;
pub use store::{Store, find_store};
pub use summary::{
    AuditStep, AuditTrace, AuditWarning, PayCycleSummary, PaySummary, ShiftHistory,
    ShiftPayLine, SummaryReport, WARNING_BREAK_EXCEEDS_SPAN, WARNING_FUEL_CLAIM_AT_HOME_STORE,
    WARNING_STORE_MILEAGE_MISSING, WARNING_UNKNOWN_STORE, WeekSummary, WeekView, round_display,
};
