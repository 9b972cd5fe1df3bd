//! Calculation logic for the Shift Pay Engine.
//!
//! This module contains all the calculation functions for shift pay: worked
//! hours and gross pay per shift, fuel reimbursement, Monday-start week and
//! rolling pay cycle grouping, next payday estimation, the edit-window policy,
//! summary aggregation, and the week view and history built from them.

mod edit_window;
mod fuel_expense;
mod pay_cycle;
mod shift_pay;
mod summary;
mod views;
mod week_grouping;

pub use edit_window::{EditWindow, editable_window, is_date_selectable, is_week_locked};
pub use fuel_expense::{FuelEligibility, FuelExpenseResult, calculate_fuel_expense, fuel_expense};
pub use pay_cycle::{days_until_next_payday, group_by_pay_cycle, next_payday, pay_cycle_containing};
pub use shift_pay::{ShiftPayResult, calculate_shift_pay, gross_pay, hourly_rate, worked_hours};
pub use summary::{
    SummaryScope, build_summary_report, filter_by_scope, shift_pay_line, shift_pay_lines,
    summarize, summarize_lines, summarize_scope,
};
pub use views::{build_history, summarize_pay_cycle, summarize_week, week_view};
pub use week_grouping::{group_by_week, shifts_in_week, week_bounds, week_start};

