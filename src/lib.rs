//! Shift Pay Engine for retail shift tracking
//!
//! This crate converts logged shifts into worked hours, gross pay and fuel
//! reimbursement, groups them into Monday-start weeks and 28-day pay cycles,
//! and decides which weeks are still open for editing.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
