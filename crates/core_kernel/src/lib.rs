//! Core Kernel - Foundational types for claim triage
//!
//! This crate provides the value types every pipeline stage builds on:
//! - Money types with precise decimal arithmetic and free-text amount parsing
//! - Calendar date ranges for policy windows
//! - A common error type for recoverable field parsing failures

pub mod money;
pub mod temporal;
pub mod error;

pub use money::{group_thousands, parse_amount, Currency, Money, MoneyError, Rate};
pub use temporal::{parse_date, DateRange, TemporalError};
pub use error::{parse_count, CoreError};
