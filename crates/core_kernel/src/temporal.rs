//! Calendar date handling for policy windows
//!
//! Claims carry dates as plain `YYYY-MM-DD` strings and policy windows as
//! `"YYYY-MM-DD to YYYY-MM-DD"`. Everything here works at day granularity
//! with no timezone attached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only accepted date layout
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Token separating the two ends of a policy window
pub const RANGE_SEPARATOR: &str = "to";

/// Errors related to temporal operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Malformed date range {0:?}: expected \"YYYY-MM-DD to YYYY-MM-DD\"")]
    MalformedRange(String),
}

/// Parses a single `YYYY-MM-DD` date, ignoring surrounding whitespace
pub fn parse_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| TemporalError::InvalidDate {
        value: raw.to_string(),
    })
}

/// Represents a date range for policy periods, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses `"YYYY-MM-DD to YYYY-MM-DD"`.
    ///
    /// The text is split on every occurrence of the literal `to`; exactly
    /// two non-empty sides must remain.
    pub fn parse(raw: &str) -> Result<Self, TemporalError> {
        let sides: Vec<&str> = raw.trim().split(RANGE_SEPARATOR).map(str::trim).collect();

        match sides.as_slice() {
            [start, end] if !start.is_empty() && !end.is_empty() => {
                Self::new(parse_date(start)?, parse_date(end)?)
            }
            _ => Err(TemporalError::MalformedRange(raw.to_string())),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
