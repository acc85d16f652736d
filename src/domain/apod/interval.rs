// SPDX-License-Identifier: MPL-2.0
//! Inclusive calendar date interval.

use chrono::{Days, NaiveDate};

use crate::domain::error::ValidationError;

/// `chrono` format string matching the feed's `YYYY-MM-DD` dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive `[start, end]` interval of calendar dates.
///
/// Construction guarantees `start <= end`. The ISO forms of both bounds are
/// computed once so that membership is a pair of string comparisons against
/// [`Record::date`](super::Record::date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
    start_iso: String,
    end_iso: String,
}

impl DateInterval {
    /// Builds an interval, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedRange);
        }
        Ok(Self {
            start,
            end,
            start_iso: start.format(ISO_DATE_FORMAT).to_string(),
            end_iso: end.format(ISO_DATE_FORMAT).to_string(),
        })
    }

    /// Interval ending at `end` and starting `span_days` days earlier.
    ///
    /// Saturates at `end` when the subtraction leaves chrono's date range.
    #[must_use]
    pub fn ending_at(end: NaiveDate, span_days: u64) -> Self {
        let start = end.checked_sub_days(Days::new(span_days)).unwrap_or(end);
        Self {
            start,
            end,
            start_iso: start.format(ISO_DATE_FORMAT).to_string(),
            end_iso: end.format(ISO_DATE_FORMAT).to_string(),
        }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start bound as `YYYY-MM-DD`.
    #[must_use]
    pub fn start_iso(&self) -> &str {
        &self.start_iso
    }

    /// End bound as `YYYY-MM-DD`.
    #[must_use]
    pub fn end_iso(&self) -> &str {
        &self.end_iso
    }

    /// Lexical inclusive membership test for a feed date string.
    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        self.start_iso.as_str() <= date && date <= self.end_iso.as_str()
    }
}
