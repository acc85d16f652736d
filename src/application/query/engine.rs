// SPDX-License-Identifier: MPL-2.0
//! Filtering, ordering and capping of feed records.

use crate::domain::apod::{DateInterval, Record};

/// Maximum number of records shown for one query.
pub const MAX_RESULTS: usize = 9;

/// Result of a query over the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// At least one record matched.
    Matches {
        /// Records to display, ascending by date, at most [`MAX_RESULTS`].
        shown: Vec<Record>,
        /// Number of records inside the interval before capping.
        total_matches: usize,
    },
    /// No record falls inside the interval.
    Empty,
}

impl QueryOutcome {
    /// Records to display; empty for [`QueryOutcome::Empty`].
    #[must_use]
    pub fn shown(&self) -> &[Record] {
        match self {
            QueryOutcome::Matches { shown, .. } => shown,
            QueryOutcome::Empty => &[],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryOutcome::Empty)
    }
}

/// Keeps the records inside `interval`, sorts them ascending by date and
/// keeps only the most recent [`MAX_RESULTS`].
///
/// Dates are compared as strings; the feed's zero-padded ISO format makes
/// lexical order equal to calendar order.
#[must_use]
pub fn query(records: &[Record], interval: &DateInterval) -> QueryOutcome {
    let mut matches: Vec<Record> = records
        .iter()
        .filter(|record| interval.contains(&record.date))
        .cloned()
        .collect();

    if matches.is_empty() {
        return QueryOutcome::Empty;
    }

    matches.sort_by(|a, b| a.date.cmp(&b.date));

    let total_matches = matches.len();
    if total_matches > MAX_RESULTS {
        matches.drain(..total_matches - MAX_RESULTS);
    }

    QueryOutcome::Matches {
        shown: matches,
        total_matches,
    }
}
