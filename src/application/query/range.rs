// SPDX-License-Identifier: MPL-2.0
//! Resolution of user-entered date bounds.

use chrono::NaiveDate;

use crate::domain::apod::{DateInterval, ISO_DATE_FORMAT};
use crate::domain::error::ValidationError;

/// Days between the start and the end of the default window.
const DEFAULT_WINDOW_SPAN_DAYS: u64 = 8;

/// Turns raw date inputs into a [`DateInterval`].
pub struct RangeSelector;

impl RangeSelector {
    /// Default interval shown on first load: the nine days ending yesterday.
    #[must_use]
    pub fn default_interval(today: NaiveDate) -> DateInterval {
        let end = today.pred_opt().unwrap_or(today);
        DateInterval::ending_at(end, DEFAULT_WINDOW_SPAN_DAYS)
    }

    /// Resolves the two date inputs into an inclusive interval.
    ///
    /// Blank and unparsable inputs count as absent.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingInput`] if either bound is absent
    /// - [`ValidationError::InvertedRange`] if `start > end`
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<DateInterval, ValidationError> {
        let (Some(start), Some(end)) = (parse_input(start), parse_input(end)) else {
            return Err(ValidationError::MissingInput);
        };
        DateInterval::new(start, end)
    }
}

fn parse_input(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).expect("valid test date")
    }

    #[test]
    fn default_interval_ends_yesterday_and_spans_nine_days() {
        let interval = RangeSelector::default_interval(date("2024-03-10"));
        assert_eq!(interval.end_iso(), "2024-03-09");
        assert_eq!(interval.start_iso(), "2024-03-01");
        assert_eq!((interval.end() - interval.start()).num_days(), 8);
    }

    #[test]
    fn default_interval_crosses_month_and_year_boundaries() {
        let interval = RangeSelector::default_interval(date("2024-01-03"));
        assert_eq!(interval.end_iso(), "2024-01-02");
        assert_eq!(interval.start_iso(), "2023-12-25");
    }

    #[test]
    fn resolve_accepts_valid_bounds() {
        let interval =
            RangeSelector::resolve(Some("2024-01-01"), Some("2024-01-05")).expect("valid");
        assert_eq!(interval.start_iso(), "2024-01-01");
        assert_eq!(interval.end_iso(), "2024-01-05");
    }

    #[test]
    fn resolve_accepts_single_day() {
        let interval =
            RangeSelector::resolve(Some("2024-02-29"), Some("2024-02-29")).expect("valid");
        assert_eq!(interval.start_iso(), interval.end_iso());
    }

    #[test]
    fn resolve_trims_whitespace() {
        let interval =
            RangeSelector::resolve(Some(" 2024-01-01 "), Some("2024-01-02\n")).expect("valid");
        assert_eq!(interval.start_iso(), "2024-01-01");
    }

    #[test]
    fn missing_bounds_are_rejected() {
        let cases = [
            (None, Some("2024-01-05")),
            (Some("2024-01-01"), None),
            (None, None),
            (Some(""), Some("2024-01-05")),
            (Some("2024-01-01"), Some("   ")),
            (Some("yesterday"), Some("2024-01-05")),
            (Some("2024-13-01"), Some("2024-01-05")),
        ];
        for (start, end) in cases {
            assert_eq!(
                RangeSelector::resolve(start, end),
                Err(ValidationError::MissingInput),
                "start={start:?} end={end:?}"
            );
        }
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert_eq!(
            RangeSelector::resolve(Some("2024-01-06"), Some("2024-01-05")),
            Err(ValidationError::InvertedRange)
        );
        assert_eq!(
            RangeSelector::resolve(Some("2025-01-01"), Some("2024-12-31")),
            Err(ValidationError::InvertedRange)
        );
    }

    #[test]
    fn missing_input_wins_over_inversion() {
        assert_eq!(
            RangeSelector::resolve(Some("2024-01-06"), Some("")),
            Err(ValidationError::MissingInput)
        );
    }
}
