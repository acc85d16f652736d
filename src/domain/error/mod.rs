// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Each error carries an i18n key so the presentation layer can show a
//! single localized line without inspecting the variant.

use std::fmt;

/// Rejected date-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Start or end date is blank (or not a calendar date).
    MissingInput,
    /// Start date lies after end date.
    InvertedRange,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingInput => "status-missing-dates",
            ValidationError::InvertedRange => "status-inverted-range",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingInput => write!(f, "Both start and end dates are required"),
            ValidationError::InvertedRange => write!(f, "Start date is after end date"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure to obtain a usable response from a remote resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The server answered with a non-success status code.
    Status(u16),
    /// The request could not be sent or the body could not be read.
    Transport(String),
    /// The body did not match the expected structure.
    Decode(String),
}

impl NetworkError {
    /// Returns the i18n message key for this error.
    ///
    /// All variants share one user-facing message; the variant detail is for
    /// the log only.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "status-load-failed"
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Status(code) => write!(f, "HTTP status: {code}"),
            NetworkError::Transport(msg) => write!(f, "Transport error: {msg}"),
            NetworkError::Decode(msg) => write!(f, "Invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_i18n_keys() {
        assert_eq!(
            ValidationError::MissingInput.i18n_key(),
            "status-missing-dates"
        );
        assert_eq!(
            ValidationError::InvertedRange.i18n_key(),
            "status-inverted-range"
        );
    }

    #[test]
    fn network_errors_share_one_message() {
        assert_eq!(NetworkError::Status(404).i18n_key(), "status-load-failed");
        assert_eq!(
            NetworkError::Decode("eof".into()).i18n_key(),
            "status-load-failed"
        );
    }

    #[test]
    fn network_error_display_includes_status() {
        assert_eq!(NetworkError::Status(503).to_string(), "HTTP status: 503");
    }
}
