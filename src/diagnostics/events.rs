// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions worth correlating with failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Fetch control activated with these raw inputs.
    FetchRange { start: String, end: String },

    /// Detail view opened on a record.
    OpenDetail { date: String },

    /// Detail view closed.
    CloseDetail {
        /// `close_control`, `cancel_key` or `backdrop`.
        reason: String,
    },

    /// Video handed to the system browser.
    OpenPlayer,
}

/// Completed operations with timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    /// Feed downloaded and queried.
    FetchFeed {
        duration_ms: u64,
        records: usize,
        shown: usize,
    },

    /// Thumbnail or detail image downloaded.
    LoadImage { duration_ms: u64, bytes: usize },
}

/// Warning categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Date inputs were rejected.
    InvalidRange,
    /// A response arrived after a newer request was issued.
    StaleResponse,
    /// `settings.toml` could not be used.
    Config,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// Error categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Feed request failed.
    Feed,
    /// Image download failed.
    Image,
    /// System browser could not be launched.
    Browser,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A recorded event and when it happened.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic time of the event.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Operation {
        operation: AppOperation,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}
