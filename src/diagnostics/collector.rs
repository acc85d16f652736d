// SPDX-License-Identifier: MPL-2.0
//! Session-scoped store of diagnostic events.
//!
//! Logging into the collector also mirrors warnings and errors to the `log`
//! facade so they show up on stderr.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    AppOperation, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    ErrorEvent, UserAction, WarningEvent,
};

/// Keeps the most recent events of the session in a ring buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        log::debug!("action: {action:?}");
        self.push(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_operation(&mut self, operation: AppOperation) {
        log::info!("operation: {operation:?}");
        self.push(DiagnosticEventKind::Operation { operation });
    }

    pub fn log_warning(&mut self, event: WarningEvent) {
        log::warn!("{:?}: {}", event.warning_type, event.message);
        self.push(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&mut self, event: ErrorEvent) {
        log::error!("{:?}: {}", event.error_type, event.message);
        self.push(DiagnosticEventKind::Error { event });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    /// Writes the whole session trail to the debug log.
    ///
    /// Skipped unless debug logging is enabled.
    pub fn dump_to_log(&self, reason: &str) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        match self.export_json() {
            Ok(trail) => log::debug!("Session trail ({reason}):\n{trail}"),
            Err(err) => log::debug!("Session trail ({reason}) unavailable: {err}"),
        }
    }

    /// Serializes the session as pretty JSON with offsets relative to start.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = Report {
            started_at: self.started_at_utc.to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION"),
            events: self
                .buffer
                .iter()
                .map(|event| ReportEntry {
                    offset_ms: duration_ms(event.timestamp.saturating_duration_since(self.started_at)),
                    kind: &event.kind,
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report)
    }
}

/// Milliseconds in `duration`, saturating at `u64::MAX`.
#[must_use]
pub fn duration_ms(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Read access for tests; the application only writes and dumps events.
#[cfg(test)]
impl DiagnosticsCollector {
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEventKind> {
        self.buffer.last().map(|event| &event.kind)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

#[derive(Serialize)]
struct Report<'a> {
    started_at: String,
    app_version: &'static str,
    events: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};

    #[test]
    fn records_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::FetchRange {
            start: "2024-01-01".into(),
            end: "2024-01-09".into(),
        });
        collector.log_operation(AppOperation::FetchFeed {
            duration_ms: 10,
            records: 100,
            shown: 9,
        });

        assert_eq!(collector.len(), 2);
        assert!(matches!(
            collector.last(),
            Some(DiagnosticEventKind::Operation { .. })
        ));
    }

    #[test]
    fn bounded_by_capacity() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let capacity = collector.capacity();
        for _ in 0..capacity + 5 {
            collector.log_action(UserAction::OpenPlayer);
        }
        assert_eq!(collector.len(), capacity);
    }

    #[test]
    fn export_contains_events_and_offsets() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_warning(WarningEvent::new(WarningType::StaleResponse, "request #1"));
        collector.log_error(ErrorEvent::new(ErrorType::Feed, "HTTP status: 503"));

        let json = collector.export_json().expect("export");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        let events = value["events"].as_array().expect("events array");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["type"], "warning");
        assert_eq!(events[1]["event"]["error_type"], "feed");
        assert!(events[0]["offset_ms"].is_u64());
        assert_eq!(value["app_version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn dump_to_log_is_safe_without_logger() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_error(ErrorEvent::new(ErrorType::Feed, "HTTP status: 503"));
        collector.dump_to_log("feed failure");
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn duration_ms_converts_millis() {
        assert_eq!(duration_ms(std::time::Duration::from_millis(1500)), 1500);
    }
}
