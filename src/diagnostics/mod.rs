// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log and the `log` backend.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: What happened (user action, operation, warning, error)
//! - [`DiagnosticsCollector`]: Stores the most recent events for the session
//! - [`logger`]: Timestamped stderr backend for the `log` facade
//!
//! Events never leave the process. When a feed request fails,
//! [`DiagnosticsCollector::dump_to_log`] writes the session trail as JSON to
//! the debug log.

mod buffer;
mod collector;
mod events;
pub mod logger;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{duration_ms, DiagnosticsCollector};
pub use events::{
    AppOperation, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
