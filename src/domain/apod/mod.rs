// SPDX-License-Identifier: MPL-2.0
//! Astronomy Picture of the Day feed types.
//!
//! A [`Record`] is one dated entry of the externally owned feed. Dates are
//! kept as zero-padded `YYYY-MM-DD` strings so that plain lexical ordering is
//! also chronological ordering; [`DateInterval`] exposes its bounds in the same
//! form for comparison.

pub mod interval;
pub mod record;

pub use interval::{DateInterval, ISO_DATE_FORMAT};
pub use record::{format_display_date, MediaKind, Record};
