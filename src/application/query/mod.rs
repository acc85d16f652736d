// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! - [`range`]: Turns raw date inputs into a [`DateInterval`](crate::domain::apod::DateInterval)
//! - [`engine`]: Filters, sorts and caps feed records for one interval

pub mod engine;
pub mod range;

pub use engine::{query, QueryOutcome, MAX_RESULTS};
pub use range::RangeSelector;
