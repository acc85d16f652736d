// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files live in `assets/i18n/<locale>.ftl` and are embedded in the
//! binary at compile time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Message arguments (`{ $count }`) through [`I18n::tr_with_args`]
//! - Fallback to `en-US` when a key is missing in the active locale

pub mod fluent;

pub use fluent::I18n;
