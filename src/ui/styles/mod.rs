// SPDX-License-Identifier: MPL-2.0
//! Style functions for buttons and containers.

pub mod button;
pub mod container;
