// SPDX-License-Identifier: MPL-2.0
pub mod scroll_lock;

pub use scroll_lock::scroll_lock;
