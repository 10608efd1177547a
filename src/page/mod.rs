// SPDX-License-Identifier: MPL-2.0
//! Page behavior state: geometry, scrolling, reveal animations, and the
//! statistic counters.
//!
//! These modules are deliberately pure (no widget code) so anchor offsets,
//! the progress ratio, visibility thresholds, and counter stepping can be
//! unit tested without a renderer.

pub mod counter;
pub mod layout;
pub mod reveal;
pub mod scroll;

pub use layout::Section;
