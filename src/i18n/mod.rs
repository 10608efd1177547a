// SPDX-License-Identifier: MPL-2.0
//! Internationalization support via Fluent.

pub mod fluent;
