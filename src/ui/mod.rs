// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`navbar`] - Sticky bar with the hamburger menu
//! - [`sections`] - The page sections (hero, services, about, gallery, contact)
//! - [`banner`] - Submission outcome banners
//! - [`spinner`] - Loading spinner for the submit button
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod banner;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod sections;
pub mod spinner;
pub mod styles;
pub mod theming;
