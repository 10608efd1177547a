// SPDX-License-Identifier: MPL-2.0
//! `heatpro_profile` is the HeatPro company profile desktop app built with
//! the Iced GUI framework.
//!
//! It renders a single scrollable marketing page (hero, services, about with
//! animated statistics, gallery, contact) and demonstrates smooth anchor
//! scrolling, visibility-triggered animations, lazy image loading, and a
//! validated contact form submitted to a hosted form-processing endpoint.

pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod page;
pub mod ui;
