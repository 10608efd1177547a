// SPDX-License-Identifier: MPL-2.0
//! The page sections, each rendered into a fixed-height shell so the
//! geometry in [`crate::page::layout`] stays authoritative.

pub mod about;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod services;

use crate::i18n::fluent::I18n;
use crate::page::Section;
use crate::ui::theming::ColorScheme;
use iced::widget::Container;
use iced::{Element, Length};

/// Shared context every section view receives.
pub struct SectionEnv<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    /// Reveal opacity factor in `0.0..=1.0` for this section's content.
    pub fade: f32,
}

/// Wraps section content in its fixed-height, clipped shell.
pub fn shell<'a, M: 'a>(section: Section, content: Element<'a, M>) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .clip(true)
        .into()
}
