// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{faded, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sticky top bar surface.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    let base = palette_ext.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        ..Default::default()
    }
}

/// Dropdown menu panel below the navbar.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();

    container::Style {
        background: Some(palette_ext.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette_ext.background.strong.color,
        },
        ..Default::default()
    }
}

/// Card surface for service entries and statistics.
pub fn card(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();

    container::Style {
        background: Some(palette_ext.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Submission banner, tinted by outcome.
pub fn banner(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(accent, 0.15))),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: accent,
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

/// Scroll progress track behind the filled indicator.
pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(palette::GRAY_400, 0.25))),
        ..Default::default()
    }
}

/// Filled part of the scroll progress indicator.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_500)),
        ..Default::default()
    }
}
