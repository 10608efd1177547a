// SPDX-License-Identifier: MPL-2.0
//! Text input styles, including the error state used by form validation.

use crate::ui::design_tokens::{faded, palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Default input styling.
pub fn default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette_ext = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette::BRAND_500,
        text_input::Status::Hovered => palette_ext.background.strong.color,
        _ => palette_ext.background.weak.color,
    };

    text_input::Style {
        background: Background::Color(palette_ext.background.base.color),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: palette_ext.background.weak.text,
        placeholder: palette::GRAY_400,
        value: palette_ext.background.base.text,
        selection: faded(palette::BRAND_400, 0.4),
    }
}

/// Input carrying a validation error: red border regardless of status.
pub fn error(theme: &Theme, _status: text_input::Status) -> text_input::Style {
    let palette_ext = theme.extended_palette();

    text_input::Style {
        background: Background::Color(palette_ext.background.base.color),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::ERROR_500,
        },
        icon: palette_ext.background.weak.text,
        placeholder: palette::GRAY_400,
        value: palette_ext.background.base.text,
        selection: faded(palette::BRAND_400, 0.4),
    }
}
