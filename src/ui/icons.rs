// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small SVGs embedded at compile time via `include_bytes!`;
//! handles are cached with `OnceLock` so repeated views reuse them.
//!
//! Naming follows the icon's appearance, not the action context
//! (e.g. `bars`, not `open_menu`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(bars, "bars.svg", "Hamburger menu icon: three horizontal bars.");
define_icon!(cross, "cross.svg", "Close icon: diagonal cross.");
define_icon!(arrow_up, "arrow-up.svg", "Upward arrow (back to top).");
define_icon!(flame, "flame.svg", "HeatPro flame mark.");

/// Sizes an icon to a square of the given edge length.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with the theme's base text color, so monochrome icons
/// stay readable in both light and dark mode.
pub fn themed(icon: Svg<'_>) -> Svg<'_> {
    icon.style(|theme: &iced::Theme, _status| iced::widget::svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}

/// Applies a flat tint to an icon regardless of theme.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_handles_are_cached() {
        let first = bars();
        let second = bars();
        // Both are built from the same cached handle; constructing them twice
        // must not panic or re-parse the asset.
        let _ = (first, second);
    }
}
