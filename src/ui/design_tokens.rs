// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the HeatPro brand.
//!
//! Organization:
//!
//! - **Palette**: base colors (warm brand scale + semantic colors)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! Tokens are designed to be consistent. Before modifying, check the impact
//! on all sections and keep the scale ratios intact.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.11, 0.10);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.30, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.52, 0.50);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.80, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.92, 0.91);

    // Brand colors (flame orange scale)
    pub const BRAND_100: Color = Color::from_rgb(1.0, 0.93, 0.85);
    pub const BRAND_200: Color = Color::from_rgb(1.0, 0.84, 0.68);
    pub const BRAND_400: Color = Color::from_rgb(0.98, 0.62, 0.25);
    pub const BRAND_500: Color = Color::from_rgb(0.93, 0.49, 0.13);
    pub const BRAND_600: Color = Color::from_rgb(0.85, 0.40, 0.09);
    pub const BRAND_700: Color = Color::from_rgb(0.72, 0.31, 0.07);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background for semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Height of the sticky top bar (brand + hamburger).
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Height of the dropdown menu when open (one row per nav link).
    pub const MENU_HEIGHT: f32 = 220.0;

    /// Thin progress indicator under the navbar.
    pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;

    /// Floating back-to-top button (square).
    pub const BACK_TO_TOP_SIZE: f32 = 48.0;

    /// Gallery thumbnail tile edge.
    pub const GALLERY_TILE: f32 = 220.0;

    /// Spinner shown inside the submit button.
    pub const SPINNER_SM: f32 = 18.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const TITLE_XL: f32 = 40.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles, statistic values.
    pub const TITLE_MD: f32 = 20.0;

    /// Form inputs, emphasis text.
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text, labels, descriptions.
    pub const BODY: f32 = 14.0;

    /// Hints, inline field errors.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

/// Multiplies a color's alpha channel, used by reveal and image fade-ins.
#[must_use]
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::BRAND_500.r >= 0.0 && palette::BRAND_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn faded_scales_alpha_and_clamps() {
        let half = faded(palette::WHITE, 0.5);
        assert!((half.a - 0.5).abs() < f32::EPSILON);
        assert_eq!(faded(palette::WHITE, 2.0).a, 1.0);
        assert_eq!(faded(palette::WHITE, -1.0).a, 0.0);
    }
}
