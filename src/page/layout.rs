// SPDX-License-Identifier: MPL-2.0
//! Fixed page geometry.
//!
//! The page is a vertical strip of fixed-height sections below a sticky
//! header. This module is the single source of truth for that geometry:
//! section origins, anchor scroll offsets, and visibility fractions are all
//! derived from it, which is what lets the scroll, reveal, and counter
//! behaviors stay pure and testable.

use crate::ui::design_tokens::sizing;

/// Height of the sticky header overlaying the top of the page.
pub const HEADER_HEIGHT: f32 = sizing::NAVBAR_HEIGHT;

/// Extra visual padding left between the header and an anchored section.
pub const ANCHOR_PADDING: f32 = 20.0;

/// The page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Services,
    About,
    Gallery,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Services,
        Section::About,
        Section::Gallery,
        Section::Contact,
    ];

    /// Index in document order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Services => 1,
            Section::About => 2,
            Section::Gallery => 3,
            Section::Contact => 4,
        }
    }

    /// Localization key of the navigation link targeting this section.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Hero => "nav-home",
            Section::Services => "nav-services",
            Section::About => "nav-about",
            Section::Gallery => "nav-gallery",
            Section::Contact => "nav-contact",
        }
    }

    /// Design height of the section in logical pixels.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Hero => 520.0,
            Section::Services => 620.0,
            Section::About => 560.0,
            Section::Gallery => 520.0,
            Section::Contact => 780.0,
        }
    }

    /// Y origin of the section in content coordinates. The content starts
    /// with a header-sized spacer so the hero is not hidden under the
    /// sticky bar at offset zero.
    #[must_use]
    pub fn origin(self) -> f32 {
        let mut y = HEADER_HEIGHT;
        for section in Section::ALL {
            if section == self {
                break;
            }
            y += section.height();
        }
        y
    }
}

/// Total scrollable content height.
#[must_use]
pub fn total_height() -> f32 {
    HEADER_HEIGHT + Section::ALL.iter().map(|s| s.height()).sum::<f32>()
}

/// Scroll offset that places `section` just below the sticky header, with
/// [`ANCHOR_PADDING`] of breathing room. Clamped to the valid scroll range
/// for the given viewport height.
#[must_use]
pub fn anchor_offset(section: Section, viewport_height: f32) -> f32 {
    let max_offset = (total_height() - viewport_height).max(0.0);
    (section.origin() - HEADER_HEIGHT - ANCHOR_PADDING).clamp(0.0, max_offset)
}

/// Fraction of `section` currently inside the viewport, in `0.0..=1.0`.
///
/// `bottom_margin` shrinks the viewport from the bottom before the overlap
/// is measured, so sections only count as visible once they have actually
/// risen a little into view.
#[must_use]
pub fn visible_fraction(
    section: Section,
    scroll_offset: f32,
    viewport_height: f32,
    bottom_margin: f32,
) -> f32 {
    let top = section.origin();
    let bottom = top + section.height();

    let view_top = scroll_offset;
    let view_bottom = (scroll_offset + viewport_height - bottom_margin).max(view_top);

    let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
    overlap / section.height()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_cumulative_and_ordered() {
        assert_eq!(Section::Hero.origin(), HEADER_HEIGHT);
        assert_eq!(
            Section::Services.origin(),
            HEADER_HEIGHT + Section::Hero.height()
        );

        let mut previous = -1.0;
        for section in Section::ALL {
            assert!(section.origin() > previous);
            previous = section.origin();
        }
    }

    #[test]
    fn total_height_matches_last_section_end() {
        let last = Section::Contact;
        assert_eq!(total_height(), last.origin() + last.height());
    }

    #[test]
    fn anchor_offset_subtracts_header_and_padding() {
        let viewport = 700.0;
        let expected = Section::About.origin() - HEADER_HEIGHT - ANCHOR_PADDING;
        assert_eq!(anchor_offset(Section::About, viewport), expected);
    }

    #[test]
    fn anchor_offset_clamps_at_both_ends() {
        let viewport = 700.0;
        // The hero anchor would land above the top of the page.
        assert_eq!(anchor_offset(Section::Hero, viewport), 0.0);
        // The contact anchor cannot scroll past the end of the content.
        let max_offset = total_height() - viewport;
        assert!(anchor_offset(Section::Contact, viewport) <= max_offset);
    }

    #[test]
    fn fully_scrolled_out_section_has_zero_visibility() {
        let offset = Section::Contact.origin();
        assert_eq!(
            visible_fraction(Section::Hero, offset, 700.0, 0.0),
            0.0
        );
    }

    #[test]
    fn section_filling_the_viewport_reports_full_visibility() {
        let viewport = Section::About.height() + 100.0;
        let offset = Section::About.origin() - 50.0;
        let fraction = visible_fraction(Section::About, offset, viewport, 0.0);
        assert!((fraction - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn bottom_margin_delays_visibility() {
        // Position the viewport so only the top 40 px of the section shows.
        let viewport = 700.0;
        let offset = Section::About.origin() - viewport + 40.0;

        let without_margin = visible_fraction(Section::About, offset, viewport, 0.0);
        let with_margin = visible_fraction(Section::About, offset, viewport, 50.0);

        assert!(without_margin > 0.0);
        assert_eq!(with_margin, 0.0);
    }
}
