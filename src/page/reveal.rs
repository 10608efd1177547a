// SPDX-License-Identifier: MPL-2.0
//! Fade-in-on-visibility animations.
//!
//! Each section runs a one-way state machine Hidden → Revealing → Visible.
//! A section starts revealing once at least 10% of it is inside the
//! viewport, measured with a 50 px bottom margin so sections must rise a
//! little into view first. The transition never reverses; geometry keeps
//! being observed, so a section would re-trigger only if its state were
//! reset externally, which nothing does.

use crate::page::layout::{self, Section};
use crate::page::scroll::ScrollPosition;
use std::time::{Duration, Instant};

/// Visibility fraction that triggers the reveal.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom margin applied to the viewport when measuring visibility.
pub const BOTTOM_MARGIN: f32 = 50.0;

/// Duration of the fade/slide-in.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Revealing { since: Instant },
    Visible,
}

/// Reveal phases for every section.
#[derive(Debug)]
pub struct Board {
    phases: [Phase; Section::ALL.len()],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phases: [Phase::Hidden; Section::ALL.len()],
        }
    }

    /// Checks section visibility against the current scroll position and
    /// starts reveals for newly visible sections.
    pub fn observe(&mut self, position: ScrollPosition, now: Instant) {
        for section in Section::ALL {
            if self.phases[section.index()] != Phase::Hidden {
                continue;
            }

            let fraction = layout::visible_fraction(
                section,
                position.offset_y,
                position.viewport_height,
                BOTTOM_MARGIN,
            );
            if fraction >= REVEAL_THRESHOLD {
                self.phases[section.index()] = Phase::Revealing { since: now };
            }
        }
    }

    /// Promotes finished reveals to fully visible.
    pub fn tick(&mut self, now: Instant) {
        for phase in &mut self.phases {
            if let Phase::Revealing { since } = *phase {
                if now.saturating_duration_since(since) >= REVEAL_DURATION {
                    *phase = Phase::Visible;
                }
            }
        }
    }

    /// Opacity factor for the section in `0.0..=1.0`.
    #[must_use]
    pub fn fade(&self, section: Section, now: Instant) -> f32 {
        match self.phases[section.index()] {
            Phase::Hidden => 0.0,
            Phase::Visible => 1.0,
            Phase::Revealing { since } => {
                let elapsed = now.saturating_duration_since(since);
                (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Whether any reveal animation is currently in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phases
            .iter()
            .any(|phase| matches!(phase, Phase::Revealing { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(offset_y: f32) -> ScrollPosition {
        ScrollPosition {
            offset_y,
            viewport_height: 700.0,
            content_height: layout::total_height(),
        }
    }

    #[test]
    fn sections_start_hidden() {
        let board = Board::new();
        let now = Instant::now();
        assert_eq!(board.fade(Section::Contact, now), 0.0);
        assert!(!board.is_animating());
    }

    #[test]
    fn visible_section_starts_revealing() {
        let mut board = Board::new();
        let now = Instant::now();
        board.observe(position(0.0), now);

        assert!(board.is_animating());
        assert!(board.fade(Section::Hero, now + REVEAL_DURATION / 2) > 0.0);
        // The contact section is far below the fold and stays hidden.
        assert_eq!(board.fade(Section::Contact, now), 0.0);
    }

    #[test]
    fn reveal_completes_and_stays_visible() {
        let mut board = Board::new();
        let now = Instant::now();
        board.observe(position(0.0), now);
        board.tick(now + REVEAL_DURATION);

        assert_eq!(board.fade(Section::Hero, now + REVEAL_DURATION), 1.0);

        // Scrolling away does not reverse the transition.
        board.observe(position(layout::total_height()), now + REVEAL_DURATION);
        assert_eq!(
            board.fade(Section::Hero, now + REVEAL_DURATION * 2),
            1.0
        );
    }

    #[test]
    fn fade_progress_grows_during_reveal() {
        let mut board = Board::new();
        let now = Instant::now();
        board.observe(position(0.0), now);

        let early = board.fade(Section::Hero, now + Duration::from_millis(100));
        let late = board.fade(Section::Hero, now + Duration::from_millis(500));
        assert!(late > early);
    }
}
