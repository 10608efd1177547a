// SPDX-License-Identifier: MPL-2.0
//! Scroll position tracking, the progress indicator ratio, the back-to-top
//! threshold, and the eased smooth-scroll animation.
//!
//! Scroll events only record state here; the actual scrolling work happens
//! on animation frames, where `next_offset` produces the offset the
//! scrollable should snap to.

use crate::page::layout;
use std::time::{Duration, Instant};

/// Scroll offset above which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f32 = 300.0;

/// Duration of a smooth anchor scroll.
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Last observed scroll geometry.
#[derive(Debug, Clone, Copy)]
pub struct ScrollPosition {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            viewport_height: crate::app::WINDOW_DEFAULT_HEIGHT as f32,
            content_height: layout::total_height(),
        }
    }
}

impl ScrollPosition {
    /// Scrollable range; zero when the content fits the viewport.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    started: Instant,
}

/// Scroll state shared by the progress indicator, the back-to-top button,
/// and the smooth-scroll navigator.
#[derive(Debug, Default)]
pub struct State {
    position: ScrollPosition,
    animation: Option<Animation>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    /// Records the latest scrollable viewport geometry.
    pub fn record(&mut self, offset_y: f32, viewport_height: f32, content_height: f32) {
        self.position = ScrollPosition {
            offset_y: offset_y.max(0.0),
            viewport_height,
            content_height,
        };
    }

    /// Records a window resize before any scroll event has fired.
    pub fn record_viewport_height(&mut self, viewport_height: f32) {
        self.position.viewport_height = viewport_height;
    }

    /// Progress ratio in `0.0..=1.0`: current offset over the total
    /// scrollable height. Zero when the page does not scroll at all.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let range = self.position.max_offset();
        if range <= 0.0 {
            return 0.0;
        }
        (self.position.offset_y / range).clamp(0.0, 1.0)
    }

    /// Whether the back-to-top button should be shown.
    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.position.offset_y > BACK_TO_TOP_THRESHOLD
    }

    /// Starts a smooth scroll toward `target`. A no-op when the target is
    /// already the current offset.
    pub fn start_scroll_to(&mut self, target: f32, now: Instant) {
        let target = target.clamp(0.0, self.position.max_offset());
        if (target - self.position.offset_y).abs() < 0.5 {
            self.animation = None;
            return;
        }
        self.animation = Some(Animation {
            from: self.position.offset_y,
            to: target,
            started: now,
        });
    }

    /// Starts a smooth scroll to the anchor of `section`.
    pub fn start_scroll_to_section(&mut self, section: layout::Section, now: Instant) {
        let target = layout::anchor_offset(section, self.position.viewport_height);
        self.start_scroll_to(target, now);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances the animation and returns the offset to snap the scrollable
    /// to, or `None` when no animation is running. The final frame lands
    /// exactly on the target.
    pub fn next_offset(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        let elapsed = now.saturating_duration_since(animation.started);

        if elapsed >= SCROLL_DURATION {
            self.animation = None;
            self.position.offset_y = animation.to;
            return Some(animation.to);
        }

        let t = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        let eased = ease_in_out_cubic(t);
        let offset = animation.from + (animation.to - animation.from) * eased;
        self.position.offset_y = offset;
        Some(offset)
    }

    /// Converts an absolute offset into the relative `0.0..=1.0` form the
    /// scrollable snap operation expects.
    #[must_use]
    pub fn relative(&self, offset: f32) -> f32 {
        let range = self.position.max_offset();
        if range <= 0.0 {
            return 0.0;
        }
        (offset / range).clamp(0.0, 1.0)
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
