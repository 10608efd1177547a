// SPDX-License-Identifier: MPL-2.0
//! Submission outcome banners.
//!
//! At most one banner is visible: success or error. The success banner
//! auto-hides after ten seconds; the error banner stays until the next
//! submission attempt clears it.

use std::time::{Duration, Instant};

/// How long the success banner stays visible.
pub const SUCCESS_AUTO_HIDE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl Kind {
    /// Localization key of the banner text.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Kind::Success => "form-success",
            Kind::Error => "form-failure",
        }
    }
}

#[derive(Debug, Default)]
pub struct State {
    current: Option<(Kind, Instant)>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hides any banner; called when a new submission starts.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn show(&mut self, kind: Kind, now: Instant) {
        self.current = Some((kind, now));
    }

    /// Auto-hides an expired success banner.
    pub fn tick(&mut self, now: Instant) {
        if let Some((Kind::Success, shown_at)) = self.current {
            if now.saturating_duration_since(shown_at) >= SUCCESS_AUTO_HIDE {
                self.current = None;
            }
        }
    }

    #[must_use]
    pub fn visible(&self) -> Option<Kind> {
        self.current.map(|(kind, _)| kind)
    }

    /// Whether the periodic tick is needed to eventually hide the banner.
    #[must_use]
    pub fn awaiting_auto_hide(&self) -> bool {
        matches!(self.current, Some((Kind::Success, _)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_banner_auto_hides_after_ten_seconds() {
        let mut state = State::new();
        let now = Instant::now();
        state.show(Kind::Success, now);
        assert_eq!(state.visible(), Some(Kind::Success));
        assert!(state.awaiting_auto_hide());

        state.tick(now + SUCCESS_AUTO_HIDE - Duration::from_millis(1));
        assert_eq!(state.visible(), Some(Kind::Success));

        state.tick(now + SUCCESS_AUTO_HIDE);
        assert_eq!(state.visible(), None);
        assert!(!state.awaiting_auto_hide());
    }

    #[test]
    fn error_banner_persists_until_cleared() {
        let mut state = State::new();
        let now = Instant::now();
        state.show(Kind::Error, now);

        state.tick(now + SUCCESS_AUTO_HIDE * 2);
        assert_eq!(state.visible(), Some(Kind::Error));
        assert!(!state.awaiting_auto_hide());

        state.clear();
        assert_eq!(state.visible(), None);
    }

    #[test]
    fn newer_banner_replaces_the_old_one() {
        let mut state = State::new();
        let now = Instant::now();
        state.show(Kind::Error, now);
        state.show(Kind::Success, now);
        assert_eq!(state.visible(), Some(Kind::Success));
    }
}
