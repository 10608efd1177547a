// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (cursor, clicks, Escape, resizes) are routed as raw
//! events; the periodic ticks are conditional so the app is fully idle
//! when nothing animates.

use super::{App, Message};
use crate::page::counter;
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::{Duration, Instant};

/// Frame interval for scroll/reveal/fade animations.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Interval for the success-banner auto-hide check.
const BANNER_INTERVAL: Duration = Duration::from_millis(100);

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let now = Instant::now();
    let mut subscriptions = vec![create_event_subscription()];

    let animating = app.scroll.is_animating()
        || app.reveal.is_animating()
        || app.gallery.is_fading(now)
        || app.form.is_sending();
    if animating {
        subscriptions.push(time::every(FRAME_INTERVAL).map(Message::AnimationTick));
    }

    if app.counters.any_running() {
        subscriptions.push(time::every(counter::TICK_INTERVAL).map(Message::CounterTick));
    }

    if app.banner.awaiting_auto_hide() {
        subscriptions.push(time::every(BANNER_INTERVAL).map(Message::BannerTick));
    }

    Subscription::batch(subscriptions)
}

/// Routes the native events the page behaviors care about.
///
/// Window resizes always pass through (scroll geometry depends on them);
/// cursor, click, and key events are only routed when no widget captured
/// them, so typing in a form field never doubles as an outside click.
fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::Resized(_)) = &event {
            return Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
            });
        }

        if matches!(status, event::Status::Captured) {
            return None;
        }

        match &event {
            event::Event::Mouse(
                mouse::Event::CursorMoved { .. }
                | mouse::Event::ButtonPressed(mouse::Button::Left),
            )
            | event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
                Some(Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                })
            }
            _ => None,
        }
    })
}
