// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::contact::{self, SubmitError};
use crate::error::Error;
use crate::gallery::ImageData;
use crate::ui::navbar;
use crate::ui::sections::hero;
use iced::{event, window};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Contact(contact::Message),
    /// The page scrollable reported new viewport geometry.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    /// The floating back-to-top button was pressed.
    BackToTop,
    /// Frame tick (~16 ms) while any animation is running.
    AnimationTick(Instant),
    /// Counter tick (30 ms) while statistic counters are running.
    CounterTick(Instant),
    /// Slow tick (100 ms) while a banner awaits auto-hide.
    BannerTick(Instant),
    /// Result of the asynchronous form submission.
    SubmissionCompleted(Result<(), SubmitError>),
    /// Result of an asynchronous image decode.
    ImageLoaded {
        slot: usize,
        result: Result<ImageData, Error>,
    },
    /// Native event routed from the subscription (cursor, clicks, keys,
    /// resizes).
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `HEATPRO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional contact endpoint override, bypassing the config file.
    pub endpoint: Option<String>,
}
