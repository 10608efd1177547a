// SPDX-License-Identifier: MPL-2.0
//! Page artwork: eager hero image plus lazily loaded gallery tiles.
//!
//! Every image starts invisible and fades in once decoded. Tiles carry a
//! deferred source that is only decoded when the gallery section first
//! intersects the viewport; each tile is requested at most once and a
//! failed decode is terminal (no retry), the slot simply keeps its
//! placeholder.

use crate::error::{Error, Result};
use iced::widget::image;
use rust_embed::RustEmbed;
use std::time::{Duration, Instant};

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct Artwork;

/// Duration of the fade-in after an image finishes loading.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes an embedded gallery asset. Runs on a blocking task since decode
/// cost scales with the artwork size.
pub fn load_embedded(name: &str) -> Result<ImageData> {
    let content = Artwork::get(name)
        .ok_or_else(|| Error::Image(format!("missing embedded asset '{name}'")))?;
    let decoded = image_rs::load_from_memory(content.data.as_ref())?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

#[derive(Debug, Clone)]
enum SlotState {
    /// Source known but intentionally not loaded yet.
    Deferred,
    /// Decode requested, result pending.
    Loading,
    Loaded {
        data: ImageData,
        at: Instant,
    },
    Failed,
}

/// One image position on the page.
#[derive(Debug, Clone)]
pub struct Slot {
    pub caption_key: &'static str,
    asset: &'static str,
    state: SlotState,
}

impl Slot {
    fn new(caption_key: &'static str, asset: &'static str) -> Self {
        Self {
            caption_key,
            asset,
            state: SlotState::Deferred,
        }
    }

    /// Handle to draw, once loaded.
    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        match &self.state {
            SlotState::Loaded { data, .. } => Some(&data.handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.state, SlotState::Failed)
    }

    /// Opacity factor: zero until loaded, then a 300 ms ramp to one.
    #[must_use]
    pub fn fade(&self, now: Instant) -> f32 {
        match &self.state {
            SlotState::Loaded { at, .. } => {
                let elapsed = now.saturating_duration_since(*at);
                (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

/// Index of the eagerly loaded hero image inside the board.
const HERO: usize = 0;

/// All image slots plus their load scheduling.
#[derive(Debug)]
pub struct Board {
    slots: Vec<Slot>,
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
            slots: vec![
                Slot::new("hero-title", "hero.png"),
                Slot::new("gallery-workshop", "workshop.png"),
                Slot::new("gallery-installation", "installation.png"),
                Slot::new("gallery-team", "team.png"),
            ],
        }
    }

    #[must_use]
    pub fn hero(&self) -> &Slot {
        &self.slots[HERO]
    }

    /// The lazily loaded tiles, with their board indices.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate().skip(HERO + 1)
    }

    /// Marks the hero image as loading and returns its decode request.
    /// Called once at startup.
    pub fn eager_requests(&mut self) -> Vec<(usize, &'static str)> {
        let slot = &mut self.slots[HERO];
        if matches!(slot.state, SlotState::Deferred) {
            slot.state = SlotState::Loading;
            vec![(HERO, slot.asset)]
        } else {
            Vec::new()
        }
    }

    /// Starts loading deferred tiles once the gallery section intersects
    /// the viewport. Each tile is requested at most once.
    pub fn observe(&mut self, gallery_visibility: f32) -> Vec<(usize, &'static str)> {
        if gallery_visibility <= 0.0 {
            return Vec::new();
        }

        let mut requests = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate().skip(HERO + 1) {
            if matches!(slot.state, SlotState::Deferred) {
                slot.state = SlotState::Loading;
                requests.push((index, slot.asset));
            }
        }
        requests
    }

    /// Stores a finished decode. Failures are terminal.
    pub fn loaded(&mut self, index: usize, result: Result<ImageData>, now: Instant) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        match result {
            Ok(data) => slot.state = SlotState::Loaded { data, at: now },
            Err(error) => {
                tracing::warn!(asset = slot.asset, %error, "image load failed");
                slot.state = SlotState::Failed;
            }
        }
    }

    /// Whether any image is still fading in.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.slots.iter().any(|slot| match &slot.state {
            SlotState::Loaded { at, .. } => now.saturating_duration_since(*at) < FADE_DURATION,
            _ => false,
        })
    }
}
