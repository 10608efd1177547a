// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the page behaviors.
//!
//! The `App` struct owns the independent behavior states (menu, scroll,
//! reveals, counters, gallery, form, banners) and wires them together
//! through a single update loop. The behaviors share nothing except the
//! scroll geometry they all observe.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Endpoint};
use crate::contact;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::page::{counter, reveal, scroll};
use crate::ui::banner;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 820;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Identifier of the page scrollable, target of all snap operations.
pub const PAGE_SCROLLABLE_ID: &str = "page-scroll";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Validated submission target; `None` disables the submit button.
    endpoint: Option<Endpoint>,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    scroll: scroll::State,
    reveal: reveal::Board,
    counters: counter::Board,
    gallery: gallery::Board,
    form: contact::State,
    banner: banner::State,
    scheme: ColorScheme,
    dark: bool,
    /// Last known cursor position, used for outside-click menu dismissal.
    cursor: Point,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("menu_open", &self.menu_open)
            .field("sending", &self.form.is_sending())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let theme_mode = ThemeMode::default();
        Self {
            i18n: I18n::default(),
            endpoint: None,
            menu_open: false,
            scroll: scroll::State::new(),
            reveal: reveal::Board::new(),
            counters: counter::Board::new(),
            gallery: gallery::Board::new(),
            form: contact::State::new(),
            banner: banner::State::new(),
            scheme: theme_mode.scheme(),
            dark: theme_mode.is_dark(),
            cursor: Point::ORIGIN,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        }
    }
}

impl App {
    /// Initializes application state: loads config, validates the contact
    /// endpoint, resolves the locale, and kicks off eager image loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref().map(std::path::Path::new));
        let i18n = I18n::new(flags.lang.clone(), &config);

        // Fail fast on a broken endpoint: validate once at startup. A CLI
        // override takes precedence over the config file.
        let contact_config = match flags.endpoint {
            Some(endpoint) => config::ContactConfig {
                endpoint: Some(endpoint),
                method: config.contact.method.clone(),
            },
            None => config.contact.clone(),
        };
        let endpoint = match contact_config.resolve() {
            Ok(endpoint) => {
                if endpoint.is_none() {
                    tracing::warn!("no contact endpoint configured; submission disabled");
                }
                endpoint
            }
            Err(error) => {
                tracing::error!(%error, "invalid contact endpoint; submission disabled");
                None
            }
        };

        let mut app = App {
            i18n,
            endpoint,
            scheme: config.theme_mode.scheme(),
            dark: config.theme_mode.is_dark(),
            ..Self::default()
        };

        let now = Instant::now();

        let eager = app.gallery.eager_requests();
        let mut tasks: Vec<Task<Message>> = eager
            .into_iter()
            .map(|(slot, asset)| load_image_task(slot, asset))
            .collect();

        // Sections above the fold (the hero) start revealing immediately,
        // without waiting for a first scroll event.
        tasks.push(update::run_observers(&mut app, now));

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

/// Decodes an embedded image off the UI thread.
fn load_image_task(slot: usize, asset: &'static str) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || gallery::load_embedded(asset))
                .await
                .unwrap_or_else(|e| Err(crate::error::Error::Image(e.to_string())))
        },
        move |result| Message::ImageLoaded { slot, result },
    )
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
