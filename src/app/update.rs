// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{load_image_task, App, Message, PAGE_SCROLLABLE_ID};
use crate::contact;
use crate::page::{layout, Section};
use crate::ui::banner;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar;
use crate::ui::sections::contact as contact_section;
use crate::ui::sections::hero;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, Point, Task};
use std::time::Instant;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => match navbar::update(msg, &mut app.menu_open) {
            navbar::Event::None => Task::none(),
            navbar::Event::Navigate(section) => {
                app.scroll.start_scroll_to_section(section, Instant::now());
                Task::none()
            }
        },
        Message::Hero(hero::Message::ContactPressed) => {
            app.scroll
                .start_scroll_to_section(Section::Contact, Instant::now());
            Task::none()
        }
        Message::Scrolled {
            offset_y,
            viewport_height,
            content_height,
        } => {
            app.scroll.record(offset_y, viewport_height, content_height);
            run_observers(app, Instant::now())
        }
        Message::BackToTop => {
            app.scroll.start_scroll_to(0.0, Instant::now());
            Task::none()
        }
        Message::AnimationTick(now) => handle_animation_tick(app, now),
        Message::CounterTick(_) => {
            app.counters.tick();
            Task::none()
        }
        Message::BannerTick(now) => {
            app.banner.tick(now);
            Task::none()
        }
        Message::Contact(msg) => handle_contact(app, msg),
        Message::SubmissionCompleted(result) => handle_submission_completed(app, result),
        Message::ImageLoaded { slot, result } => {
            app.gallery.loaded(slot, result, Instant::now());
            Task::none()
        }
        Message::RawEvent { event, .. } => handle_raw_event(app, &event),
    }
}

/// Re-evaluates all visibility observers against the current scroll
/// position: section reveals, the counter trigger, and lazy image loads.
pub(super) fn run_observers(app: &mut App, now: Instant) -> Task<Message> {
    let position = app.scroll.position();

    app.reveal.observe(position, now);

    let about_visibility = layout::visible_fraction(
        Section::About,
        position.offset_y,
        position.viewport_height,
        0.0,
    );
    app.counters.observe(about_visibility);

    let gallery_visibility = layout::visible_fraction(
        Section::Gallery,
        position.offset_y,
        position.viewport_height,
        0.0,
    );
    let requests = app.gallery.observe(gallery_visibility);

    Task::batch(
        requests
            .into_iter()
            .map(|(slot, asset)| load_image_task(slot, asset)),
    )
}

/// One animation frame: advance the smooth scroll, promote finished
/// reveals, and spin the submit button while a submission is in flight.
fn handle_animation_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.reveal.tick(now);

    if app.form.is_sending() {
        app.form.spin();
    }

    if let Some(offset) = app.scroll.next_offset(now) {
        let relative = app.scroll.relative(offset);
        // Programmatic scrolling moves the viewport, so the observers run
        // here as well, not only on user scroll events.
        let observers = run_observers(app, now);
        let snap = operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: relative,
            },
        );
        Task::batch([snap, observers])
    } else {
        Task::none()
    }
}

fn handle_contact(app: &mut App, msg: contact::Message) -> Task<Message> {
    // Any submission attempt clears previous outcome banners, even when
    // validation then blocks it.
    if matches!(msg, contact::Message::Submit) {
        app.banner.clear();
    }

    match app.form.update(msg) {
        contact::Event::None => Task::none(),
        contact::Event::Blocked { first_invalid } => {
            // Bring the form into view and focus the first invalid field.
            app.scroll
                .start_scroll_to_section(Section::Contact, Instant::now());
            operation::focus(contact_section::input_id(first_invalid))
        }
        contact::Event::Submit(payload) => {
            match app.endpoint.clone() {
                Some(endpoint) => Task::perform(
                    contact::submit::send(endpoint, payload),
                    Message::SubmissionCompleted,
                ),
                None => {
                    // The submit button is disabled without an endpoint;
                    // guard anyway so the form cannot get stuck sending.
                    tracing::warn!("submission attempted without a configured endpoint");
                    app.form.submission_finished(false);
                    app.banner.show(banner::Kind::Error, Instant::now());
                    Task::none()
                }
            }
        }
    }
}

fn handle_submission_completed(
    app: &mut App,
    result: Result<(), contact::SubmitError>,
) -> Task<Message> {
    let now = Instant::now();
    match result {
        Ok(()) => {
            tracing::info!("contact form submitted");
            app.form.submission_finished(true);
            app.banner.show(banner::Kind::Success, now);
            // Scroll the success banner into view.
            app.scroll.start_scroll_to_section(Section::Contact, now);
        }
        Err(contact::SubmitError::Rejected { status, detail }) => {
            tracing::error!(status, %detail, "form submission rejected");
            app.form.submission_finished(false);
            app.banner.show(banner::Kind::Error, now);
        }
        Err(contact::SubmitError::Transport(message)) => {
            tracing::error!(%message, "form submission failed");
            app.form.submission_finished(false);
            app.banner.show(banner::Kind::Error, now);
        }
    }
    Task::none()
}

/// Y extent of the navbar plus the dropdown; clicks below it while the
/// menu is open count as outside clicks.
fn menu_region_height(menu_open: bool) -> f32 {
    if menu_open {
        sizing::NAVBAR_HEIGHT + sizing::MENU_HEIGHT
    } else {
        sizing::NAVBAR_HEIGHT
    }
}

fn is_outside_menu(cursor: Point, menu_open: bool) -> bool {
    cursor.y > menu_region_height(menu_open)
}

fn handle_raw_event(app: &mut App, event: &event::Event) -> Task<Message> {
    match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            app.window_size = *size;
            app.scroll.record_viewport_height(size.height);
            // A taller window can bring sections into view without any
            // scrolling, so the observers re-run here too.
            run_observers(app, Instant::now())
        }
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            app.cursor = *position;
            Task::none()
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            if app.menu_open && is_outside_menu(app.cursor, app.menu_open) {
                let _ = navbar::update(navbar::Message::CloseMenu, &mut app.menu_open);
            }
            Task::none()
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => handle_escape(app),
        _ => Task::none(),
    }
}

/// Escape closes the open menu and returns focus to the toggle button.
fn handle_escape(app: &mut App) -> Task<Message> {
    if app.menu_open {
        let _ = navbar::update(navbar::Message::CloseMenu, &mut app.menu_open);
        operation::focus(navbar::toggle_button_id())
    } else {
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::counter;

    #[test]
    fn clicks_below_the_open_menu_count_as_outside() {
        let below = Point::new(100.0, sizing::NAVBAR_HEIGHT + sizing::MENU_HEIGHT + 1.0);
        assert!(is_outside_menu(below, true));

        let inside_menu = Point::new(100.0, sizing::NAVBAR_HEIGHT + 10.0);
        assert!(!is_outside_menu(inside_menu, true));
    }

    #[test]
    fn escape_closes_menu_and_is_a_no_op_when_closed() {
        let mut app = App::default();
        app.menu_open = true;

        let _task = handle_escape(&mut app);
        assert!(!app.menu_open);

        let _task = handle_escape(&mut app);
        assert!(!app.menu_open);
    }

    #[test]
    fn outside_click_closes_the_open_menu() {
        let mut app = App::default();
        app.menu_open = true;
        app.cursor = Point::new(200.0, 600.0);

        let click = event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let _task = handle_raw_event(&mut app, &click);
        assert!(!app.menu_open);
    }

    #[test]
    fn submission_failure_keeps_form_and_shows_error_banner() {
        let mut app = App::default();
        let _ = app.form.update(contact::Message::FieldEdited(
            contact::Field::Name,
            "Budi".into(),
        ));

        let _ = handle_submission_completed(
            &mut app,
            Err(contact::SubmitError::Transport("offline".into())),
        );

        assert_eq!(app.banner.visible(), Some(banner::Kind::Error));
        assert_eq!(app.form.value(contact::Field::Name), "Budi");
    }

    #[test]
    fn submission_success_clears_form_and_shows_success_banner() {
        let mut app = App::default();
        let _ = app.form.update(contact::Message::FieldEdited(
            contact::Field::Name,
            "Budi".into(),
        ));

        let _ = handle_submission_completed(&mut app, Ok(()));

        assert_eq!(app.banner.visible(), Some(banner::Kind::Success));
        assert_eq!(app.form.value(contact::Field::Name), "");
        assert!(app.scroll.is_animating());
    }

    #[test]
    fn counters_start_once_about_is_half_visible() {
        let mut app = App::default();
        let about_anchor = layout::anchor_offset(
            Section::About,
            app.window_size.height,
        );
        app.scroll
            .record(about_anchor, app.window_size.height, layout::total_height());

        let _ = run_observers(&mut app, Instant::now());
        assert!(app.counters.any_running());

        // Immediately after start, counters display their initial value.
        let displays: Vec<String> = app.counters.iter().map(counter::Counter::display).collect();
        assert!(displays.contains(&"0+".to_string()));
    }
}
