// SPDX-License-Identifier: MPL-2.0
//! View composition: the scrollable page under the sticky header, plus
//! the floating back-to-top button.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::page::{layout, Section};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::icons;
use crate::ui::navbar;
use crate::ui::sections::{
    about, contact as contact_section, gallery as gallery_section, hero, services, SectionEnv,
};
use crate::ui::styles;
use iced::widget::scrollable::{Scrollable, Viewport};
use iced::widget::{button, Column, Container, Id, Space, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let now = Instant::now();

    let env = |section: Section| SectionEnv {
        i18n: &app.i18n,
        scheme: &app.scheme,
        fade: app.reveal.fade(section, now),
    };

    // Content starts with a header-sized spacer; sections scroll under
    // the sticky bar like they would under a fixed page header.
    let page = Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(layout::HEADER_HEIGHT)))
        .push(hero::view(&env(Section::Hero), app.gallery.hero(), now).map(Message::Hero))
        .push(services::view(&env(Section::Services)))
        .push(about::view(&env(Section::About), &app.counters))
        .push(gallery_section::view(
            &env(Section::Gallery),
            &app.gallery,
            now,
        ))
        .push(
            contact_section::view(contact_section::ViewContext {
                env: env(Section::Contact),
                form: &app.form,
                banner: &app.banner,
                endpoint_available: app.endpoint.is_some(),
            })
            .map(Message::Contact),
        );

    let page_scroll = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        });

    // Sticky header: navbar (with its dropdown) and the scroll progress
    // indicator directly below it.
    let header = Column::new()
        .width(Length::Fill)
        .push(
            navbar::view(navbar::ViewContext {
                i18n: &app.i18n,
                menu_open: app.menu_open,
            })
            .map(Message::Navbar),
        )
        .push(progress_indicator(app));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page_scroll)
        .push(Container::new(header).width(Length::Fill));

    if app.scroll.back_to_top_visible() {
        layers = layers.push(back_to_top());
    }

    layers.into()
}

/// Thin horizontal bar whose filled width mirrors the scroll progress
/// ratio (full width at the bottom of the page).
fn progress_indicator(app: &App) -> Element<'_, Message> {
    let filled = app.window_size.width * app.scroll.progress();

    Container::new(
        Container::new(Space::new())
            .width(Length::Fixed(filled))
            .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
            .style(styles::container::progress_fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
    .style(styles::container::progress_track)
    .into()
}

/// Floating button pinned to the bottom-right corner.
fn back_to_top<'a>() -> Element<'a, Message> {
    let icon = icons::tinted(
        icons::sized(icons::arrow_up(), sizing::ICON_MD),
        palette::WHITE,
    );
    let control = button(icon)
        .on_press(Message::BackToTop)
        .style(styles::button::floating)
        .padding(spacing::SM);

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}
