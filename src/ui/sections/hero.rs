// SPDX-License-Identifier: MPL-2.0
//! Hero section: headline, subtitle, call-to-action, and the eagerly
//! loaded hero artwork fading in once decoded.

use super::SectionEnv;
use crate::gallery::Slot;
use crate::page::Section;
use crate::ui::design_tokens::{faded, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image::Image, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    /// The call-to-action was pressed; the parent scrolls to the contact
    /// section.
    ContactPressed,
}

pub fn view<'a>(env: &SectionEnv<'a>, hero: &'a Slot, now: Instant) -> Element<'a, Message> {
    let title = Text::new(env.i18n.tr("hero-title"))
        .size(typography::TITLE_XL)
        .color(faded(env.scheme.text_primary, env.fade));

    let subtitle = Text::new(env.i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .color(faded(env.scheme.text_secondary, env.fade));

    let cta = button(Text::new(env.i18n.tr("hero-cta")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::ContactPressed);

    let mut copy = Column::new()
        .spacing(spacing::LG)
        .max_width(520.0)
        .push(title)
        .push(subtitle)
        .push(cta);

    // Artwork is invisible until its decode finishes, then fades in.
    if let Some(handle) = hero.handle() {
        let artwork = Image::new(handle.clone())
            .width(Length::Fixed(420.0))
            .opacity(hero.fade(now));
        copy = copy.push(Space::new().height(Length::Fixed(spacing::MD)));
        copy = copy.push(artwork);
    }

    let content = Container::new(copy)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XL, spacing::LG]);

    super::shell(
        Section::Hero,
        Row::new().push(content).width(Length::Fill).into(),
    )
}
