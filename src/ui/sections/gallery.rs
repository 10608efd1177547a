// SPDX-License-Identifier: MPL-2.0
//! Gallery section: lazily loaded tiles that fade in once decoded.

use super::SectionEnv;
use crate::gallery::Board;
use crate::page::Section;
use crate::ui::design_tokens::{faded, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image::Image, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

pub fn view<'a, M: 'a>(env: &SectionEnv<'a>, board: &'a Board, now: Instant) -> Element<'a, M> {
    let title = Text::new(env.i18n.tr("gallery-title"))
        .size(typography::TITLE_LG)
        .color(faded(env.scheme.text_primary, env.fade));

    let mut tiles = Row::new().spacing(spacing::LG);
    for (_, slot) in board.tiles() {
        let artwork: Element<'a, M> = if let Some(handle) = slot.handle() {
            Image::new(handle.clone())
                .width(Length::Fixed(sizing::GALLERY_TILE))
                .height(Length::Fixed(sizing::GALLERY_TILE * 0.75))
                .opacity(slot.fade(now))
                .into()
        } else {
            // Placeholder box while deferred/loading, or after a failed
            // decode (failures are terminal, no retry).
            let placeholder_key = if slot.is_failed() {
                "gallery-load-failed"
            } else {
                slot.caption_key
            };
            Container::new(
                Text::new(env.i18n.tr(placeholder_key))
                    .size(typography::CAPTION)
                    .color(faded(env.scheme.text_secondary, 0.6)),
            )
            .width(Length::Fixed(sizing::GALLERY_TILE))
            .height(Length::Fixed(sizing::GALLERY_TILE * 0.75))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::card)
            .into()
        };

        let caption = Text::new(env.i18n.tr(slot.caption_key))
            .size(typography::BODY)
            .color(faded(env.scheme.text_secondary, env.fade));

        tiles = tiles.push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(artwork)
                .push(caption),
        );
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(tiles);

    super::shell(
        Section::Gallery,
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding([spacing::XL, spacing::LG])
            .into(),
    )
}
