// SPDX-License-Identifier: MPL-2.0
//! About section with the animated statistic counters.

use super::SectionEnv;
use crate::page::counter;
use crate::page::Section;
use crate::ui::design_tokens::{faded, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, M: 'a>(env: &SectionEnv<'a>, counters: &'a counter::Board) -> Element<'a, M> {
    let title = Text::new(env.i18n.tr("about-title"))
        .size(typography::TITLE_LG)
        .color(faded(env.scheme.text_primary, env.fade));

    let body = Text::new(env.i18n.tr("about-body"))
        .size(typography::BODY_LG)
        .color(faded(env.scheme.text_secondary, env.fade));

    let mut stats = Row::new().spacing(spacing::LG);
    for stat in counters.iter() {
        let tile = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(stat.display())
                    .size(typography::TITLE_LG)
                    .color(faded(env.scheme.brand_primary, env.fade)),
            )
            .push(
                Text::new(env.i18n.tr(stat.label_key))
                    .size(typography::BODY)
                    .color(faded(env.scheme.text_secondary, env.fade)),
            );

        stats = stats.push(
            Container::new(tile)
                .padding(spacing::LG)
                .width(Length::FillPortion(1))
                .align_x(alignment::Horizontal::Center)
                .style(styles::container::card),
        );
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .max_width(900.0)
        .push(title)
        .push(body)
        .push(stats);

    super::shell(
        Section::About,
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding([spacing::XL, spacing::LG])
            .into(),
    )
}
