// SPDX-License-Identifier: MPL-2.0
//! Services section: one card per offered service.

use super::SectionEnv;
use crate::contact::Service;
use crate::page::Section;
use crate::ui::design_tokens::{faded, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

fn description_key(service: Service) -> &'static str {
    match service {
        Service::Installation => "service-install-desc",
        Service::Maintenance => "service-maintenance-desc",
        Service::Repair => "service-repair-desc",
        Service::Consultation => "service-consult-desc",
    }
}

pub fn view<'a, M: 'a>(env: &SectionEnv<'a>) -> Element<'a, M> {
    let title = Text::new(env.i18n.tr("services-title"))
        .size(typography::TITLE_LG)
        .color(faded(env.scheme.text_primary, env.fade));

    let mut cards = Row::new().spacing(spacing::LG);
    for service in Service::ALL {
        let card = Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(env.i18n.tr(service.title_key()))
                    .size(typography::TITLE_MD)
                    .color(faded(env.scheme.brand_primary, env.fade)),
            )
            .push(
                Text::new(env.i18n.tr(description_key(service)))
                    .size(typography::BODY)
                    .color(faded(env.scheme.text_secondary, env.fade)),
            );

        cards = cards.push(
            Container::new(card)
                .padding(spacing::LG)
                .width(Length::FillPortion(1))
                .style(styles::container::card),
        );
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(cards);

    super::shell(
        Section::Services,
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding([spacing::XL, spacing::LG])
            .into(),
    )
}
