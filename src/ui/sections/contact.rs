// SPDX-License-Identifier: MPL-2.0
//! Contact section: outcome banners, the validated form, and the submit
//! button with its loading state.

use super::SectionEnv;
use crate::contact::{Field, Message, Service, State};
use crate::page::Section;
use crate::ui::banner;
use crate::ui::design_tokens::{faded, palette, spacing, typography};
use crate::ui::spinner::Spinner;
use crate::ui::styles;
use iced::widget::{
    button, pick_list, text_input, Column, Container, Id, Row, Text,
};
use iced::{alignment, Element, Length};
use std::fmt;

/// Widget id of a form input, used to focus the first invalid field.
pub fn input_id(field: Field) -> Id {
    match field {
        Field::Name => Id::new("contact-name"),
        Field::Email => Id::new("contact-email"),
        Field::Phone => Id::new("contact-phone"),
        Field::Message => Id::new("contact-message"),
    }
}

fn label_key(field: Field) -> &'static str {
    match field {
        Field::Name => "form-name-label",
        Field::Email => "form-email-label",
        Field::Phone => "form-phone-label",
        Field::Message => "form-message-label",
    }
}

fn placeholder_key(field: Field) -> &'static str {
    match field {
        Field::Name => "form-name-placeholder",
        Field::Email => "form-email-placeholder",
        Field::Phone => "form-phone-placeholder",
        Field::Message => "form-message-placeholder",
    }
}

/// Pick-list entry carrying the localized label resolved at view time.
#[derive(Debug, Clone, PartialEq)]
struct ServiceOption {
    service: Service,
    label: String,
}

impl fmt::Display for ServiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Contextual data beyond the shared environment.
pub struct ViewContext<'a> {
    pub env: SectionEnv<'a>,
    pub form: &'a State,
    pub banner: &'a banner::State,
    /// False when no valid endpoint is configured; disables submission.
    pub endpoint_available: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let env = &ctx.env;

    let title = Text::new(env.i18n.tr("contact-title"))
        .size(typography::TITLE_LG)
        .color(faded(env.scheme.text_primary, env.fade));

    let subtitle = Text::new(env.i18n.tr("contact-subtitle"))
        .size(typography::BODY)
        .color(faded(env.scheme.text_secondary, env.fade));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(560.0)
        .push(title)
        .push(subtitle);

    if let Some(kind) = ctx.banner.visible() {
        column = column.push(banner_view(env, kind));
    }

    for field in Field::ALL {
        column = column.push(field_view(env, ctx.form, field));
    }

    column = column.push(service_view(env, ctx.form));
    column = column.push(submit_view(env, ctx.form, ctx.endpoint_available));

    super::shell(
        Section::Contact,
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding([spacing::XL, spacing::LG])
            .into(),
    )
}

fn banner_view<'a>(env: &SectionEnv<'a>, kind: banner::Kind) -> Element<'a, Message> {
    let accent = match kind {
        banner::Kind::Success => env.scheme.success,
        banner::Kind::Error => env.scheme.error,
    };

    Container::new(Text::new(env.i18n.tr(kind.message_key())).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::banner(accent))
        .into()
}

fn field_view<'a>(env: &SectionEnv<'a>, form: &'a State, field: Field) -> Element<'a, Message> {
    let label = Text::new(env.i18n.tr(label_key(field)))
        .size(typography::BODY)
        .color(faded(env.scheme.text_secondary, env.fade));

    let placeholder = env.i18n.tr(placeholder_key(field));
    let mut input = text_input(&placeholder, form.value(field))
        .id(input_id(field))
        .on_input(move |value| Message::FieldEdited(field, value))
        .padding(spacing::SM)
        .size(typography::BODY_LG);

    input = if form.error(field).is_some() {
        input.style(styles::text_input::error)
    } else {
        input.style(styles::text_input::default)
    };

    let mut column = Column::new().spacing(spacing::XXS).push(label).push(input);

    // Inline error text appears under the field and clears on revalidation.
    if let Some(error) = form.error(field) {
        column = column.push(
            Text::new(env.i18n.tr(error.message_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}

fn service_view<'a>(env: &SectionEnv<'a>, form: &'a State) -> Element<'a, Message> {
    let label = Text::new(env.i18n.tr("form-service-label"))
        .size(typography::BODY)
        .color(faded(env.scheme.text_secondary, env.fade));

    let options: Vec<ServiceOption> = Service::ALL
        .iter()
        .map(|&service| ServiceOption {
            service,
            label: env.i18n.tr(service.title_key()),
        })
        .collect();

    let selected = form.service().map(|service| ServiceOption {
        service,
        label: env.i18n.tr(service.title_key()),
    });

    let picker = pick_list(options, selected, |option: ServiceOption| {
        Message::ServiceSelected(option.service)
    })
    .placeholder(env.i18n.tr("form-service-placeholder"))
    .padding(spacing::SM)
    .width(Length::Fill);

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(picker)
        .into()
}

fn submit_view<'a>(
    env: &SectionEnv<'a>,
    form: &'a State,
    endpoint_available: bool,
) -> Element<'a, Message> {
    let label_key = if form.is_sending() {
        "form-submitting"
    } else {
        "form-submit"
    };

    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(env.i18n.tr(label_key)).size(typography::BODY_LG));

    if form.is_sending() {
        let spinner = Spinner::new(palette::WHITE, form.spinner_rotation());
        content = content.push(spinner.into_element());
    }

    let mut submit = button(content)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    // The button stays disabled while a submission is in flight or when no
    // endpoint is configured.
    if !form.is_sending() && endpoint_available {
        submit = submit.on_press(Message::Submit);
    }

    let mut column = Column::new().spacing(spacing::XS).push(submit);
    if !endpoint_available {
        column = column.push(
            Text::new(env.i18n.tr("form-endpoint-missing"))
                .size(typography::CAPTION)
                .color(faded(env.scheme.text_secondary, 0.8)),
        );
    }

    column.into()
}
