// SPDX-License-Identifier: MPL-2.0
//! Sticky navigation bar with the hamburger menu.
//!
//! The bar shows the brand mark and a hamburger toggle; when open, a
//! dropdown lists one link per page section. Selecting a link closes the
//! menu and asks the parent to scroll to that section. The parent also
//! closes the menu on outside clicks and on Escape (returning focus to
//! the toggle button).

use crate::i18n::fluent::I18n;
use crate::page::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Id, Row, Space, Text},
    Element, Length,
};

/// Widget id of the hamburger toggle, used to return focus on Escape.
pub fn toggle_button_id() -> Id {
    Id::new("menu-toggle")
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    NavClicked(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::NavClicked(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
    }
}

/// Render the navigation bar (top bar plus dropdown when open).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the top bar: brand mark on the left, hamburger on the right.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::flame(), sizing::ICON_LG))
        .push(
            Text::new(ctx.i18n.tr("app-title"))
                .size(typography::TITLE_MD),
        );

    // The glyph mirrors the menu state: bars when closed, cross when open.
    let toggle_icon = if ctx.menu_open {
        icons::cross()
    } else {
        icons::bars()
    };

    let toggle = button(icons::themed(icons::sized(toggle_icon, sizing::ICON_MD)))
        .id(toggle_button_id())
        .on_press(Message::ToggleMenu)
        .style(styles::button::menu_item)
        .padding(spacing::XS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}

/// Build the dropdown with one navigation link per section.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for section in Section::ALL {
        let label = ctx.i18n.tr(section.nav_key());
        let item = button(Text::new(label))
            .on_press(Message::NavClicked(section))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::menu_item);
        menu_column = menu_column.push(item);
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::menu_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        let event = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn nav_links_close_menu_and_emit_navigate() {
        let mut menu_open = true;
        let event = update(Message::NavClicked(Section::Contact), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Section::Contact)));
    }
}
