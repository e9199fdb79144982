// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for section navigation.
//!
//! This module provides the brand mark and the hamburger menu that sit
//! above the scrolling page. The menu lists the page sections; picking
//! one closes the menu and asks the application to scroll there.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// A navigable page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Collection,
    About,
    Contact,
}

impl Section {
    /// All sections in page order, matching the menu order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Collection,
        Section::About,
        Section::Contact,
    ];

    /// Translation key for the section's menu label.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Collection => "nav-collection",
            Section::About => "nav-about",
            Section::Contact => "nav-contact",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    /// Whether the page has scrolled past the raise threshold.
    pub raised: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    LinkClicked(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    NavigateTo(Section),
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
        Message::LinkClicked(section) => {
            *menu_open = false;
            Event::NavigateTo(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let bar = build_bar(&ctx);
    content = content.push(bar);

    // Dropdown menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the bar with the brand mark and the menu toggle.
fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_SM);

    // The toggle icon mirrors the open state.
    let toggle_icon = if ctx.menu_open {
        icons::cross()
    } else {
        icons::hamburger()
    };
    let toggle = button(icons::sized(toggle_icon, sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(layout::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar(ctx.raised))
        .into()
}

/// Build the dropdown menu listing the page sections.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);
    for section in Section::ALL {
        menu_column = menu_column.push(build_menu_item(ctx.i18n.tr(section.title_key()), section));
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

/// Build a single menu item for a section.
fn build_menu_item<'a>(label: String, section: Section) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .on_press(Message::LinkClicked(section))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::nav_link)
        .into()
}
