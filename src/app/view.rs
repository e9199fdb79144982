// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one vertical scrollable of fixed-height sections with
//! three floating layers above it: the navigation bar, the replace
//! modal, and the toast overlay. Section heights follow the same layout
//! constants the scroll-effect geometry is computed from.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::content::Showcase;
use crate::i18n::fluent::I18n;
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::design_tokens::{layout, opacity, palette, sizing, spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, Section, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::replace_modal::{self, ViewContext as ModalViewContext};
use crate::ui::scroll_effects::{RevealTarget, ScrollEffects};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Id,
    Color, Element, Length, Theme,
};

/// Number of team members introduced in the about section. The members
/// are localized text content, not loaded data.
pub const TEAM_MEMBER_COUNT: usize = 3;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub showcase: &'a Showcase,
    pub galleries: &'a [gallery::Gallery],
    pub menu_open: bool,
    pub contact: &'a contact::State,
    pub modal: &'a replace_modal::State,
    pub notifications: &'a notifications::Manager,
    pub effects: &'a ScrollEffects,
}

/// Renders the page with its floating layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(build_page(&ctx))
        .push(build_navbar(&ctx));

    if let Some(modal) = build_modal_overlay(&ctx) {
        layers = layers.push(modal);
    }

    layers.push(build_toast_overlay(&ctx)).into()
}

fn build_navbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        raised: ctx.effects.navbar_raised(),
    })
    .map(Message::Navbar)
}

fn build_toast_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification)
}

/// Build the scrolling page from hero to footer.
fn build_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let page = Column::new()
        .width(Length::Fill)
        .push(build_hero(ctx))
        .push(build_collection_section(ctx))
        .push(build_about_section(ctx))
        .push(build_contact_section(ctx))
        .push(build_footer(ctx));

    Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            offset: viewport.absolute_offset(),
            bounds: viewport.bounds(),
        })
        .into()
}

fn build_hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("hero-title")).size(typography::DISPLAY);
    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::BODY_LG);
    let cta = button(Text::new(ctx.i18n.tr("hero-cta")).size(typography::BODY_LG))
        .on_press(Message::NavigateTo(Section::Collection))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(cta);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::HERO_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::hero)
        .into()
}

/// Centered heading container sized like every other section title.
fn build_section_title<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fixed(layout::SECTION_TITLE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn build_collection_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new()
        .spacing(layout::CARD_GAP)
        .align_x(Horizontal::Center);
    let mut row = Row::new().spacing(layout::CARD_GAP);
    let mut in_row = 0;

    for (index, collection) in ctx.showcase.collections.iter().enumerate() {
        let Some(gallery) = ctx.galleries.get(index) else {
            continue;
        };

        let card = gallery::view(GalleryViewContext {
            i18n: ctx.i18n,
            collection,
            gallery,
            alpha: ctx.effects.alpha(RevealTarget::Card(index)),
        })
        .map(move |message| Message::Gallery {
            collection: index,
            message,
        });

        row = row.push(card);
        in_row += 1;
        if in_row == layout::CARDS_PER_ROW {
            grid = grid.push(row);
            row = Row::new().spacing(layout::CARD_GAP);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    let content = Column::new()
        .align_x(Horizontal::Center)
        .push(build_section_title(ctx.i18n.tr("section-collection-title")))
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .padding([layout::SECTION_PAD, 0.0])
        .into()
}

fn build_about_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let about_alpha = ctx.effects.alpha(RevealTarget::AboutText);
    let paragraphs = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("about-body-1")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("about-body-2")).size(typography::BODY_LG));
    let about_text = Container::new(paragraphs)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .height(Length::Fixed(layout::ABOUT_TEXT_HEIGHT))
        .style(faded_text(about_alpha));

    let mut team_grid = Column::new()
        .spacing(layout::CARD_GAP)
        .align_x(Horizontal::Center);
    let mut row = Row::new().spacing(layout::CARD_GAP);
    let mut in_row = 0;
    for index in 0..TEAM_MEMBER_COUNT {
        row = row.push(build_team_member(ctx, index));
        in_row += 1;
        if in_row == layout::TEAM_PER_ROW {
            team_grid = team_grid.push(row);
            row = Row::new().spacing(layout::CARD_GAP);
            in_row = 0;
        }
    }
    if in_row > 0 {
        team_grid = team_grid.push(row);
    }

    let content = Column::new()
        .align_x(Horizontal::Center)
        .push(build_section_title(ctx.i18n.tr("about-heading")))
        .push(about_text)
        .push(Space::new().height(Length::Fixed(layout::CARD_GAP)))
        .push(build_section_title(ctx.i18n.tr("team-heading")))
        .push(team_grid);

    Container::new(content)
        .width(Length::Fill)
        .padding([layout::SECTION_PAD, 0.0])
        .into()
}

fn build_team_member<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let alpha = ctx.effects.alpha(RevealTarget::TeamMember(index));
    let number = index + 1;
    let name = ctx.i18n.tr(&format!("team-member-{number}-name"));
    let role = ctx.i18n.tr(&format!("team-member-{number}-role"));

    let card = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(name).size(typography::TITLE_SM))
        .push(Text::new(role).size(typography::BODY));

    Container::new(card)
        .width(Length::Fixed(layout::TEAM_MEMBER_WIDTH))
        .height(Length::Fixed(layout::TEAM_MEMBER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card(alpha))
        .into()
}

fn build_contact_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = contact::view(ContactViewContext {
        i18n: ctx.i18n,
        state: ctx.contact,
    })
    .map(Message::Contact);

    let content = Column::new()
        .align_x(Horizontal::Center)
        .push(build_section_title(ctx.i18n.tr("contact-heading")))
        .push(Container::new(form).height(Length::Fixed(layout::CONTACT_FORM_HEIGHT)));

    Container::new(content)
        .width(Length::Fill)
        .padding([layout::SECTION_PAD, 0.0])
        .into()
}

fn build_footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(Text::new(ctx.i18n.tr("footer-copyright")).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(layout::FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::footer)
        .into()
}

/// Build the replace-modal layer: a dimmed backdrop with the panel
/// centered on top. Clicking outside the panel cancels.
fn build_modal_overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let panel = replace_modal::view(ModalViewContext {
        i18n: ctx.i18n,
        state: ctx.modal,
    })?;

    let click_away = button(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(Message::ReplaceModal(replace_modal::Message::CancelPressed))
        .padding(0)
        .style(click_away_style);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(click_away)
            .push(
                Container::new(panel.map(Message::ReplaceModal))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(styles::container::backdrop),
            )
            .into(),
    )
}

/// Fades the about paragraphs through their text color alone; the text
/// sits directly on the section background, so nothing else is tinted.
fn faded_text(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let text = theme.extended_palette().background.base.text;

        container::Style {
            text_color: Some(Color { a: alpha, ..text }),
            ..container::Style::default()
        }
    }
}

/// Style for the full-window click-away target under the modal. The
/// dimming itself comes from the backdrop container above it.
fn click_away_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(
            Color {
                a: opacity::TRANSPARENT,
                ..palette::BLACK
            }
            .into(),
        ),
        ..button::Style::default()
    }
}
