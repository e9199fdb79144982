// SPDX-License-Identifier: MPL-2.0
//! Collection card rendering: slide image, indicator dots, replace button.

use super::{Gallery, Message};
use crate::content::Collection;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render one collection card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub collection: &'a Collection,
    pub gallery: &'a Gallery,
    /// Reveal fade alpha for the whole card.
    pub alpha: f32,
}

/// Render a collection card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let carousel = mouse_area(
        Column::new()
            .spacing(spacing::SM)
            .push(build_slide_area(&ctx))
            .push(build_indicators(&ctx)),
    )
    .on_enter(Message::HoverEntered)
    .on_exit(Message::HoverExited);

    let title = Text::new(ctx.collection.title.as_str()).size(typography::TITLE_MD);
    let description = Text::new(ctx.collection.description.as_str()).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(carousel)
        .push(title)
        .push(description);

    Container::new(content)
        .width(Length::Fixed(layout::CARD_WIDTH))
        .height(Length::Fixed(layout::CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::card(ctx.alpha))
        .into()
}

/// Build the active slide image with the replace button overlaid.
fn build_slide_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slide_image: Element<'a, Message> =
        match ctx.collection.slides.get(ctx.gallery.active()) {
            Some(slide) => Image::new(slide.image.handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(layout::SLIDE_HEIGHT))
                .content_fit(ContentFit::Cover)
                .opacity(ctx.alpha)
                .into(),
            None => Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(layout::SLIDE_HEIGHT))
                .into(),
        };

    // Interactive chrome does not fade; it appears once the card is
    // fully revealed, so invisible controls are never clickable.
    if ctx.alpha < opacity::OPAQUE {
        return slide_image;
    }

    let replace_label = ctx.i18n.tr("collection-replace-image");
    let replace_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(
                icons::tinted(icons::upload(), palette::WHITE),
                sizing::ICON_SM,
            ))
            .push(Text::new(replace_label).size(typography::CAPTION)),
    )
    .on_press(Message::ReplacePressed)
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));

    let overlay = Container::new(replace_button)
        .width(Length::Fill)
        .height(Length::Fixed(layout::SLIDE_HEIGHT))
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::XS);

    Stack::new().push(slide_image).push(overlay).into()
}

/// Build the indicator dot row. Exactly one dot carries the active style.
fn build_indicators<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.gallery.len() < 2 || ctx.alpha < opacity::OPAQUE {
        return Space::new().height(Length::Fixed(sizing::INDICATOR_DOT)).into();
    }

    let mut dots = Row::new().spacing(spacing::XS);
    for index in 0..ctx.gallery.len() {
        let dot = button(Space::new())
            .width(Length::Fixed(sizing::INDICATOR_DOT))
            .height(Length::Fixed(sizing::INDICATOR_DOT))
            .padding(0)
            .on_press(Message::SlideRequested(index))
            .style(styles::button::indicator(index == ctx.gallery.active()));
        dots = dots.push(dot);
    }

    Container::new(dots)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Slide;
    use crate::media::image::ImageData;
    use std::time::{Duration, Instant};

    fn test_collection(slides: usize) -> Collection {
        Collection {
            title: "Rings".to_owned(),
            description: "Test collection".to_owned(),
            slides: (0..slides)
                .map(|index| Slide {
                    image: ImageData::from_rgba(1, 1, vec![255, 255, 255, 255]),
                    source_name: format!("slide-{index}.png"),
                })
                .collect(),
        }
    }

    #[test]
    fn card_view_renders() {
        let i18n = I18n::default();
        let collection = test_collection(3);
        let gallery = Gallery::new(3, Duration::from_secs(4), Instant::now());
        let _element = view(ViewContext {
            i18n: &i18n,
            collection: &collection,
            gallery: &gallery,
            alpha: 1.0,
        });
    }

    #[test]
    fn card_view_renders_mid_fade() {
        let i18n = I18n::default();
        let collection = test_collection(2);
        let gallery = Gallery::new(2, Duration::from_secs(4), Instant::now());
        let _element = view(ViewContext {
            i18n: &i18n,
            collection: &collection,
            gallery: &gallery,
            alpha: 0.4,
        });
    }

    #[test]
    fn card_view_renders_with_no_slides() {
        let i18n = I18n::default();
        let collection = test_collection(0);
        let gallery = Gallery::new(0, Duration::from_secs(4), Instant::now());
        let _element = view(ViewContext {
            i18n: &i18n,
            collection: &collection,
            gallery: &gallery,
            alpha: 1.0,
        });
    }
}
