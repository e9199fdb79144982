// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the modal dialog.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Navigation bar surface.
///
/// The `raised` variant kicks in once the page has scrolled past the
/// threshold: the bar becomes opaque and casts a shadow so it separates
/// from the content sliding underneath it.
pub fn navbar(raised: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        let alpha = if raised {
            opacity::OPAQUE
        } else {
            opacity::SURFACE
        };

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r, base.g, base.b, alpha,
            ))),
            shadow: if raised { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Collection or team card surface, faded in by the reveal animation.
///
/// `alpha` scales the card background and cascades to child text colors,
/// so a card at `alpha == 0.0` occupies layout space but shows nothing.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.weak.color;
        let text = palette.background.base.text;

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                alpha,
            ))),
            text_color: Some(Color { a: alpha, ..text }),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: if alpha >= opacity::OPAQUE {
                shadow::SM
            } else {
                shadow::NONE
            },
            ..Default::default()
        }
    }
}

/// Dimmed fullscreen backdrop behind the modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dashed-look drop target inside the replace modal.
///
/// Highlighted while a dragged file hovers the window.
pub fn drop_zone(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let (border_color, background) = if highlighted {
            (
                palette::PRIMARY_500,
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_400
                })),
            )
        } else {
            (extended.background.strong.color, None)
        };

        container::Style {
            background,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Hero banner at the top of the page.
pub fn hero(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r * 0.6 + palette::PRIMARY_800.r * 0.4,
            base.g * 0.6 + palette::PRIMARY_800.g * 0.4,
            base.b * 0.6 + palette::PRIMARY_800.b * 0.4,
            opacity::OPAQUE,
        ))),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Page footer strip.
pub fn footer(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raised_navbar_is_opaque_and_shadowed() {
        let theme = Theme::Light;
        let base = navbar(false)(&theme);
        let raised = navbar(true)(&theme);

        let alpha_of = |style: &container::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected background color"),
        };

        assert!(alpha_of(&raised) > alpha_of(&base));
        assert!(raised.shadow.blur_radius > base.shadow.blur_radius);
    }

    #[test]
    fn card_alpha_cascades_to_text() {
        let theme = Theme::Dark;
        let style = card(0.5)(&theme);
        let text = style.text_color.expect("card sets a text color");
        assert!((text.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn drop_zone_highlight_uses_brand_border() {
        let theme = Theme::Dark;
        let style = drop_zone(true)(&theme);
        assert_eq!(style.border.color, palette::PRIMARY_500);
    }
}
