// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Layout**: Page section metrics (shared by the view and the reveal scan)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use vitrine::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a dimmed backdrop color
let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests

The `layout` values double as the geometry model for scroll effects, so
any change there moves both the rendered page and the reveal scan.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (gold scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.97, 0.93, 0.82); // Champagne
    pub const PRIMARY_200: Color = Color::from_rgb(0.93, 0.86, 0.66); // Pale gold
    pub const PRIMARY_400: Color = Color::from_rgb(0.88, 0.76, 0.38); // Light gold
    pub const PRIMARY_500: Color = Color::from_rgb(0.83, 0.69, 0.22); // Primary gold
    pub const PRIMARY_600: Color = Color::from_rgb(0.72, 0.58, 0.16); // Medium dark gold
    pub const PRIMARY_700: Color = Color::from_rgb(0.58, 0.46, 0.12); // Dark gold
    pub const PRIMARY_800: Color = Color::from_rgb(0.44, 0.34, 0.08); // Very dark gold

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Carousel indicator dots
    pub const INDICATOR_DOT: f32 = 10.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MODAL_WIDTH: f32 = 440.0;
    pub const FORM_WIDTH: f32 = 560.0;
    pub const DROP_ZONE_HEIGHT: f32 = 180.0;
}

// ============================================================================
// Page Layout Metrics
// ============================================================================

pub mod layout {
    //! Fixed vertical metrics for the showcase page.
    //!
    //! Every section is laid out with these heights, and the scroll-effect
    //! scan reconstructs target rectangles from the same numbers. Keeping
    //! one source avoids the view and the visibility model drifting apart.

    /// Height of the fixed navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Height of the hero banner at the top of the page.
    pub const HERO_HEIGHT: f32 = 520.0;

    /// Vertical padding applied above and below each section body.
    pub const SECTION_PAD: f32 = 96.0;

    /// Height reserved for a section heading and its bottom margin.
    pub const SECTION_TITLE_HEIGHT: f32 = 72.0;

    /// Collection card dimensions.
    pub const CARD_WIDTH: f32 = 340.0;
    pub const CARD_HEIGHT: f32 = 460.0;

    /// Carousel image area inside a card.
    pub const SLIDE_HEIGHT: f32 = 260.0;

    /// Gap between cards and between card rows.
    pub const CARD_GAP: f32 = 24.0;

    /// Cards per row before wrapping to the next row.
    pub const CARDS_PER_ROW: usize = 3;

    /// About section paragraphs block.
    pub const ABOUT_TEXT_HEIGHT: f32 = 150.0;

    /// Team member tile dimensions.
    pub const TEAM_MEMBER_WIDTH: f32 = 220.0;
    pub const TEAM_MEMBER_HEIGHT: f32 = 170.0;

    /// Members per row before wrapping.
    pub const TEAM_PER_ROW: usize = 3;

    /// Contact form block (heading excluded).
    pub const CONTACT_FORM_HEIGHT: f32 = 430.0;

    /// Page footer.
    pub const FOOTER_HEIGHT: f32 = 80.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Display: Hero banner headline
    //! - Titles: Section headings, card titles
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Display - Hero banner headline
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headings (Collection, About, Contact)
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name, card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Team member names, modal title
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Hero subtitle, form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Footer line, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents, drop zone
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    // Layout validation: the carousel area must fit inside its card
    assert!(layout::SLIDE_HEIGHT < layout::CARD_HEIGHT);
    assert!(layout::CARDS_PER_ROW > 0);
    assert!(layout::TEAM_PER_ROW > 0);
    assert!(layout::NAVBAR_HEIGHT > 0.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_scale_darkens_toward_800() {
        assert!(palette::PRIMARY_100.r > palette::PRIMARY_500.r);
        assert!(palette::PRIMARY_500.r > palette::PRIMARY_800.r);
    }
}
