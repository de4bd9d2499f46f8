// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the banner, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Vertical rhythm inside the banner card
- **Sizing**: Component sizes
- **Typography**: Font sizes and line heights
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_shout::ui::design_tokens::{palette, opacity};
use iced::Color;

// A translucent accent for pressed states
let pressed = Color {
    a: opacity::PRESSED,
    ..palette::ACCENT_500
};
```
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
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.16);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.9);

    /// Divider and secondary button border, rgb(230, 230, 230).
    pub const DIVIDER: Color = Color::from_rgb(230.0 / 255.0, 230.0 / 255.0, 230.0 / 255.0);

    /// Brand accent used for the title and filled buttons, rgb(251, 52, 73).
    pub const ACCENT_500: Color = Color::from_rgb(251.0 / 255.0, 52.0 / 255.0, 73.0 / 255.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const HOVER: f32 = 0.85;
    pub const PRESSED: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card drop shadow (0.32 color alpha at 0.6 layer opacity).
    pub const SHADOW: f32 = 0.32 * 0.6;
}

// ============================================================================
// Spacing (banner card vertical rhythm)
// ============================================================================

pub mod spacing {
    /// Card top edge to title.
    pub const TITLE_TOP: f32 = 9.0;
    /// Title to divider.
    pub const DIVIDER_GAP: f32 = 9.0;
    /// Divider to subtitle.
    pub const SUBTITLE_GAP: f32 = 8.0;
    /// Subtitle row to buttons, and buttons to card bottom.
    pub const BUTTON_GAP: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 32.0;
    pub const DIVIDER_HEIGHT: f32 = 0.5;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Title, subtitle and button labels all share one body size.
    pub const BODY: f32 = 14.0;

    /// Line height multiplier applied to [`BODY`] when measuring labels.
    pub const LINE_HEIGHT: f32 = 1.3;

    /// Maximum number of title lines (truncated beyond).
    pub const TITLE_MAX_LINES: usize = 1;

    /// Maximum number of subtitle lines.
    pub const SUBTITLE_MAX_LINES: usize = 2;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Outline of the secondary ("Later") button.
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const BUTTON: f32 = 2.0;
    pub const CARD: f32 = 6.0;
    pub const INDICATOR: f32 = 3.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Drop shadow under the banner card.
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 7.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);
    assert!(opacity::PRESSED < opacity::HOVER);

    // Sizing validation
    assert!(sizing::BUTTON_HEIGHT > typography::BODY);
    assert!(sizing::DIVIDER_HEIGHT > 0.0);

    // Typography validation
    assert!(typography::LINE_HEIGHT >= 1.0);
    assert!(typography::SUBTITLE_MAX_LINES >= typography::TITLE_MAX_LINES);

    // Radius validation
    assert!(radius::CARD > radius::BUTTON);

    // Color validation
    assert!(palette::ACCENT_500.r >= 0.0 && palette::ACCENT_500.r <= 1.0);
};
