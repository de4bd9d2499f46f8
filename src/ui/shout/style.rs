// SPDX-License-Identifier: MPL-2.0
//! Banner colors and widget styles.
//!
//! Hosts supply colors through a [`StyleProvider`]; the widget style
//! functions below only ever read the resolved [`Palette`].

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Colors used to draw one banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub title: Color,
    pub subtitle: Color,
    pub divider: Color,
    /// Filled button background and outlined button text.
    pub accent: Color,
    pub drag_indicator: Color,
}

/// Supplies the banner palette for the active theme.
pub trait StyleProvider {
    fn palette(&self, theme: &Theme) -> Palette;
}

/// Brand colors on a white card, or a dark card for dark themes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyle;

impl DefaultStyle {
    #[must_use]
    pub fn light() -> Palette {
        Palette {
            background: palette::WHITE,
            title: palette::ACCENT_500,
            subtitle: palette::GRAY_900,
            divider: palette::DIVIDER,
            accent: palette::ACCENT_500,
            drag_indicator: palette::GRAY_100,
        }
    }

    #[must_use]
    pub fn dark() -> Palette {
        Palette {
            background: palette::GRAY_800,
            title: palette::ACCENT_500,
            subtitle: palette::GRAY_100,
            divider: palette::GRAY_400,
            accent: palette::ACCENT_500,
            drag_indicator: palette::GRAY_400,
        }
    }
}

impl StyleProvider for DefaultStyle {
    fn palette(&self, theme: &Theme) -> Palette {
        let bg = theme.palette().background;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl StyleProvider for Palette {
    fn palette(&self, _theme: &Theme) -> Palette {
        *self
    }
}

/// Rounded card with the drop shadow.
pub fn card(colors: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.background)),
        border: Border {
            radius: radius::CARD.into(),
            ..Border::default()
        },
        shadow: shadow::CARD,
        text_color: Some(colors.subtitle),
        ..container::Style::default()
    }
}

/// Thin rule between title and subtitle.
pub fn divider(colors: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.divider)),
        ..container::Style::default()
    }
}

/// Pill below the card hinting that the banner can be held.
pub fn drag_indicator(colors: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.drag_indicator)),
        border: Border {
            radius: radius::INDICATOR.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Accent-filled button ("OK", "Confirm").
pub fn filled_button(colors: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::HOVER,
            button::Status::Pressed => opacity::PRESSED,
            _ => opacity::OPAQUE,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.accent
            })),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::BUTTON.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Outlined button ("Later").
pub fn outlined_button(colors: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_alpha = match status {
            button::Status::Hovered => opacity::HOVER,
            button::Status::Pressed => opacity::PRESSED,
            _ => opacity::OPAQUE,
        };

        button::Style {
            background: Some(Background::Color(colors.background)),
            text_color: Color {
                a: text_alpha,
                ..colors.accent
            },
            border: Border {
                color: colors.divider,
                width: border::WIDTH_SM,
                radius: radius::BUTTON.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_follows_theme_brightness() {
        assert_eq!(DefaultStyle.palette(&Theme::Light), DefaultStyle::light());
        assert_eq!(DefaultStyle.palette(&Theme::Dark), DefaultStyle::dark());
    }

    #[test]
    fn light_palette_uses_brand_tokens() {
        let colors = DefaultStyle::light();
        assert_eq!(colors.background, palette::WHITE);
        assert_eq!(colors.accent, palette::ACCENT_500);
        assert_eq!(colors.divider, palette::DIVIDER);
        assert_eq!(colors.drag_indicator, palette::GRAY_100);
    }

    #[test]
    fn fixed_palette_ignores_theme() {
        let custom = Palette {
            accent: palette::BLACK,
            ..DefaultStyle::light()
        };
        assert_eq!(custom.palette(&Theme::Dark), custom);
    }

    #[test]
    fn card_has_rounded_corners_and_shadow() {
        let style = card(DefaultStyle::light())(&Theme::Light);
        assert_eq!(style.shadow, shadow::CARD);
        assert_eq!(style.border.radius, radius::CARD.into());
        assert!(style.background.is_some());
    }

    #[test]
    fn filled_button_dims_when_pressed() {
        let style = filled_button(DefaultStyle::light());
        let active = style(&Theme::Light, button::Status::Active);
        let pressed = style(&Theme::Light, button::Status::Pressed);

        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(&pressed) < alpha(&active));
        assert_eq!(active.text_color, palette::WHITE);
    }

    #[test]
    fn outlined_button_draws_divider_border() {
        let style = outlined_button(DefaultStyle::light())(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, palette::DIVIDER);
        assert_eq!(style.border.width, border::WIDTH_SM);
        assert_eq!(style.text_color, palette::ACCENT_500);
    }
}
