// SPDX-License-Identifier: MPL-2.0
//! Banner geometry.
//!
//! [`compute`] is a pure function of the viewport width, the fixed
//! [`Metrics`] and the measured [`ContentSizes`]. It runs again whenever the
//! viewport width changes (rotation, window resize) or a new announcement is
//! presented.
//!
//! Two coordinate spaces are used:
//! - banner space: origin at the top-left of the full-width banner
//!   (`background`, `indicator`)
//! - card space: origin at the top-left of the card (`background`), for
//!   everything drawn inside it (labels, divider, image, buttons)
//!
//! Widths are not clamped: below [`Metrics::min_viewport_width`] some frames
//! come out with negative widths, and the renderer draws those at zero.

use super::announcement::Announcement;
use super::ButtonMode;
use crate::config::{
    DEFAULT_MARGIN, DEFAULT_TEXT_OFFSET, DEFAULT_TOUCH_OFFSET, IMAGE_OFFSET, IMAGE_SIZE,
    INDICATOR_HEIGHT, INDICATOR_WIDTH,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{Rectangle, Size};

/// Fixed dimensions the layout is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub indicator_height: f32,
    pub indicator_width: f32,
    pub image_size: f32,
    pub image_offset: f32,
    pub text_offset: f32,
    /// Height of the touch affordance strip below the card.
    pub touch_offset: f32,
    pub margin: f32,
}

impl Metrics {
    /// Narrowest viewport whose button pair still has a non-negative width.
    #[must_use]
    pub fn min_viewport_width(&self) -> f32 {
        2.0 * self.margin + 3.0 * self.text_offset
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            indicator_height: INDICATOR_HEIGHT,
            indicator_width: INDICATOR_WIDTH,
            image_size: IMAGE_SIZE,
            image_offset: IMAGE_OFFSET,
            text_offset: DEFAULT_TEXT_OFFSET,
            touch_offset: DEFAULT_TOUCH_OFFSET,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Measured content heights. Independent of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentSizes {
    pub title_height: f32,
    pub subtitle_height: f32,
    pub has_image: bool,
}

impl ContentSizes {
    /// Measures an announcement from its line counts.
    ///
    /// The title is a single truncated line; the subtitle takes one line per
    /// explicit line break, up to two.
    #[must_use]
    pub fn measure(announcement: &Announcement) -> Self {
        let line_height = typography::BODY * typography::LINE_HEIGHT;
        let lines = |text: &str, max: usize| text.lines().count().min(max) as f32;

        Self {
            title_height: lines(announcement.title_text(), typography::TITLE_MAX_LINES)
                * line_height,
            subtitle_height: lines(announcement.subtitle_text(), typography::SUBTITLE_MAX_LINES)
                * line_height,
            has_image: announcement.image_handle().is_some(),
        }
    }
}

/// Frames of the visible button(s) for one [`ButtonMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonFrames {
    Single { acknowledge: Rectangle },
    Double { decline: Rectangle, confirm: Rectangle },
}

/// Geometry of every banner sub-element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Full banner size, touch strip included.
    pub size: Size,
    /// Card frame in banner space.
    pub background: Rectangle,
    /// Drag indicator frame in banner space.
    pub indicator: Rectangle,
    pub title: Rectangle,
    pub divider: Rectangle,
    pub subtitle: Rectangle,
    pub image: Option<Rectangle>,
    /// The single full-width "OK" button.
    pub acknowledge: Rectangle,
    /// The "Later" half of the button pair.
    pub decline: Rectangle,
    /// The "Confirm" half of the button pair.
    pub confirm: Rectangle,
}

impl Layout {
    /// Returns the button frames visible in `mode`.
    #[must_use]
    pub fn buttons(&self, mode: ButtonMode) -> ButtonFrames {
        match mode {
            ButtonMode::Single => ButtonFrames::Single {
                acknowledge: self.acknowledge,
            },
            ButtonMode::Double => ButtonFrames::Double {
                decline: self.decline,
                confirm: self.confirm,
            },
        }
    }

    /// Banner frame in host space when its top edge sits at `y`.
    #[must_use]
    pub fn frame_at(&self, y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

/// Computes the banner geometry for a viewport `viewport_width` wide.
#[must_use]
pub fn compute(viewport_width: f32, metrics: &Metrics, content: &ContentSizes) -> Layout {
    let width = viewport_width.max(0.0);
    let text_offset = metrics.text_offset;
    let card_width = width - 2.0 * metrics.margin;
    let label_width = card_width - 2.0 * text_offset;

    let title = Rectangle {
        x: text_offset,
        y: spacing::TITLE_TOP,
        width: label_width,
        height: content.title_height,
    };

    let divider = Rectangle {
        x: 0.0,
        y: max_y(&title) + spacing::DIVIDER_GAP,
        width: card_width,
        height: sizing::DIVIDER_HEIGHT,
    };

    let row_y = max_y(&divider) + spacing::SUBTITLE_GAP;
    let (image, subtitle, row_height) = if content.has_image {
        let image = Rectangle {
            x: metrics.image_offset,
            y: row_y,
            width: metrics.image_size,
            height: metrics.image_size,
        };
        let subtitle_x = metrics.image_offset + metrics.image_size + text_offset;
        let subtitle = Rectangle {
            x: subtitle_x,
            y: row_y,
            width: card_width - subtitle_x - text_offset,
            height: content.subtitle_height,
        };
        (
            Some(image),
            subtitle,
            content.subtitle_height.max(metrics.image_size),
        )
    } else {
        let subtitle = Rectangle {
            x: text_offset,
            y: row_y,
            width: label_width,
            height: content.subtitle_height,
        };
        (None, subtitle, content.subtitle_height)
    };

    let button_y = row_y + row_height + spacing::BUTTON_GAP;
    let half_width = (card_width - 3.0 * text_offset) / 2.0;
    let decline = Rectangle {
        x: text_offset,
        y: button_y,
        width: half_width,
        height: sizing::BUTTON_HEIGHT,
    };
    let confirm = Rectangle {
        x: decline.x + decline.width + text_offset,
        ..decline
    };
    let acknowledge = Rectangle {
        width: label_width,
        ..decline
    };

    let card_height = button_y + sizing::BUTTON_HEIGHT + spacing::BUTTON_GAP;
    let background = Rectangle {
        x: metrics.margin,
        y: 0.0,
        width: card_width,
        height: card_height,
    };
    let indicator = Rectangle {
        x: (width - metrics.indicator_width) / 2.0,
        y: card_height + (metrics.touch_offset - metrics.indicator_height).max(0.0) / 2.0,
        width: metrics.indicator_width,
        height: metrics.indicator_height,
    };

    Layout {
        size: Size::new(width, card_height + metrics.touch_offset),
        background,
        indicator,
        title,
        divider,
        subtitle,
        image,
        acknowledge,
        decline,
        confirm,
    }
}

fn max_y(rect: &Rectangle) -> f32 {
    rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::widget::image::Handle;

    fn content() -> ContentSizes {
        ContentSizes {
            title_height: 18.0,
            subtitle_height: 36.0,
            has_image: false,
        }
    }

    #[test]
    fn button_width_depends_on_viewport_width() {
        let metrics = Metrics::default();
        let portrait = compute(375.0, &metrics, &content());
        let landscape = compute(667.0, &metrics, &content());

        assert_ne!(portrait.decline.width, landscape.decline.width);
        assert_ne!(portrait.acknowledge.width, landscape.acknowledge.width);
        assert_ne!(portrait, landscape);
    }

    #[test]
    fn banner_height_is_independent_of_width() {
        let metrics = Metrics::default();
        let portrait = compute(375.0, &metrics, &content());
        let landscape = compute(667.0, &metrics, &content());

        assert_abs_diff_eq!(
            portrait.size.height,
            landscape.size.height,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn vertical_stack_follows_metrics() {
        let metrics = Metrics::default();
        let layout = compute(375.0, &metrics, &content());

        // 9 + 18 title, 9 gap, 0.5 divider, 8 gap, 36 subtitle, 16 gap
        let button_y = 9.0 + 18.0 + 9.0 + 0.5 + 8.0 + 36.0 + 16.0;
        assert_abs_diff_eq!(layout.decline.y, button_y, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            layout.background.height,
            button_y + sizing::BUTTON_HEIGHT + spacing::BUTTON_GAP,
            epsilon = F32_EPSILON
        );
        assert_abs_diff_eq!(
            layout.size.height,
            layout.background.height + metrics.touch_offset,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn double_buttons_split_the_card_with_a_gap() {
        let metrics = Metrics::default();
        let layout = compute(375.0, &metrics, &content());

        let expected = (375.0 - 2.0 * metrics.margin - 3.0 * metrics.text_offset) / 2.0;
        assert_abs_diff_eq!(layout.decline.width, expected, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(layout.confirm.width, expected, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            layout.confirm.x - (layout.decline.x + layout.decline.width),
            metrics.text_offset,
            epsilon = F32_EPSILON
        );
        // Right inset mirrors the left one.
        assert_abs_diff_eq!(
            layout.background.width - (layout.confirm.x + layout.confirm.width),
            metrics.text_offset,
            epsilon = 1e-3
        );
    }

    #[test]
    fn single_button_spans_the_label_width() {
        let metrics = Metrics::default();
        let layout = compute(375.0, &metrics, &content());
        assert_eq!(layout.acknowledge.width, layout.title.width);
        assert_eq!(layout.acknowledge.x, metrics.text_offset);
    }

    #[test]
    fn buttons_follow_mode() {
        let layout = compute(375.0, &Metrics::default(), &content());
        assert!(matches!(
            layout.buttons(ButtonMode::Single),
            ButtonFrames::Single { .. }
        ));
        assert!(matches!(
            layout.buttons(ButtonMode::Double),
            ButtonFrames::Double { .. }
        ));
    }

    #[test]
    fn image_shifts_subtitle_and_grows_row() {
        let metrics = Metrics::default();
        let with_image = ContentSizes {
            has_image: true,
            ..content()
        };
        let plain = compute(375.0, &metrics, &content());
        let layout = compute(375.0, &metrics, &with_image);

        let image = layout.image.expect("image frame");
        assert_eq!(image.width, metrics.image_size);
        assert!(layout.subtitle.x > image.x + image.width);
        // 48 image row instead of a 36 subtitle row
        assert_abs_diff_eq!(
            layout.size.height - plain.size.height,
            metrics.image_size - 36.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn indicator_is_centered_in_touch_strip() {
        let metrics = Metrics::default();
        let layout = compute(375.0, &metrics, &content());
        assert_abs_diff_eq!(
            layout.indicator.x * 2.0 + layout.indicator.width,
            375.0,
            epsilon = F32_EPSILON
        );
        assert!(layout.indicator.y > layout.background.height);
        assert!(layout.indicator.y + layout.indicator.height < layout.size.height);
    }

    #[test]
    fn narrow_viewports_still_change_button_width() {
        let metrics = Metrics::default();
        let narrower = compute(60.0, &metrics, &content());
        let narrow = compute(70.0, &metrics, &content());

        assert!(60.0 < metrics.min_viewport_width());
        assert_ne!(narrower.decline.width, narrow.decline.width);
        assert_ne!(narrower.acknowledge.width, narrow.acknowledge.width);
        assert_eq!(narrower.size.height, narrow.size.height);
    }

    #[test]
    fn min_viewport_width_yields_zero_width_buttons() {
        let metrics = Metrics::default();
        let layout = compute(metrics.min_viewport_width(), &metrics, &content());
        assert_abs_diff_eq!(layout.decline.width, 0.0, epsilon = F32_EPSILON);
        assert!(layout.acknowledge.width > 0.0);
    }

    #[test]
    fn measure_counts_lines() {
        let announcement = Announcement::new("Title").subtitle("one\ntwo\nthree");
        let sizes = ContentSizes::measure(&announcement);
        let line = typography::BODY * typography::LINE_HEIGHT;
        assert_abs_diff_eq!(sizes.title_height, line, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(sizes.subtitle_height, 2.0 * line, epsilon = F32_EPSILON);
        assert!(!sizes.has_image);

        let empty = ContentSizes::measure(&Announcement::new("Title"));
        assert_eq!(empty.subtitle_height, 0.0);

        let with_image = Announcement::new("Title").image(Handle::from_rgba(1, 1, vec![0; 4]));
        assert!(ContentSizes::measure(&with_image).has_image);
    }

    #[test]
    fn frame_at_places_banner_full_width() {
        let layout = compute(375.0, &Metrics::default(), &content());
        let frame = layout.frame_at(-layout.size.height);
        assert_eq!(frame.x, 0.0);
        assert_eq!(frame.width, 375.0);
        assert_eq!(frame.y + frame.height, 0.0);
    }
}
