// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.
//!
//! The view draws what the controller computed: every size comes from the
//! current [`Layout`], and the vertical slide is applied by clipping the
//! banner's top edge off while its offset is negative.

use super::announcement::Announcement;
use super::controller::{BannerController, ButtonMode, Message};
use super::layout::{ButtonFrames, Layout};
use super::style::{self, Palette, StyleProvider};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use iced::widget::text::Wrapping;
use iced::widget::{button, container, image, mouse_area, text, Column, Row, Space};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Renders the banner at its position for `now`, or nothing while hidden.
pub fn view<'a, H>(
    controller: &'a BannerController<H>,
    i18n: &I18n,
    style: &dyn StyleProvider,
    theme: &Theme,
    now: Instant,
) -> Element<'a, Message> {
    let (Some(offset), Some(layout), Some(announcement)) = (
        controller.offset(now),
        controller.layout(),
        controller.announcement(),
    ) else {
        return Space::new().into();
    };

    let colors = style.palette(theme);
    let banner = banner(announcement, layout, controller.mode(), colors, i18n);

    if offset >= 0.0 {
        container(banner)
            .padding(iced::Padding {
                top: offset,
                ..iced::Padding::ZERO
            })
            .into()
    } else {
        container(banner)
            .width(Length::Fill)
            .height(fixed(layout.size.height + offset))
            .align_y(alignment::Vertical::Bottom)
            .clip(true)
            .into()
    }
}

fn banner<'a>(
    announcement: &'a Announcement,
    layout: &Layout,
    mode: ButtonMode,
    colors: Palette,
    i18n: &I18n,
) -> Element<'a, Message> {
    let card = container(card_content(announcement, layout, mode, colors, i18n))
        .width(fixed(layout.background.width))
        .height(Length::Fixed(layout.background.height))
        .style(style::card(colors));

    let indicator = container(
        Space::new()
            .width(Length::Fixed(layout.indicator.width))
            .height(Length::Fixed(layout.indicator.height)),
    )
    .style(style::drag_indicator(colors));

    let touch_strip = container(indicator)
        .width(Length::Fill)
        .height(Length::Fixed(layout.size.height - layout.background.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let body = Column::new()
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(card)
        .push(touch_strip);

    mouse_area(
        container(body)
            .width(Length::Fixed(layout.size.width))
            .height(Length::Fixed(layout.size.height)),
    )
    .on_press(Message::InteractionBegan)
    .on_release(Message::BodyTapped)
    .on_exit(Message::InteractionEnded)
    .into()
}

fn card_content<'a>(
    announcement: &'a Announcement,
    layout: &Layout,
    mode: ButtonMode,
    colors: Palette,
    i18n: &I18n,
) -> Element<'a, Message> {
    let title = text(announcement.title_text())
        .size(typography::BODY)
        .color(colors.title)
        .wrapping(Wrapping::None)
        .width(fixed(layout.title.width));

    let divider = container(
        Space::new()
            .width(fixed(layout.divider.width))
            .height(Length::Fixed(layout.divider.height)),
    )
    .style(style::divider(colors));

    let subtitle = text(announcement.subtitle_text())
        .size(typography::BODY)
        .color(colors.subtitle)
        .width(fixed(layout.subtitle.width));

    let mut row = Row::new().spacing(layout.subtitle.x - layout.image.map_or(0.0, right_edge));
    if let (Some(handle), Some(frame)) = (announcement.image_handle(), layout.image) {
        row = row.push(
            image(handle.clone())
                .width(Length::Fixed(frame.width))
                .height(Length::Fixed(frame.height)),
        );
    }
    let row = row.push(subtitle);
    let row_x = layout.image.map_or(layout.subtitle.x, |frame| frame.x);
    let row_bottom = layout
        .image
        .map_or(bottom(&layout.subtitle), |frame| bottom(&frame).max(bottom(&layout.subtitle)));

    let button_y = match layout.buttons(mode) {
        ButtonFrames::Single { acknowledge } => acknowledge.y,
        ButtonFrames::Double { decline, .. } => decline.y,
    };

    Column::new()
        .push(vertical_gap(layout.title.y))
        .push(indented(title, layout.title.x))
        .push(vertical_gap(layout.divider.y - bottom(&layout.title)))
        .push(divider)
        .push(vertical_gap(layout.subtitle.y - bottom(&layout.divider)))
        .push(
            container(indented(row, row_x))
                .height(Length::Fixed(row_bottom - layout.subtitle.y)),
        )
        .push(vertical_gap(button_y - row_bottom))
        .push(buttons(layout, mode, colors, i18n))
        .into()
}

fn buttons<'a>(
    layout: &Layout,
    mode: ButtonMode,
    colors: Palette,
    i18n: &I18n,
) -> Element<'a, Message> {
    match layout.buttons(mode) {
        ButtonFrames::Single { acknowledge } => indented(
            labeled_button(i18n.tr("shout-button-ok"), acknowledge, Message::Acknowledge)
                .style(style::filled_button(colors)),
            acknowledge.x,
        ),
        ButtonFrames::Double { decline, confirm } => indented(
            Row::new()
                .spacing(confirm.x - right_edge(decline))
                .push(
                    labeled_button(i18n.tr("shout-button-later"), decline, Message::Later)
                        .style(style::outlined_button(colors)),
                )
                .push(
                    labeled_button(i18n.tr("shout-button-confirm"), confirm, Message::Confirm)
                        .style(style::filled_button(colors)),
                ),
            decline.x,
        ),
    }
}

fn labeled_button<'a>(
    label: String,
    frame: iced::Rectangle,
    on_press: Message,
) -> button::Button<'a, Message> {
    button(
        text(label)
            .size(typography::BODY)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(fixed(frame.width))
    .height(fixed(frame.height))
    .padding(0)
    .on_press(on_press)
}

fn indented<'a>(content: impl Into<Element<'a, Message>>, left: f32) -> Element<'a, Message> {
    Row::new()
        .push(Space::new().width(fixed(left)))
        .push(content)
        .into()
}

fn vertical_gap(height: f32) -> Space {
    Space::new().height(fixed(height))
}

/// Layout frames may be degenerate on very narrow viewports.
fn fixed(size: f32) -> Length {
    Length::Fixed(size.max(0.0))
}

fn bottom(frame: &iced::Rectangle) -> f32 {
    frame.y + frame.height
}

fn right_edge(frame: iced::Rectangle) -> f32 {
    frame.x + frame.width
}
