// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::shout::{BannerController, HostSurface};
use iced::{event, window, Subscription};

/// Tracks the window size so the stage always knows its width.
pub fn create_resize_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Banner ticks and orientation changes, present only while a banner is attached.
pub fn create_banner_subscription<H: HostSurface>(
    banner: &BannerController<H>,
) -> Subscription<Message> {
    banner.subscription().map(Message::Shout)
}
