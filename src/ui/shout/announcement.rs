// SPDX-License-Identifier: MPL-2.0
//! Banner content and timing.
//!
//! An [`Announcement`] is built by the host and handed to
//! [`BannerController::present`](super::BannerController::present); the
//! controller only ever reads it.

use crate::config::DEFAULT_DURATION_SECS;
use iced::widget::image::Handle;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Callback invoked when the banner body is tapped.
pub type Action = Rc<dyn Fn()>;

/// Immutable description of one banner.
#[derive(Clone)]
pub struct Announcement {
    title: String,
    subtitle: String,
    image: Option<Handle>,
    duration: Duration,
    action: Option<Action>,
}

impl Announcement {
    /// Creates an announcement with the given title and the default duration.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            image: None,
            duration: Duration::from_secs_f64(DEFAULT_DURATION_SECS),
            action: None,
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Sets the round image shown left of the subtitle.
    #[must_use]
    pub fn image(mut self, image: Handle) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets how long the banner stays up before dismissing itself.
    ///
    /// A zero duration dismisses on the first tick after presentation.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the callback invoked when the banner body is tapped.
    #[must_use]
    pub fn action(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle_text(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn image_handle(&self) -> Option<&Handle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Returns a handle to the tap action, detached from `self`.
    pub(crate) fn action_handle(&self) -> Option<Action> {
        self.action.clone()
    }
}

impl fmt::Debug for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcement")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("has_image", &self.image.is_some())
            .field("duration", &self.duration)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
