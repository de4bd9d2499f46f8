// SPDX-License-Identifier: MPL-2.0
//! Transient notification banner ("shout").
//!
//! A shout slides down over the host's current screen, stays for the
//! announcement's duration and slides back up. It offers either a single
//! "OK" control or a "Later"/"Confirm" pair, runs an optional action when its
//! body is tapped, and holds off auto-dismissal while it is being touched.
//!
//! # Components
//!
//! - [`announcement`] - Immutable banner content and timing
//! - [`timer`] - Single-slot auto-dismiss countdown with stale-fire tokens
//! - [`layout`] - Pure geometry of every banner sub-element
//! - [`animation`] - Eased slide in/out
//! - [`host`] - The surface a banner attaches to
//! - [`controller`] - The presentation state machine
//! - [`style`] - Banner palette and widget styles
//! - [`view`] - Rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_shout::ui::shout::{Announcement, BannerController, DefaultStyle};
//!
//! let mut banner = BannerController::new();
//! banner.present(Announcement::new("Saved"), host, None, Instant::now());
//!
//! // subscription: banner.subscription().map(Message::Shout)
//! // update:       banner.update(message, Instant::now())
//! // view:         shout::view(&banner, &i18n, &DefaultStyle, &theme, Instant::now())
//! ```

pub mod animation;
pub mod announcement;
pub mod controller;
pub mod host;
pub mod layout;
pub mod style;
pub mod timer;
mod view;

pub use animation::{Direction, Easing, Slide};
pub use announcement::{Action, Announcement};
pub use controller::{BannerController, BannerState, ButtonMode, Completion, Message};
pub use host::HostSurface;
pub use layout::{compute, ButtonFrames, ContentSizes, Layout, Metrics};
pub use style::{DefaultStyle, Palette, StyleProvider};
pub use timer::{PresentationTimer, TimerToken};
pub use view::view;
