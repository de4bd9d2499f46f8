// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::shout;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded banner message.
    Shout(shout::Message),
    /// Present a single-button banner.
    PresentSingle,
    /// Present a banner with a "Later"/"Confirm" pair.
    PresentDouble,
    /// The window was resized, whether or not a banner is up.
    WindowResized(Size),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Directory holding `settings.toml`, overriding the platform default.
    pub config_dir: Option<PathBuf>,
}
