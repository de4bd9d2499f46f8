// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a shout banner over a placeholder screen.
//!
//! The `App` struct wires together localization, the loaded configuration and
//! one [`BannerController`] attached to a [`Stage`]. Two buttons present a
//! single-button and a two-button banner; a config file that fails to load is
//! reported through a banner at startup.

mod message;
mod stage;
mod subscription;

pub use message::{Flags, Message};
pub use stage::Stage;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::shout::{self, Announcement, BannerController, DefaultStyle};
use iced::widget::{button, container, text, Column, Stack};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 280;

/// What the user last did with a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Outcome {
    #[default]
    Idle,
    Tapped,
    Confirmed,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    stage: Stage,
    banner: BannerController<Stage>,
    /// Written by banner callbacks, read by the view.
    outcome: Rc<Cell<Outcome>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banner", &self.banner)
            .field("outcome", &self.outcome.get())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), Config::default())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn with_config(i18n: I18n, config: Config) -> Self {
        Self {
            i18n,
            banner: BannerController::from_config(&config),
            config,
            stage: Stage::new(WINDOW_DEFAULT_WIDTH as f32),
            outcome: Rc::new(Cell::new(Outcome::Idle)),
        }
    }

    /// Loads configuration and localization, then surfaces any config
    /// warning as a banner.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::with_config(i18n, config);

        if let Some(key) = config_warning {
            let announcement = Announcement::new(app.i18n.tr(&key))
                .duration(app.config.banner.default_duration());
            app.banner
                .present(announcement, app.stage.clone(), None, Instant::now());
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_resize_subscription(),
            subscription::create_banner_subscription(&self.banner),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Shout(message) => {
                if let shout::Message::OrientationChanged(size) = &message {
                    self.stage.set_width(size.width);
                }
                self.banner.update(message, now);
            }
            Message::PresentSingle => {
                let outcome = Rc::clone(&self.outcome);
                let announcement = Announcement::new(self.i18n.tr("demo-announcement-title"))
                    .subtitle(self.i18n.tr("demo-announcement-subtitle"))
                    .duration(self.config.banner.default_duration())
                    .action(move || outcome.set(Outcome::Tapped));
                self.banner
                    .present(announcement, self.stage.clone(), None, now);
            }
            Message::PresentDouble => {
                let outcome = Rc::clone(&self.outcome);
                let announcement = Announcement::new(self.i18n.tr("demo-confirm-title"))
                    .subtitle(self.i18n.tr("demo-confirm-subtitle"))
                    .duration(self.config.banner.default_duration());
                self.banner.present(
                    announcement,
                    self.stage.clone(),
                    Some(Box::new(move || outcome.set(Outcome::Confirmed))),
                    now,
                );
            }
            Message::WindowResized(size) => self.stage.set_width(size.width),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let status_key = match self.outcome.get() {
            Outcome::Idle => "demo-status-idle",
            Outcome::Tapped => "demo-status-action",
            Outcome::Confirmed => "demo-status-confirmed",
        };

        let screen = container(
            Column::new()
                .spacing(typography::BODY)
                .align_x(alignment::Horizontal::Center)
                .push(text(self.i18n.tr("demo-screen-placeholder")).size(typography::BODY))
                .push(
                    button(text(self.i18n.tr("demo-present-single")))
                        .on_press(Message::PresentSingle),
                )
                .push(
                    button(text(self.i18n.tr("demo-present-double")))
                        .on_press(Message::PresentDouble),
                )
                .push(text(self.i18n.tr(status_key)).size(typography::BODY)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        let banner = shout::view(
            &self.banner,
            &self.i18n,
            &DefaultStyle,
            &self.theme(),
            Instant::now(),
        )
        .map(Message::Shout);

        Stack::new().push(screen).push(banner).into()
    }
}
