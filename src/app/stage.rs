// SPDX-License-Identifier: MPL-2.0
//! The demo's host surface.
//!
//! A `Stage` is a cheap shared handle: the app keeps one copy to feed it
//! window sizes, and hands another to the banner controller on every
//! presentation.

use crate::ui::shout::HostSurface;
use iced::Rectangle;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct StageState {
    width: f32,
    banner: Option<Rectangle>,
    attach_count: usize,
}

/// Shared handle to the screen banners are shown on.
#[derive(Debug, Clone, Default)]
pub struct Stage(Rc<RefCell<StageState>>);

impl Stage {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self(Rc::new(RefCell::new(StageState {
            width,
            ..StageState::default()
        })))
    }

    pub fn set_width(&self, width: f32) {
        self.0.borrow_mut().width = width;
    }

    /// Frame the banner was attached at, while one is attached.
    #[must_use]
    pub fn banner_frame(&self) -> Option<Rectangle> {
        self.0.borrow().banner
    }

    /// Number of banners attached so far.
    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.0.borrow().attach_count
    }
}

impl HostSurface for Stage {
    fn attach(&mut self, frame: Rectangle) {
        let mut state = self.0.borrow_mut();
        state.banner = Some(frame);
        state.attach_count += 1;
    }

    fn detach(&mut self) {
        self.0.borrow_mut().banner = None;
    }

    fn viewport_width(&self) -> f32 {
        self.0.borrow().width
    }
}
