// SPDX-License-Identifier: MPL-2.0
//! The surface a banner is presented on.
//!
//! The controller never reaches into a concrete view tree: whatever screen
//! presents a banner hands over a [`HostSurface`], which the controller keeps
//! for as long as the banner is attached and releases after detaching.

use iced::Rectangle;
use std::cell::RefCell;
use std::rc::Rc;

/// Capability a host screen grants to a presented banner.
pub trait HostSurface {
    /// Adds the banner to the surface at `frame` (host coordinates).
    fn attach(&mut self, frame: Rectangle);

    /// Removes the banner from the surface.
    fn detach(&mut self);

    /// Current width of the visible area.
    fn viewport_width(&self) -> f32;

    /// Height of any system chrome (status bar, notch) the banner must rest below.
    fn top_inset(&self) -> f32 {
        0.0
    }
}

impl<H: HostSurface + ?Sized> HostSurface for Rc<RefCell<H>> {
    fn attach(&mut self, frame: Rectangle) {
        self.borrow_mut().attach(frame);
    }

    fn detach(&mut self) {
        self.borrow_mut().detach();
    }

    fn viewport_width(&self) -> f32 {
        self.borrow().viewport_width()
    }

    fn top_inset(&self) -> f32 {
        self.borrow().top_inset()
    }
}

impl<H: HostSurface + ?Sized> HostSurface for Box<H> {
    fn attach(&mut self, frame: Rectangle) {
        (**self).attach(frame);
    }

    fn detach(&mut self) {
        (**self).detach();
    }

    fn viewport_width(&self) -> f32 {
        (**self).viewport_width()
    }

    fn top_inset(&self) -> f32 {
        (**self).top_inset()
    }
}
