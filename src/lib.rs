// SPDX-License-Identifier: MPL-2.0
//! `iced_shout` is a transient notification banner for the Iced GUI framework.
//!
//! A host screen presents an [`Announcement`](ui::shout::Announcement) through
//! a [`BannerController`](ui::shout::BannerController); the banner slides in,
//! dismisses itself after a delay unless held, and reports taps and button
//! choices through callbacks. The crate also ships a small demo application.

#![doc(html_root_url = "https://docs.rs/iced_shout/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
