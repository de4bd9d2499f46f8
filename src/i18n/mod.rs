// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Banner controls ("OK", "Later", "Confirm") and the demo host's strings are
//! looked up through Fluent bundles embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to the default locale when a key is missing in the current one

pub mod fluent;
