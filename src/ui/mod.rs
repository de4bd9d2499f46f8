// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`shout`] - Transient notification banner
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod shout;
