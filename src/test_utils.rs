// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Banner geometry is all `f32`, so layout and animation tests compare with
//! the `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Epsilon for `f32` values that should match up to rounding.
pub const F32_EPSILON: f32 = 1e-6;

