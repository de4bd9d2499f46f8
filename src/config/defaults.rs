// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display duration and slide animation length
//! - **Metrics**: Fixed banner dimensions and the overridable offsets

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a banner stays on screen before auto-dismiss (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 2.0;

/// Minimum configurable display duration (in seconds).
pub const MIN_DURATION_SECS: f64 = 0.5;

/// Maximum configurable display duration (in seconds).
pub const MAX_DURATION_SECS: f64 = 60.0;

/// Default length of the slide in/out animation (in milliseconds).
pub const DEFAULT_ANIMATION_MILLIS: u64 = 350;

/// Maximum slide animation length (in milliseconds). Zero disables motion.
pub const MAX_ANIMATION_MILLIS: u64 = 2000;

/// Interval between animation/timer ticks while a banner is attached.
pub const TICK_INTERVAL_MILLIS: u64 = 16;

// ==========================================================================
// Metrics Defaults
// ==========================================================================

/// Height of the drag indicator drawn in the touch strip.
pub const INDICATOR_HEIGHT: f32 = 6.0;

/// Width of the drag indicator drawn in the touch strip.
pub const INDICATOR_WIDTH: f32 = 50.0;

/// Side length of the round announcement image.
pub const IMAGE_SIZE: f32 = 48.0;

/// Horizontal offset of the announcement image.
pub const IMAGE_OFFSET: f32 = 18.0;

/// Default horizontal inset of labels and buttons.
pub const DEFAULT_TEXT_OFFSET: f32 = 18.0;

/// Default height of the touch affordance strip below the card.
pub const DEFAULT_TOUCH_OFFSET: f32 = 40.0;

/// Default outer margin between the card and the viewport edges.
pub const DEFAULT_MARGIN: f32 = 12.0;

/// Upper bound for any configurable offset or margin.
pub const MAX_METRIC: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_SECS > 0.0);
    assert!(MAX_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);

    assert!(DEFAULT_ANIMATION_MILLIS <= MAX_ANIMATION_MILLIS);
    assert!(TICK_INTERVAL_MILLIS > 0);

    assert!(INDICATOR_HEIGHT <= DEFAULT_TOUCH_OFFSET);
    assert!(DEFAULT_TEXT_OFFSET <= MAX_METRIC);
    assert!(DEFAULT_TOUCH_OFFSET <= MAX_METRIC);
    assert!(DEFAULT_MARGIN <= MAX_METRIC);
};
