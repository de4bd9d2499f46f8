// SPDX-License-Identifier: MPL-2.0
//! Vertical slide animation for the banner.
//!
//! A [`Slide`] interpolates the banner's y offset between two positions. It
//! does not own a clock: the controller samples it with the `Instant` of each
//! frame tick and finishes the transition once [`Slide::is_complete`] reports
//! true.

use std::time::{Duration, Instant};

/// Easing curve applied to slide progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Accelerating.
    EaseIn,
    /// Decelerating.
    EaseOut,
    /// Smooth S-curve.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Applies the curve to a progress value in `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Direction of a slide, used to tell presentation from dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

/// An in-flight slide between two y offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    direction: Direction,
    from_y: f32,
    to_y: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Slide {
    #[must_use]
    pub fn new(
        direction: Direction,
        from_y: f32,
        to_y: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) -> Self {
        Self {
            direction,
            from_y,
            to_y,
            started_at: now,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Linear progress in `0.0..=1.0`. Zero-length slides are always complete.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased y offset at `now`.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from_y + (self.to_y - self.from_y) * eased
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
