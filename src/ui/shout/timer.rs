// SPDX-License-Identifier: MPL-2.0
//! Single-slot auto-dismiss countdown.
//!
//! The timer holds at most one armed deadline. Every [`PresentationTimer::start`]
//! issues a fresh [`TimerToken`]; a firing that carries any older token belongs
//! to a previous announcement and is rejected.
//!
//! A duration too long to be represented as an `Instant` arms a countdown
//! that never expires on its own; it can still be claimed or cancelled.

use std::time::{Duration, Instant};

/// Identifies one armed countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    token: TimerToken,
    /// `None` when the deadline lies beyond what `Instant` can represent.
    deadline: Option<Instant>,
}

impl Armed {
    fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

/// One-shot countdown with stale-fire protection.
#[derive(Debug, Default)]
pub struct PresentationTimer {
    generation: u64,
    armed: Option<Armed>,
}

impl PresentationTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any armed countdown and arms a new one expiring `duration`
    /// after `now`.
    pub fn start(&mut self, duration: Duration, now: Instant) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.armed = Some(Armed {
            token,
            deadline: now.checked_add(duration),
        });
        token
    }

    /// Disarms the countdown. Safe to call when nothing is armed.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Returns the armed token once its deadline has passed, disarming it.
    pub fn poll(&mut self, now: Instant) -> Option<TimerToken> {
        let armed = self.armed.filter(|armed| armed.is_due(now))?;
        self.armed = None;
        Some(armed.token)
    }

    /// Accepts an externally delivered firing for `token`.
    ///
    /// Returns `false` (and changes nothing) when `token` is not the armed one.
    pub fn claim(&mut self, token: TimerToken) -> bool {
        if self.armed.is_some_and(|armed| armed.token == token) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Time left before the armed deadline, if any. A countdown that never
    /// expires reports `Duration::MAX`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.armed.map(|armed| {
            armed
                .deadline
                .map_or(Duration::MAX, |deadline| deadline.saturating_duration_since(now))
        })
    }
}
