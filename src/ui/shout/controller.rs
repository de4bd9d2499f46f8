// SPDX-License-Identifier: MPL-2.0
//! Banner presentation lifecycle.
//!
//! The [`BannerController`] owns the current announcement, the button mode,
//! the auto-dismiss timer and the touch state, and turns host calls, user
//! interaction and frame ticks into show/dismiss transitions:
//!
//! ```text
//!            present                 dismiss / timer / tap / controls
//!  Hidden ───────────▶ Showing ─────────────────────────────────────▶ Dismissing
//!                       │   ▲                                             │
//!   interaction begin   ▼   │ interaction end (nothing pending)           │ slide-out
//!                     Suspended ──────────────────────────────────────────┤ complete
//!                         interaction end (timer already fired)           ▼
//!                                                                       Hidden
//! ```
//!
//! Nothing here blocks: `present` and `dismiss` only start a [`Slide`]; the
//! host drives it forward by forwarding [`Message::Tick`] (see
//! [`BannerController::subscription`]).

use super::animation::{Direction, Easing, Slide};
use super::announcement::Announcement;
use super::host::HostSurface;
use super::layout::{self, ContentSizes, Layout, Metrics};
use super::timer::{PresentationTimer, TimerToken};
use crate::config::{Config, DEFAULT_ANIMATION_MILLIS, TICK_INTERVAL_MILLIS};
use iced::{event, time, window, Size, Subscription};
use std::fmt;
use std::time::{Duration, Instant};

/// Callback run when the user confirms a Double-mode banner.
pub type Completion = Box<dyn FnOnce()>;

/// Which controls the banner shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonMode {
    /// A single "OK" control that only dismisses.
    #[default]
    Single,
    /// "Later" (dismiss) and "Confirm" (run the completion, then dismiss).
    Double,
}

impl ButtonMode {
    /// Double iff a completion was supplied.
    #[must_use]
    pub fn from_completion(has_completion: bool) -> Self {
        if has_completion {
            ButtonMode::Double
        } else {
            ButtonMode::Single
        }
    }
}

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    Showing,
    /// Showing while a touch holds the banner; auto-dismiss is deferred.
    Suspended,
    Dismissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Shown,
    Dismissing,
}

/// Messages the banner reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick driving animations and the auto-dismiss timer.
    Tick(Instant),
    /// Externally scheduled timer firing.
    TimerFired(TimerToken),
    /// The banner body was tapped (press and release inside it).
    BodyTapped,
    /// A touch started on the banner.
    InteractionBegan,
    /// A touch left the banner without tapping it.
    InteractionEnded,
    /// The Single-mode "OK" control.
    Acknowledge,
    /// The Double-mode "Later" control.
    Later,
    /// The Double-mode "Confirm" control.
    Confirm,
    /// The host viewport was resized or rotated; carries the new size.
    OrientationChanged(Size),
}

/// State machine behind one host screen's banner.
pub struct BannerController<H> {
    metrics: Metrics,
    animation: Duration,
    easing: Easing,
    announcement: Option<Announcement>,
    content: ContentSizes,
    mode: ButtonMode,
    completion: Option<Completion>,
    is_suspended: bool,
    pending_dismiss: bool,
    timer: PresentationTimer,
    phase: Phase,
    slide: Option<Slide>,
    resting_y: f32,
    layout: Option<Layout>,
    host: Option<H>,
}

impl<H> Default for BannerController<H> {
    fn default() -> Self {
        Self {
            metrics: Metrics::default(),
            animation: Duration::from_millis(DEFAULT_ANIMATION_MILLIS),
            easing: Easing::default(),
            announcement: None,
            content: ContentSizes::default(),
            mode: ButtonMode::default(),
            completion: None,
            is_suspended: false,
            pending_dismiss: false,
            timer: PresentationTimer::new(),
            phase: Phase::Hidden,
            slide: None,
            resting_y: 0.0,
            layout: None,
            host: None,
        }
    }
}

impl<H> fmt::Debug for BannerController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerController")
            .field("state", &self.state())
            .field("mode", &self.mode)
            .field("announcement", &self.announcement)
            .field("pending_dismiss", &self.pending_dismiss)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl<H> BannerController<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller using the metrics and animation length from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_metrics(config.metrics.to_metrics())
            .with_animation(config.banner.animation())
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the slide in/out length. Zero disables motion.
    #[must_use]
    pub fn with_animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        match self.phase {
            Phase::Hidden => BannerState::Hidden,
            Phase::Dismissing => BannerState::Dismissing,
            Phase::Shown if self.is_suspended => BannerState::Suspended,
            Phase::Shown => BannerState::Showing,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ButtonMode {
        self.mode
    }

    /// The announcement being shown. Cleared once the slide-out completes.
    #[must_use]
    pub fn announcement(&self) -> Option<&Announcement> {
        self.announcement.as_ref()
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.is_suspended
    }

    #[must_use]
    pub fn pending_dismiss(&self) -> bool {
        self.pending_dismiss
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    #[must_use]
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Time left before auto-dismiss, if the timer is armed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// The banner's top edge in host coordinates at `now`, or `None` while hidden.
    #[must_use]
    pub fn offset(&self, now: Instant) -> Option<f32> {
        if self.phase == Phase::Hidden {
            return None;
        }
        Some(self.slide.map_or(self.resting_y, |slide| slide.offset(now)))
    }

    /// Ticks and resize events, granted only while the banner is attached.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.host.is_none() {
            return Subscription::none();
        }

        Subscription::batch([
            time::every(Duration::from_millis(TICK_INTERVAL_MILLIS)).map(Message::Tick),
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Window(window::Event::Resized(size)) => {
                    Some(Message::OrientationChanged(size))
                }
                _ => None,
            }),
        ])
    }
}

impl<H: HostSurface> BannerController<H> {
    /// Shows `announcement` on `host`.
    ///
    /// Any banner still on screen is replaced: its host is detached, its timer
    /// is cancelled and its callbacks are dropped unused. A completion puts
    /// the banner in [`ButtonMode::Double`].
    ///
    /// Returns the token of the new auto-dismiss countdown, for hosts that
    /// schedule [`Message::TimerFired`] themselves instead of ticking.
    pub fn present(
        &mut self,
        announcement: Announcement,
        mut host: H,
        completion: Option<Completion>,
        now: Instant,
    ) -> TimerToken {
        self.is_suspended = false;
        self.pending_dismiss = false;
        self.mode = ButtonMode::from_completion(completion.is_some());
        self.completion = completion;

        self.content = ContentSizes::measure(&announcement);
        let layout = layout::compute(host.viewport_width(), &self.metrics, &self.content);

        if let Some(mut previous) = self.host.take() {
            previous.detach();
        }

        let hidden_y = -layout.size.height;
        host.attach(layout.frame_at(hidden_y));
        self.resting_y = host.top_inset();
        self.slide = Some(Slide::new(
            Direction::In,
            hidden_y,
            self.resting_y,
            self.animation,
            self.easing,
            now,
        ));
        self.host = Some(host);
        self.layout = Some(layout);
        self.phase = Phase::Shown;

        let token = self.timer.start(announcement.display_duration(), now);
        tracing::debug!(
            title = announcement.title_text(),
            mode = ?self.mode,
            duration = ?announcement.display_duration(),
            "presenting banner"
        );
        self.announcement = Some(announcement);
        token
    }

    /// Slides the banner out; it is detached once the slide completes.
    ///
    /// No-op while hidden or already dismissing.
    pub fn dismiss(&mut self, now: Instant) {
        if self.phase != Phase::Shown {
            return;
        }
        let Some(height) = self.layout.map(|layout| layout.size.height) else {
            return;
        };

        let from = self.offset(now).unwrap_or(self.resting_y);
        self.slide = Some(Slide::new(
            Direction::Out,
            from,
            -height,
            self.animation,
            self.easing,
            now,
        ));
        self.phase = Phase::Dismissing;
        tracing::debug!("dismissing banner");
    }

    /// The "Confirm" control: runs the completion, then dismisses.
    ///
    /// The completion is consumed, so repeated calls never run it twice.
    pub fn confirm(&mut self, now: Instant) {
        if let Some(completion) = self.completion.take() {
            completion();
        }
        self.dismiss(now);
    }

    /// The "Later" control. Dismisses without running the completion.
    pub fn decline(&mut self, now: Instant) {
        self.dismiss(now);
    }

    /// The "OK" control.
    pub fn acknowledge(&mut self, now: Instant) {
        self.dismiss(now);
    }

    /// Runs the announcement's action, then dismisses.
    ///
    /// Ignored unless the banner is showing; the tap also ends any touch.
    pub fn on_body_tap(&mut self, now: Instant) {
        self.is_suspended = false;
        if self.phase != Phase::Shown {
            return;
        }

        if let Some(action) = self
            .announcement
            .as_ref()
            .and_then(Announcement::action_handle)
        {
            action();
        }
        self.dismiss(now);
    }

    /// Handles an externally delivered timer firing.
    ///
    /// Returns `false` when `token` belongs to an earlier presentation (or the
    /// countdown was already consumed); such firings have no effect.
    pub fn on_timer_fired(&mut self, token: TimerToken, now: Instant) -> bool {
        if !self.timer.claim(token) {
            tracing::trace!(?token, "ignoring stale timer firing");
            return false;
        }
        self.timer_elapsed(now);
        true
    }

    pub fn on_interaction_begin(&mut self) {
        if self.phase == Phase::Shown {
            self.is_suspended = true;
        }
    }

    /// Ends a touch; dismisses if the timer fired while it was held.
    pub fn on_interaction_end(&mut self, now: Instant) {
        self.is_suspended = false;
        if self.pending_dismiss {
            self.dismiss(now);
        }
    }

    /// Recomputes the layout for the host's current viewport width.
    pub fn on_orientation_change(&mut self) {
        if let Some(width) = self.host.as_ref().map(|host| host.viewport_width()) {
            self.relayout(width);
        }
    }

    /// Recomputes the layout for a viewport `width` wide, without asking the
    /// host. Ignored while detached.
    pub fn on_resize(&mut self, width: f32) {
        if self.host.is_some() {
            self.relayout(width);
        }
    }

    /// Advances the timer and the running slide to `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.timer.poll(now).is_some() {
            self.timer_elapsed(now);
        }

        let Some(slide) = self.slide else {
            return;
        };
        if !slide.is_complete(now) {
            return;
        }
        self.slide = None;
        if slide.direction() == Direction::Out {
            self.finish_dismissal();
        }
    }

    /// Dispatches a [`Message`]. `now` is used for everything but
    /// [`Message::Tick`], which carries its own instant.
    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::Tick(at) => self.tick(at),
            Message::TimerFired(token) => {
                self.on_timer_fired(token, now);
            }
            Message::BodyTapped => self.on_body_tap(now),
            Message::InteractionBegan => self.on_interaction_begin(),
            Message::InteractionEnded => self.on_interaction_end(now),
            Message::Acknowledge => self.acknowledge(now),
            Message::Later => self.decline(now),
            Message::Confirm => self.confirm(now),
            Message::OrientationChanged(size) => self.on_resize(size.width),
        }
    }

    fn relayout(&mut self, width: f32) {
        self.layout = Some(layout::compute(width, &self.metrics, &self.content));
        tracing::trace!(width, "banner relayout");
    }

    fn timer_elapsed(&mut self, now: Instant) {
        self.pending_dismiss = true;
        if self.is_suspended {
            tracing::trace!("auto-dismiss deferred until touch ends");
            return;
        }
        self.dismiss(now);
    }

    fn finish_dismissal(&mut self) {
        self.timer.cancel();
        if let Some(mut host) = self.host.take() {
            host.detach();
        }
        self.phase = Phase::Hidden;
        self.announcement = None;
        self.completion = None;
        self.layout = None;
        self.is_suspended = false;
        self.pending_dismiss = false;
        tracing::debug!("banner detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Rectangle;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const SLIDE: Duration = Duration::from_millis(DEFAULT_ANIMATION_MILLIS);

    #[derive(Debug, Default)]
    struct FakeHost {
        width: f32,
        inset: f32,
        attached: Vec<Rectangle>,
        detaches: usize,
    }

    impl HostSurface for FakeHost {
        fn attach(&mut self, frame: Rectangle) {
            self.attached.push(frame);
        }

        fn detach(&mut self) {
            self.detaches += 1;
        }

        fn viewport_width(&self) -> f32 {
            self.width
        }

        fn top_inset(&self) -> f32 {
            self.inset
        }
    }

    type Host = Rc<RefCell<FakeHost>>;

    fn host(width: f32) -> Host {
        Rc::new(RefCell::new(FakeHost {
            width,
            ..FakeHost::default()
        }))
    }

    fn secs(value: f64) -> Duration {
        Duration::from_secs_f64(value)
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let handle = Rc::clone(&calls);
        (calls, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn starts_hidden() {
        let controller = BannerController::<Host>::new();
        assert_eq!(controller.state(), BannerState::Hidden);
        assert!(!controller.is_attached());
        assert!(controller.offset(Instant::now()).is_none());
    }

    #[test]
    fn present_attaches_off_screen_and_slides_in() {
        let t0 = Instant::now();
        let surface = host(375.0);
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi").duration(secs(2.0)),
            Rc::clone(&surface),
            None,
            t0,
        );

        let frame = surface.borrow().attached[0];
        assert_eq!(frame.y, -frame.height);
        assert_eq!(frame.width, 375.0);
        assert_eq!(controller.state(), BannerState::Showing);
        assert_eq!(controller.offset(t0), Some(-frame.height));

        controller.tick(t0 + SLIDE);
        assert_eq!(controller.offset(t0 + SLIDE), Some(0.0));
    }

    #[test]
    fn rests_below_host_top_inset() {
        let t0 = Instant::now();
        let surface = host(375.0);
        surface.borrow_mut().inset = 20.0;
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), surface, None, t0);

        controller.tick(t0 + SLIDE);
        assert_eq!(controller.offset(t0 + SLIDE), Some(20.0));
    }

    #[test]
    fn mode_follows_completion() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();

        controller.present(Announcement::new("a"), host(375.0), None, t0);
        assert_eq!(controller.mode(), ButtonMode::Single);

        controller.present(Announcement::new("b"), host(375.0), Some(Box::new(|| {})), t0);
        assert_eq!(controller.mode(), ButtonMode::Double);

        controller.present(Announcement::new("c"), host(375.0), None, t0);
        assert_eq!(controller.mode(), ButtonMode::Single);
    }

    #[test]
    fn timer_dismisses_after_duration_and_detaches_after_slide() {
        let t0 = Instant::now();
        let surface = host(375.0);
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi").duration(secs(2.0)),
            Rc::clone(&surface),
            None,
            t0,
        );

        controller.tick(t0 + secs(1.999));
        assert_eq!(controller.state(), BannerState::Showing);

        controller.tick(t0 + secs(2.0));
        assert_eq!(controller.state(), BannerState::Dismissing);
        assert_eq!(surface.borrow().detaches, 0);

        controller.tick(t0 + secs(2.0) + SLIDE);
        assert_eq!(controller.state(), BannerState::Hidden);
        assert_eq!(surface.borrow().detaches, 1);
        assert!(!controller.is_attached());
    }

    #[test]
    fn suspension_defers_timer_dismissal() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi").duration(secs(2.0)),
            host(375.0),
            None,
            t0,
        );

        controller.on_interaction_begin();
        assert_eq!(controller.state(), BannerState::Suspended);

        controller.tick(t0 + secs(2.5));
        assert!(controller.pending_dismiss());
        assert_eq!(controller.state(), BannerState::Suspended);

        controller.on_interaction_end(t0 + secs(3.0));
        assert_eq!(controller.state(), BannerState::Dismissing);
    }

    #[test]
    fn interaction_end_without_pending_dismiss_resumes_showing() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi").duration(secs(5.0)), host(375.0), None, t0);

        controller.on_interaction_begin();
        controller.on_interaction_end(t0 + secs(1.0));
        assert_eq!(controller.state(), BannerState::Showing);
        assert!(!controller.pending_dismiss());
    }

    #[test]
    fn interaction_on_hidden_banner_is_ignored() {
        let mut controller = BannerController::<Host>::new();
        controller.on_interaction_begin();
        assert!(!controller.is_suspended());
        assert_eq!(controller.state(), BannerState::Hidden);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let t0 = Instant::now();
        let surface = host(375.0);
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), Rc::clone(&surface), None, t0);

        controller.dismiss(t0 + secs(0.5));
        controller.dismiss(t0 + secs(0.6));
        controller.tick(t0 + secs(0.5) + SLIDE);
        controller.tick(t0 + secs(5.0));

        assert_eq!(surface.borrow().detaches, 1);
    }

    #[test]
    fn dismiss_while_hidden_is_noop() {
        let mut controller = BannerController::<Host>::new();
        controller.dismiss(Instant::now());
        assert_eq!(controller.state(), BannerState::Hidden);
    }

    #[test]
    fn second_dismiss_keeps_original_schedule() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), host(375.0), None, t0);

        controller.dismiss(t0 + secs(0.5));
        controller.dismiss(t0 + secs(0.8));
        controller.tick(t0 + secs(0.5) + SLIDE);
        assert_eq!(controller.state(), BannerState::Hidden);
    }

    #[test]
    fn confirm_runs_completion_once() {
        let t0 = Instant::now();
        let (calls, completion) = counter();
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi"),
            host(375.0),
            Some(Box::new(completion)),
            t0,
        );

        controller.confirm(t0 + secs(1.0));
        controller.confirm(t0 + secs(1.1));
        assert_eq!(calls.get(), 1);
        assert_eq!(controller.state(), BannerState::Dismissing);
    }

    #[test]
    fn completion_sees_banner_not_yet_dismissing() {
        let t0 = Instant::now();
        let surface = host(375.0);
        let observed = Rc::new(Cell::new(usize::MAX));
        let probe = Rc::clone(&surface);
        let seen = Rc::clone(&observed);
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi"),
            Rc::clone(&surface),
            Some(Box::new(move || seen.set(probe.borrow().detaches))),
            t0,
        );

        controller.confirm(t0 + secs(1.0));
        assert_eq!(observed.get(), 0);
    }

    #[test]
    fn decline_never_runs_completion() {
        let t0 = Instant::now();
        let (calls, completion) = counter();
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi"),
            host(375.0),
            Some(Box::new(completion)),
            t0,
        );

        controller.decline(t0 + secs(1.0));
        controller.tick(t0 + secs(1.0) + SLIDE);
        assert_eq!(calls.get(), 0);
        assert_eq!(controller.state(), BannerState::Hidden);
    }

    #[test]
    fn body_tap_runs_action_once_and_dismisses() {
        let t0 = Instant::now();
        let (calls, action) = counter();
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi").duration(secs(2.0)).action(action),
            host(375.0),
            None,
            t0,
        );

        controller.on_body_tap(t0 + secs(0.5));
        controller.on_body_tap(t0 + secs(0.6));
        assert_eq!(calls.get(), 1);
        assert_eq!(controller.state(), BannerState::Dismissing);
    }

    #[test]
    fn body_tap_without_action_still_dismisses() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), host(375.0), None, t0);
        controller.on_body_tap(t0);
        assert_eq!(controller.state(), BannerState::Dismissing);
    }

    #[test]
    fn body_tap_ends_suspension() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), host(375.0), None, t0);
        controller.on_interaction_begin();
        controller.on_body_tap(t0 + secs(0.2));
        assert!(!controller.is_suspended());
    }

    #[test]
    fn stale_token_is_ignored_after_re_present() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        let stale = controller.present(Announcement::new("first"), host(375.0), None, t0);
        let fresh = controller.present(
            Announcement::new("second").duration(secs(5.0)),
            host(375.0),
            None,
            t0 + secs(1.0),
        );

        assert!(!controller.on_timer_fired(stale, t0 + secs(2.0)));
        assert_eq!(controller.state(), BannerState::Showing);
        assert_eq!(
            controller.announcement().map(Announcement::title_text),
            Some("second")
        );

        assert!(controller.on_timer_fired(fresh, t0 + secs(6.0)));
        assert_eq!(controller.state(), BannerState::Dismissing);
    }

    #[test]
    fn re_present_detaches_previous_host() {
        let t0 = Instant::now();
        let first = host(375.0);
        let second = host(375.0);
        let mut controller = BannerController::new();
        controller.present(Announcement::new("a"), Rc::clone(&first), None, t0);
        controller.present(Announcement::new("b"), Rc::clone(&second), None, t0);

        assert_eq!(first.borrow().detaches, 1);
        assert_eq!(second.borrow().attached.len(), 1);
        assert_eq!(second.borrow().detaches, 0);
    }

    #[test]
    fn re_present_while_dismissing_restarts_cycle() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("a"), host(375.0), None, t0);
        controller.dismiss(t0);
        controller.present(Announcement::new("b"), host(375.0), None, t0 + secs(0.1));

        assert_eq!(controller.state(), BannerState::Showing);
        controller.tick(t0 + secs(0.1) + SLIDE);
        assert_eq!(controller.state(), BannerState::Showing);
    }

    #[test]
    fn present_resets_suspension_and_pending_dismiss() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("a").duration(secs(1.0)), host(375.0), None, t0);
        controller.on_interaction_begin();
        controller.tick(t0 + secs(1.0));
        assert!(controller.pending_dismiss());

        controller.present(Announcement::new("b"), host(375.0), None, t0 + secs(1.5));
        assert!(!controller.is_suspended());
        assert!(!controller.pending_dismiss());
    }

    #[test]
    fn announcement_is_cleared_after_dismissal() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), host(375.0), None, t0);

        controller.dismiss(t0);
        assert!(controller.announcement().is_some());

        controller.tick(t0 + SLIDE);
        assert!(controller.announcement().is_none());
        assert!(controller.layout().is_none());
    }

    #[test]
    fn unused_completion_is_dropped_after_dismissal() {
        let t0 = Instant::now();
        let (calls, completion) = counter();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), host(375.0), Some(Box::new(completion)), t0);
        controller.decline(t0);
        controller.tick(t0 + SLIDE);

        controller.confirm(t0 + secs(1.0));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn orientation_change_recomputes_layout_only() {
        let t0 = Instant::now();
        let surface = host(375.0);
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), Rc::clone(&surface), None, t0);
        controller.on_interaction_begin();
        let portrait = *controller.layout().expect("layout");

        surface.borrow_mut().width = 667.0;
        controller.on_orientation_change();
        let landscape = *controller.layout().expect("layout");

        assert_ne!(portrait.decline.width, landscape.decline.width);
        assert_eq!(portrait.size.height, landscape.size.height);
        assert_eq!(controller.state(), BannerState::Suspended);
        assert_eq!(surface.borrow().attached.len(), 1);
    }

    #[test]
    fn zero_duration_dismisses_on_first_tick() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi").duration(Duration::ZERO), host(375.0), None, t0);
        controller.tick(t0);
        assert_eq!(controller.state(), BannerState::Dismissing);
    }

    #[test]
    fn dismiss_mid_slide_in_starts_from_current_offset() {
        let t0 = Instant::now();
        let mut controller = BannerController::new().with_easing(Easing::Linear);
        controller.present(Announcement::new("Hi"), host(375.0), None, t0);
        let half = SLIDE / 2;
        let before = controller.offset(t0 + half).expect("offset");

        controller.dismiss(t0 + half);
        let after = controller.offset(t0 + half).expect("offset");
        assert!((before - after).abs() < 1e-3);
    }

    #[test]
    fn without_animation_dismissal_detaches_on_next_tick() {
        let t0 = Instant::now();
        let surface = host(375.0);
        let mut controller = BannerController::new().with_animation(Duration::ZERO);
        controller.present(Announcement::new("Hi"), Rc::clone(&surface), None, t0);
        controller.dismiss(t0);
        controller.tick(t0);
        assert_eq!(surface.borrow().detaches, 1);
    }

    #[test]
    fn update_dispatches_messages() {
        let t0 = Instant::now();
        let (calls, completion) = counter();
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), host(375.0), Some(Box::new(completion)), t0);

        controller.update(Message::InteractionBegan, t0);
        assert_eq!(controller.state(), BannerState::Suspended);
        controller.update(Message::InteractionEnded, t0);
        assert_eq!(controller.state(), BannerState::Showing);
        controller.update(Message::Confirm, t0);
        assert_eq!(calls.get(), 1);
        controller.update(Message::Tick(t0 + SLIDE), t0);
        assert_eq!(controller.state(), BannerState::Hidden);
    }

    #[test]
    fn from_config_uses_configured_metrics() {
        let mut config = Config::default();
        config.metrics.margin = Some(0.0);
        let controller = BannerController::<Host>::from_config(&config);
        assert_eq!(controller.metrics().margin, 0.0);
    }

    #[test]
    fn subscription_is_revoked_while_hidden() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        assert!(!controller.is_attached());
        controller.present(Announcement::new("Hi"), host(375.0), None, t0);
        assert!(controller.is_attached());
        let _granted = controller.subscription();
        controller.dismiss(t0);
        controller.tick(t0 + SLIDE);
        assert!(!controller.is_attached());
    }

    #[test]
    fn orientation_message_uses_carried_width() {
        let t0 = Instant::now();
        let surface = host(375.0);
        let mut controller = BannerController::new();
        controller.present(Announcement::new("Hi"), Rc::clone(&surface), None, t0);
        let portrait = *controller.layout().expect("layout");

        controller.update(Message::OrientationChanged(Size::new(667.0, 375.0)), t0);
        let landscape = *controller.layout().expect("layout");

        assert_eq!(surface.borrow().width, 375.0);
        assert_eq!(landscape.size.width, 667.0);
        assert_ne!(portrait.decline.width, landscape.decline.width);
        assert_eq!(portrait.size.height, landscape.size.height);
    }

    #[test]
    fn resize_while_hidden_is_ignored() {
        let mut controller = BannerController::<Host>::new();
        controller.update(
            Message::OrientationChanged(Size::new(667.0, 375.0)),
            Instant::now(),
        );
        assert!(controller.layout().is_none());
    }

    #[test]
    fn endless_duration_waits_for_the_user() {
        let t0 = Instant::now();
        let mut controller = BannerController::new();
        controller.present(
            Announcement::new("Hi").duration(Duration::MAX),
            host(375.0),
            None,
            t0,
        );

        controller.tick(t0 + secs(3600.0));
        assert_eq!(controller.state(), BannerState::Showing);
        assert_eq!(controller.remaining(t0), Some(Duration::MAX));

        controller.acknowledge(t0 + secs(3600.0));
        assert_eq!(controller.state(), BannerState::Dismissing);
    }
}
