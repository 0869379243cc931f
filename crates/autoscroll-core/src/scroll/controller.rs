//! Molecular layer: the auto-scroll scheduling state machine
//!
//! Combines timing helpers, the scroll target and the platform scheduler.
//! The controller never sleeps or polls: every bit of work happens inside a
//! frame callback it requested, a resume timer it armed, or a host call.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace};

use super::config::AutoScrollConfigExt;
use super::input::{InputEvent, Visibility};
use super::platform::{FrameHandle, FramePlatform, TimerHandle};
use super::target::ScrollTarget;
use super::timing::{
    frame_delta, is_at_end, is_at_start, is_under_frame_cap, sanitize_max_frame_delta,
    sanitize_speed, sanitize_tolerance, take_whole,
};
use crate::config::{AutoScrollConfig, BoundaryStrategy};

/// Scroll direction along the target's axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Auto-scroll controller
///
/// Bound to one [`ScrollTarget`] and one [`FramePlatform`]. Call
/// [`start`](Self::start), then hand every fired frame back through
/// [`on_frame`](Self::on_frame) and every fired timer through
/// [`on_resume_timer`](Self::on_resume_timer). Handles the controller did not
/// ask for (or has since cancelled) are ignored.
#[derive(Debug)]
pub struct AutoScroller<T, P> {
    config: AutoScrollConfig,
    target: T,
    platform: P,
    /// Sanitized rate in units per second
    speed: f64,
    direction: Direction,
    /// Sub-unit displacement carried between frames
    accumulator: f64,
    last_frame: Option<Duration>,
    suspended_until: Option<Duration>,
    running: bool,
    /// Paused by interaction or visibility, eligible for auto-resume
    auto_suspended: bool,
    /// Stop strategy reached the end; deactivate on the next frame
    settling: bool,
    hidden: bool,
    pending_frame: Option<FrameHandle>,
    resume_timer: Option<TimerHandle>,
}

impl<T: ScrollTarget, P: FramePlatform> AutoScroller<T, P> {
    /// Create an idle controller; nothing is scheduled until [`start`](Self::start)
    pub fn new(mut config: AutoScrollConfig, target: T, platform: P) -> Self {
        config.edge_tolerance = sanitize_tolerance(config.edge_tolerance);
        config.max_frame_delta_ms = sanitize_max_frame_delta(config.max_frame_delta_ms);
        let speed = sanitize_speed(config.speed);
        Self {
            config,
            target,
            platform,
            speed,
            direction: Direction::Forward,
            accumulator: 0.0,
            last_frame: None,
            suspended_until: None,
            running: false,
            auto_suspended: false,
            settling: false,
            hidden: false,
            pending_frame: None,
            resume_timer: None,
        }
    }

    /// Begin scrolling. No-op while already running.
    ///
    /// While the page is hidden the controller only becomes auto-suspended;
    /// it starts moving once the page is visible again.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.cancel_resume_timer();
        self.suspended_until = None;
        if self.hidden {
            debug!("page hidden, auto-scroll will start when visible");
            self.auto_suspended = true;
            return;
        }
        self.auto_suspended = false;
        debug!(speed = self.speed, "auto-scroll started");
        self.activate();
    }

    /// Stop scrolling and forget any pending auto-resume. Idempotent.
    pub fn stop(&mut self) {
        self.cancel_resume_timer();
        self.auto_suspended = false;
        self.suspended_until = None;
        if self.running {
            debug!(offset = self.target.offset(), "auto-scroll stopped");
        }
        self.deactivate();
    }

    /// Change the rate without disturbing timing or the carried fraction
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = sanitize_speed(speed);
        trace!(speed = self.speed, "auto-scroll speed changed");
    }

    /// Feed a platform input event
    ///
    /// Returns true when the event counted as interaction and suspended the
    /// controller. Interaction only suspends a running (or already
    /// auto-suspended) controller; it never revives an explicitly stopped one.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !event.is_interaction() {
            return false;
        }
        if !self.running && !self.auto_suspended {
            return false;
        }

        debug!(?event, "user interaction, suspending auto-scroll");
        self.deactivate();
        self.auto_suspended = true;
        self.accumulator = 0.0;

        // Re-arm rather than stack
        self.cancel_resume_timer();
        self.resume_timer = Some(self.platform.arm_timer(self.config.resume_delay()));
        true
    }

    /// Feed a page visibility change
    pub fn set_visibility(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Hidden => {
                if self.hidden {
                    return;
                }
                self.hidden = true;
                if self.running {
                    debug!("page hidden, suspending auto-scroll");
                    self.deactivate();
                    self.auto_suspended = true;
                }
            }
            Visibility::Visible => {
                if !self.hidden {
                    return;
                }
                self.hidden = false;
                // A pending resume timer takes care of itself
                if self.auto_suspended && self.resume_timer.is_none() {
                    debug!("page visible, resuming auto-scroll after grace period");
                    self.auto_suspended = false;
                    self.activate();
                    self.suspended_until =
                        Some(self.platform.now() + self.config.visibility_grace());
                }
            }
        }
    }

    /// Handle a fired resume timer
    pub fn on_resume_timer(&mut self, handle: TimerHandle) {
        if self.resume_timer != Some(handle) {
            trace!(?handle, "ignoring stale resume timer");
            return;
        }
        self.resume_timer = None;

        if !self.auto_suspended {
            return;
        }
        if self.hidden {
            debug!("resume deferred until page is visible");
            return;
        }

        debug!("resuming auto-scroll after interaction");
        self.auto_suspended = false;
        self.activate();
    }

    /// Handle a fired frame callback
    ///
    /// `timestamp` is the platform's monotonic time for this repaint.
    pub fn on_frame(&mut self, handle: FrameHandle, timestamp: Duration) {
        if self.pending_frame != Some(handle) {
            trace!(?handle, "ignoring stale frame");
            return;
        }
        self.pending_frame = None;

        if self.settling {
            debug!(offset = self.target.offset(), "auto-scroll settled at end");
            self.deactivate();
            return;
        }

        if self.config.respect_reduced_motion && self.platform.prefers_reduced_motion() {
            // Idle but stay scheduled so a preference change is picked up
            self.last_frame = None;
            self.schedule_frame();
            return;
        }

        // First frame of a run only records the clock
        let Some(last) = self.last_frame else {
            self.last_frame = Some(timestamp);
            self.schedule_frame();
            return;
        };

        if is_under_frame_cap(timestamp.saturating_sub(last), self.config.min_frame_interval()) {
            trace!("frame skipped by frame-rate cap");
            self.schedule_frame();
            return;
        }

        let dt = frame_delta(last, timestamp, self.config.max_frame_delta());
        self.last_frame = Some(timestamp);

        if let Some(until) = self.suspended_until {
            if timestamp < until {
                self.schedule_frame();
                return;
            }
            self.suspended_until = None;
        }

        if self.advance(dt) {
            self.schedule_frame();
        }
    }

    /// Compute and apply one frame of displacement
    ///
    /// Returns false when the loop has halted.
    fn advance(&mut self, dt: Duration) -> bool {
        let offset = self.target.offset();
        let max = self.target.max_offset();
        let tolerance = self.config.edge_tolerance;

        self.accumulator += self.speed * dt.as_secs_f64() * self.direction.sign();
        let step = take_whole(&mut self.accumulator);

        match self.direction {
            Direction::Forward if is_at_end(offset, max, tolerance) => {
                return self.reach_end(offset, max);
            }
            Direction::Backward if is_at_start(offset, tolerance) => {
                debug!("auto-scroll reached start, reversing");
                self.direction = Direction::Forward;
            }
            Direction::Forward => {
                let step = step.min((max - offset).floor().max(0.0));
                if step != 0.0 {
                    self.target.scroll_by(step);
                }
            }
            Direction::Backward => {
                let step = step.max(-offset.floor().max(0.0));
                if step != 0.0 {
                    self.target.scroll_by(step);
                }
            }
        }
        true
    }

    fn reach_end(&mut self, offset: f64, max: f64) -> bool {
        match self.config.boundary {
            BoundaryStrategy::Stop => {
                if offset.round() != max.round() {
                    self.target.scroll_to(max);
                }
                self.settling = true;
                true
            }
            _ if max <= 0.0 => {
                debug!("nothing to scroll, halting auto-scroll");
                self.deactivate();
                false
            }
            BoundaryStrategy::Loop => {
                debug!("auto-scroll reached end, looping to start");
                if offset.round() != 0.0 {
                    self.target.scroll_to(0.0);
                }
                true
            }
            BoundaryStrategy::Bounce => {
                debug!("auto-scroll reached end, reversing");
                self.direction = Direction::Backward;
                true
            }
        }
    }

    fn activate(&mut self) {
        self.accumulator = 0.0;
        self.last_frame = None;
        self.settling = false;
        if !self.running {
            self.running = true;
            self.platform.active_changed(true);
        }
        if self.pending_frame.is_none() {
            self.schedule_frame();
        }
    }

    fn deactivate(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.platform.cancel_frame(handle);
        }
        self.settling = false;
        if self.running {
            self.running = false;
            self.platform.active_changed(false);
        }
    }

    fn schedule_frame(&mut self) {
        self.pending_frame = Some(self.platform.request_frame());
    }

    fn cancel_resume_timer(&mut self) {
        if let Some(handle) = self.resume_timer.take() {
            self.platform.cancel_timer(handle);
        }
    }

    /// Stop and hand back the collaborators
    pub fn teardown(mut self) -> (T, P) {
        self.stop();
        (self.target, self.platform)
    }

    /// Whether the scheduling loop is running
    #[inline]
    pub fn is_active(&self) -> bool {
        self.running
    }

    /// Whether paused by interaction or visibility and waiting to resume
    #[inline]
    pub fn is_auto_suspended(&self) -> bool {
        self.auto_suspended
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Fractional displacement carried into the next frame
    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn suspended_until(&self) -> Option<Duration> {
        self.suspended_until
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access for the host (resizes, manual scrolling)
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
