//! Deterministic simulation of a page and its frame clock
//!
//! Lets the controller run without a real platform: a manual clock, a single
//! frame slot, a timer list and an in-memory scroll target that records every
//! write it receives.

use std::time::Duration;

use serde::Serialize;

use crate::scroll::{AutoScroller, Direction, FrameHandle, FramePlatform, ScrollTarget, TimerHandle};

/// A write received by [`SimulatedTarget`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ScrollWrite {
    By(f64),
    To(f64),
}

/// In-memory scroll target that clamps like a browser does
#[derive(Debug, Clone)]
pub struct SimulatedTarget {
    offset: f64,
    scroll_extent: f64,
    visible_extent: f64,
    writes: Vec<ScrollWrite>,
}

impl SimulatedTarget {
    pub fn new(scroll_extent: f64, visible_extent: f64) -> Self {
        Self {
            offset: 0.0,
            scroll_extent,
            visible_extent,
            writes: Vec::new(),
        }
    }

    /// A document long enough that the end is never reached
    pub fn unbounded(visible_extent: f64) -> Self {
        Self::new(1e12, visible_extent)
    }

    /// Start from a given offset without recording a write
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = self.clamp(offset);
        self
    }

    /// Content grew or shrank (late-loading images, layout changes)
    pub fn set_scroll_extent(&mut self, scroll_extent: f64) {
        self.scroll_extent = scroll_extent;
        self.offset = self.clamp(self.offset);
    }

    pub fn writes(&self) -> &[ScrollWrite] {
        &self.writes
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }
}

impl ScrollTarget for SimulatedTarget {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn scroll_extent(&self) -> f64 {
        self.scroll_extent
    }

    fn visible_extent(&self) -> f64 {
        self.visible_extent
    }

    fn scroll_by(&mut self, delta: f64) {
        self.writes.push(ScrollWrite::By(delta));
        self.offset = self.clamp(self.offset + delta);
    }

    fn scroll_to(&mut self, offset: f64) {
        self.writes.push(ScrollWrite::To(offset));
        self.offset = self.clamp(offset);
    }
}

/// Platform with a hand-cranked clock
#[derive(Debug, Default)]
pub struct ManualPlatform {
    now: Duration,
    next_id: u64,
    frame: Option<FrameHandle>,
    frames_requested: u64,
    timers: Vec<(TimerHandle, Duration)>,
    reduced_motion: bool,
    active_log: Vec<bool>,
}

impl ManualPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Move the clock forward and return the new time
    pub fn advance_clock(&mut self, dt: Duration) -> Duration {
        self.now += dt;
        self.now
    }

    /// The outstanding frame request, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Take the outstanding frame request for delivery
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    /// Remove and return timers whose deadline has passed, earliest first
    pub fn take_due_timers(&mut self) -> Vec<TimerHandle> {
        let now = self.now;
        let mut due: Vec<_> = self
            .timers
            .iter()
            .copied()
            .filter(|(_, deadline)| *deadline <= now)
            .collect();
        self.timers.retain(|(_, deadline)| *deadline > now);
        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(handle, _)| handle).collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Every `active_changed` notification received, in order
    pub fn active_log(&self) -> &[bool] {
        &self.active_log
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl FramePlatform for ManualPlatform {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames_requested += 1;
        self.frame = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frame == Some(handle) {
            self.frame = None;
        }
    }

    fn arm_timer(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        self.timers.push((handle, self.now + delay));
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }

    fn now(&self) -> Duration {
        self.now
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn active_changed(&mut self, active: bool) {
        self.active_log.push(active);
    }
}

/// Snapshot of the simulation after one step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSample {
    pub at_ms: f64,
    pub offset: f64,
    pub active: bool,
    pub suspended: bool,
    pub direction: Direction,
}

/// Advance the clock by `dt`, fire due timers, then deliver the pending frame
///
/// Returns the new clock value.
pub fn step<T: ScrollTarget>(scroller: &mut AutoScroller<T, ManualPlatform>, dt: Duration) -> Duration {
    let now = scroller.platform_mut().advance_clock(dt);
    for timer in scroller.platform_mut().take_due_timers() {
        scroller.on_resume_timer(timer);
    }
    if let Some(frame) = scroller.platform_mut().take_frame() {
        scroller.on_frame(frame, now);
    }
    now
}

/// Step repeatedly for `total`, sampling after every step
pub fn run_for<T: ScrollTarget>(
    scroller: &mut AutoScroller<T, ManualPlatform>,
    total: Duration,
    dt: Duration,
) -> Vec<FrameSample> {
    let mut samples = Vec::new();
    if dt.is_zero() {
        return samples;
    }
    let mut elapsed = Duration::ZERO;
    while elapsed + dt <= total {
        step(scroller, dt);
        elapsed += dt;
        samples.push(sample(scroller));
    }
    samples
}

/// Current state of a simulated controller
pub fn sample<T: ScrollTarget>(scroller: &AutoScroller<T, ManualPlatform>) -> FrameSample {
    FrameSample {
        at_ms: scroller.platform().now().as_secs_f64() * 1000.0,
        offset: scroller.target().offset(),
        active: scroller.is_active(),
        suspended: scroller.is_auto_suspended(),
        direction: scroller.direction(),
    }
}
