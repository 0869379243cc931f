//! Atomic layer: the platform services the controller is scheduled by

use std::time::Duration;

/// Handle to one requested repaint callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Handle to one armed one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Frame scheduler, one-shot timer, clock and accessibility query
///
/// Requests are fire-and-forget: the host later hands the handle back to
/// [`AutoScroller::on_frame`](super::AutoScroller::on_frame) or
/// [`AutoScroller::on_resume_timer`](super::AutoScroller::on_resume_timer).
/// All timestamps are measured on the same monotonic clock as [`now`](Self::now).
pub trait FramePlatform {
    /// Ask for a callback on the next repaint
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a pending repaint callback
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Arm a one-shot timer that fires after `delay`
    fn arm_timer(&mut self, delay: Duration) -> TimerHandle;

    /// Disarm a pending timer
    fn cancel_timer(&mut self, handle: TimerHandle);

    /// Current monotonic time
    fn now(&self) -> Duration;

    /// Whether the user asked for reduced motion
    fn prefers_reduced_motion(&self) -> bool;

    /// Notification that the controller's active state changed
    fn active_changed(&mut self, _active: bool) {}
}
