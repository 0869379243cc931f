use std::time::{Duration, Instant};

use autoscroll_core::{FrameHandle, FramePlatform, TimerHandle};
use tracing::info;

/// Frame scheduler backed by the host's repaint tick
///
/// The run loop repaints at a fixed rate; a requested frame is delivered on
/// the next repaint, timers as soon as their deadline passes.
#[derive(Debug)]
pub struct TerminalPlatform {
    origin: Instant,
    next_id: u64,
    frame: Option<FrameHandle>,
    timers: Vec<(TimerHandle, Instant)>,
    reduced_motion: bool,
}

impl TerminalPlatform {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            origin: Instant::now(),
            next_id: 0,
            frame: None,
            timers: Vec::new(),
            reduced_motion,
        }
    }

    /// Convert a wall-clock instant to the controller's timeline
    pub fn timestamp(&self, at: Instant) -> Duration {
        at.saturating_duration_since(self.origin)
    }

    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frame.take()
    }

    /// Remove and return timers due at `now`, earliest first
    pub fn take_due_timers(&mut self, now: Instant) -> Vec<TimerHandle> {
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

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl FramePlatform for TerminalPlatform {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
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
        self.timers.push((handle, Instant::now() + delay));
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _)| *h != handle);
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn active_changed(&mut self, active: bool) {
        info!(active, "auto-scroll state changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_slot() {
        let mut platform = TerminalPlatform::new(false);
        let handle = platform.request_frame();
        assert_eq!(platform.take_frame(), Some(handle));
        assert_eq!(platform.take_frame(), None);

        let handle = platform.request_frame();
        platform.cancel_frame(handle);
        assert_eq!(platform.take_frame(), None);
    }

    #[test]
    fn test_timers_by_deadline() {
        let mut platform = TerminalPlatform::new(false);
        let slow = platform.arm_timer(Duration::from_secs(60));
        let fast = platform.arm_timer(Duration::ZERO);

        assert_eq!(platform.take_due_timers(Instant::now()), vec![fast]);
        let later = Instant::now() + Duration::from_secs(61);
        assert_eq!(platform.take_due_timers(later), vec![slow]);
        assert!(platform.take_due_timers(later).is_empty());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut platform = TerminalPlatform::new(false);
        let handle = platform.arm_timer(Duration::ZERO);
        platform.cancel_timer(handle);
        assert!(platform
            .take_due_timers(Instant::now() + Duration::from_secs(1))
            .is_empty());
    }

    #[test]
    fn test_timestamps_are_monotonic() {
        let platform = TerminalPlatform::new(true);
        assert!(platform.prefers_reduced_motion());
        let a = platform.timestamp(Instant::now());
        let b = platform.timestamp(Instant::now() + Duration::from_millis(5));
        assert!(b > a);
    }
}
