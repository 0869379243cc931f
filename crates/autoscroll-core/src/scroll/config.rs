//! Atomic layer: `Duration` views over the auto-scroll configuration

use std::time::Duration;

use crate::config::AutoScrollConfig;

/// Extension trait for AutoScrollConfig with utility methods
pub trait AutoScrollConfigExt {
    /// Quiet period after interaction before auto-resume
    fn resume_delay(&self) -> Duration;

    /// Grace suspension after the page becomes visible again
    fn visibility_grace(&self) -> Duration;

    /// Upper bound on the per-frame time step
    fn max_frame_delta(&self) -> Duration;

    /// Minimum gap between advancing frames, if a frame-rate cap is set
    fn min_frame_interval(&self) -> Option<Duration>;
}

impl AutoScrollConfigExt for AutoScrollConfig {
    #[inline]
    fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    #[inline]
    fn visibility_grace(&self) -> Duration {
        Duration::from_millis(self.visibility_grace_ms)
    }

    #[inline]
    fn max_frame_delta(&self) -> Duration {
        Duration::from_millis(self.max_frame_delta_ms)
    }

    #[inline]
    fn min_frame_interval(&self) -> Option<Duration> {
        if self.max_fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / self.max_fps as f64))
        }
    }
}
