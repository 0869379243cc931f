//! Atomic layer: pure timing and displacement helpers for the scheduling loop

use std::time::Duration;

/// Time step for a frame, clamped so a throttled callback cannot cause a jump
#[inline]
pub fn frame_delta(previous: Duration, now: Duration, max: Duration) -> Duration {
    now.saturating_sub(previous).min(max)
}

/// True when a frame arrived sooner than the frame-rate cap allows
#[inline]
pub fn is_under_frame_cap(gap: Duration, min_interval: Option<Duration>) -> bool {
    min_interval.is_some_and(|min| gap < min)
}

/// Clamp a requested speed into a usable rate
///
/// Negative and non-finite values become zero (an inert controller).
#[inline]
pub fn sanitize_speed(speed: f64) -> f64 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        0.0
    }
}

/// Clamp the edge tolerance band into a usable width
///
/// Negative and non-finite values become zero (exact edges only).
#[inline]
pub fn sanitize_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        0.0
    }
}

/// Smallest frame-delta clamp, one frame at 60 Hz
pub const MIN_FRAME_DELTA_MS: u64 = 16;

/// Floor the frame-delta clamp so every frame can make progress
#[inline]
pub fn sanitize_max_frame_delta(max_frame_delta_ms: u64) -> u64 {
    max_frame_delta_ms.max(MIN_FRAME_DELTA_MS)
}

/// Remove and return the whole-unit part of the accumulator
///
/// Floors a positive carry and ceils a negative one, so the remainder left in
/// `acc` always has magnitude below one.
#[inline]
pub fn take_whole(acc: &mut f64) -> f64 {
    let whole = acc.trunc();
    *acc -= whole;
    whole
}

/// Maximum scroll offset for the given extents, floored at 0
#[inline]
pub fn max_offset(scroll_extent: f64, visible_extent: f64) -> f64 {
    (scroll_extent - visible_extent).max(0.0)
}

/// At or past the end, within `tolerance`
///
/// Steps are whole units, so less than one unit of room left also counts.
#[inline]
pub fn is_at_end(offset: f64, max_offset: f64, tolerance: f64) -> bool {
    let room = max_offset - offset;
    room < 1.0 || room <= tolerance
}

/// At or before the start, within `tolerance` or less than one unit away
#[inline]
pub fn is_at_start(offset: f64, tolerance: f64) -> bool {
    offset < 1.0 || offset <= tolerance
}
