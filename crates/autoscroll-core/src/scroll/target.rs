//! Atomic layer: the scrollable region the controller drives

/// A scrollable region: the whole page viewport or one scrollable element
///
/// All values share one unit (pixels on the web, virtual pixels in the
/// terminal host). Writers only ever receive whole-unit values from the
/// controller.
pub trait ScrollTarget {
    /// Current scroll offset
    fn offset(&self) -> f64;

    /// Total scrollable extent (content length)
    fn scroll_extent(&self) -> f64;

    /// Visible extent (viewport length)
    fn visible_extent(&self) -> f64;

    /// Move by a relative delta
    fn scroll_by(&mut self, delta: f64);

    /// Jump to an absolute offset
    fn scroll_to(&mut self, offset: f64);

    /// Largest reachable offset, floored at 0
    fn max_offset(&self) -> f64 {
        super::timing::max_offset(self.scroll_extent(), self.visible_extent())
    }
}
