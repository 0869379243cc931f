use autoscroll_core::ScrollTarget;

/// Scrollable text region measured in virtual pixels
///
/// Each terminal row is `row_height` units tall, so a speed given in
/// pixels per second reads the same as on a web page.
#[derive(Debug, Clone)]
pub struct DocumentViewport {
    offset: f64,
    content_rows: usize,
    visible_rows: u16,
    row_height: f64,
}

impl DocumentViewport {
    pub fn new(row_height: f64) -> Self {
        Self {
            offset: 0.0,
            content_rows: 0,
            visible_rows: 0,
            row_height: if row_height.is_finite() && row_height > 0.0 {
                row_height
            } else {
                1.0
            },
        }
    }

    /// Update extents after a resize or re-wrap
    pub fn set_layout(&mut self, content_rows: usize, visible_rows: u16) {
        self.content_rows = content_rows;
        self.visible_rows = visible_rows;
        self.offset = self.clamp(self.offset);
    }

    /// First visible row
    pub fn first_row(&self) -> usize {
        (self.offset / self.row_height).floor() as usize
    }

    pub fn visible_rows(&self) -> u16 {
        self.visible_rows
    }

    /// Manual scroll by whole rows (negative = up)
    pub fn scroll_rows(&mut self, rows: i32) {
        self.scroll_by(rows as f64 * self.row_height);
    }

    /// Manual scroll by whole pages, keeping one row of overlap
    pub fn scroll_pages(&mut self, pages: i32) {
        let page = (self.visible_rows as i32 - 1).max(1);
        self.scroll_rows(pages * page);
    }

    /// Read position in [0, 1]
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 {
            1.0
        } else {
            (self.offset / max).clamp(0.0, 1.0)
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }
}

impl ScrollTarget for DocumentViewport {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn scroll_extent(&self) -> f64 {
        self.content_rows as f64 * self.row_height
    }

    fn visible_extent(&self) -> f64 {
        self.visible_rows as f64 * self.row_height
    }

    fn scroll_by(&mut self, delta: f64) {
        self.offset = self.clamp(self.offset + delta);
    }

    fn scroll_to(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents_in_virtual_pixels() {
        let mut viewport = DocumentViewport::new(20.0);
        viewport.set_layout(100, 25);
        assert_eq!(viewport.scroll_extent(), 2000.0);
        assert_eq!(viewport.visible_extent(), 500.0);
        assert_eq!(viewport.max_offset(), 1500.0);
    }

    #[test]
    fn test_first_row_follows_offset() {
        let mut viewport = DocumentViewport::new(20.0);
        viewport.set_layout(100, 25);
        viewport.scroll_by(39.0);
        assert_eq!(viewport.first_row(), 1);
        viewport.scroll_by(1.0);
        assert_eq!(viewport.first_row(), 2);
    }

    #[test]
    fn test_writes_are_clamped() {
        let mut viewport = DocumentViewport::new(20.0);
        viewport.set_layout(100, 25);
        viewport.scroll_to(10_000.0);
        assert_eq!(viewport.offset(), 1500.0);
        assert_eq!(viewport.progress(), 1.0);
        viewport.scroll_rows(-500);
        assert_eq!(viewport.offset(), 0.0);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut viewport = DocumentViewport::new(20.0);
        viewport.set_layout(100, 25);
        viewport.scroll_to(1500.0);
        viewport.set_layout(100, 50);
        assert_eq!(viewport.offset(), 1000.0);
    }

    #[test]
    fn test_short_document_has_nothing_to_scroll() {
        let mut viewport = DocumentViewport::new(20.0);
        viewport.set_layout(10, 25);
        assert_eq!(viewport.max_offset(), 0.0);
        viewport.scroll_pages(3);
        assert_eq!(viewport.offset(), 0.0);
    }

    #[test]
    fn test_page_scroll_keeps_overlap() {
        let mut viewport = DocumentViewport::new(10.0);
        viewport.set_layout(100, 11);
        viewport.scroll_pages(1);
        assert_eq!(viewport.first_row(), 10);
    }
}
