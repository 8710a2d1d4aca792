use iced::widget::scrollable::Viewport;

/// Tolerance for fractional scroll offsets reported by the renderer.
const EPSILON: f32 = 1.0;

/// Snapshot of the scrolled content's geometry, used to decide whether the
/// load-more sentinel (the footer row at the very bottom of the content) is
/// fully visible inside the viewport.
///
/// This is the viewport-visibility port of the feed: the application builds
/// one from each scroll event, and tests synthesize values directly to
/// simulate "became visible" transitions without a windowing system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentinelView {
    /// Vertical scroll offset of the visible region, in pixels from the top
    /// of the content.
    pub scroll_top: f32,
    /// Height of the visible region.
    pub viewport_height: f32,
    /// Total height of the scrolled content.
    pub content_height: f32,
    /// Height of the sentinel row sitting at the bottom of the content.
    pub sentinel_height: f32,
}

impl SentinelView {
    /// Capture the geometry of an iced scrollable viewport.
    pub fn from_viewport(viewport: &Viewport, sentinel_height: f32) -> Self {
        Self {
            scroll_top: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
            sentinel_height,
        }
    }

    /// Whether the entire sentinel row lies inside the visible region
    /// (visibility threshold 1.0 — a partially visible sentinel does not
    /// count). Content shorter than the viewport counts as visible, so an
    /// underfilled page immediately requests more.
    pub fn fully_visible(&self) -> bool {
        let visible_bottom = self.scroll_top + self.viewport_height;
        let sentinel_top = (self.content_height - self.sentinel_height).max(0.0);

        sentinel_top + EPSILON >= self.scroll_top
            && self.content_height <= visible_bottom + EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(scroll_top: f32, viewport_height: f32, content_height: f32) -> SentinelView {
        SentinelView {
            scroll_top,
            viewport_height,
            content_height,
            sentinel_height: 64.0,
        }
    }

    #[test]
    fn not_visible_at_top_of_long_content() {
        assert!(!view(0.0, 900.0, 5000.0).fully_visible());
    }

    #[test]
    fn not_visible_when_partially_scrolled_in() {
        // Bottom of the viewport cuts the sentinel in half
        let v = view(4068.0, 900.0, 5000.0);
        assert!(!v.fully_visible());
    }

    #[test]
    fn visible_when_scrolled_to_bottom() {
        let v = view(4100.0, 900.0, 5000.0);
        assert!(v.fully_visible());
    }

    #[test]
    fn visible_when_content_shorter_than_viewport() {
        // Underfilled first page: the sentinel is on screen from the start
        assert!(view(0.0, 900.0, 500.0).fully_visible());
    }

    #[test]
    fn tolerates_fractional_scroll_offsets() {
        let v = view(4099.4, 900.0, 5000.0);
        assert!(v.fully_visible());
    }

    #[test]
    fn becomes_visible_exactly_at_the_boundary() {
        // visible_bottom == content_height
        let v = view(4100.0, 900.0, 5000.0);
        assert!(v.fully_visible());

        // One sentinel-height short of the boundary
        let v = view(4100.0 - 64.0, 900.0, 5000.0);
        assert!(!v.fully_visible());
    }
}
