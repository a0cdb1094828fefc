//! Horizontal gallery scrolling.
//!
//! Decides how the prev/next scroll buttons of a gallery strip look for
//! a given scroll position, and turns touch drags into scroll offsets.

/// Opacity of a scroll button that cannot scroll further.
pub const DIMMED_OPACITY: f64 = 0.5;

/// Scroll geometry of a gallery container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    /// Whether the content is wider than the container.
    pub fn overflows(&self) -> bool {
        self.scroll_width > self.client_width
    }

    pub fn at_start(&self) -> bool {
        self.scroll_left <= 0.0
    }

    pub fn at_end(&self) -> bool {
        self.scroll_left + self.client_width >= self.scroll_width
    }
}

/// Presentation of a gallery's scroll buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollButtons {
    pub visible: bool,
    pub prev_opacity: f64,
    pub next_opacity: f64,
}

impl ScrollButtons {
    pub fn for_metrics(metrics: ScrollMetrics) -> Self {
        if !metrics.overflows() {
            return Self {
                visible: false,
                prev_opacity: 1.0,
                next_opacity: 1.0,
            };
        }

        Self {
            visible: true,
            prev_opacity: if metrics.at_start() { DIMMED_OPACITY } else { 1.0 },
            next_opacity: if metrics.at_end() { DIMMED_OPACITY } else { 1.0 },
        }
    }
}

/// Touch drag state for one gallery container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    multiplier: f64,
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    /// `multiplier` scales finger travel into scroll distance.
    pub fn new(multiplier: f64) -> Self {
        Self {
            multiplier,
            start: None,
        }
    }

    /// Record where a drag starts: finger x relative to the container,
    /// and the container's scroll offset at that moment.
    pub fn begin(&mut self, x: f64, scroll_left: f64) {
        self.start = Some((x, scroll_left));
    }

    /// Scroll offset for the finger at `x`, or `None` outside a drag.
    pub fn drag(&self, x: f64) -> Option<f64> {
        let (start_x, start_scroll) = self.start?;
        Some(start_scroll - (x - start_x) * self.multiplier)
    }

    pub fn end(&mut self) {
        self.start = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64, scroll_width: f64, client_width: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    #[test]
    fn test_buttons_hidden_when_content_fits() {
        let buttons = ScrollButtons::for_metrics(metrics(0.0, 600.0, 600.0));
        assert!(!buttons.visible);
    }

    #[test]
    fn test_buttons_dim_at_edges() {
        let start = ScrollButtons::for_metrics(metrics(0.0, 1200.0, 600.0));
        assert!(start.visible);
        assert_eq!(start.prev_opacity, DIMMED_OPACITY);
        assert_eq!(start.next_opacity, 1.0);

        let middle = ScrollButtons::for_metrics(metrics(300.0, 1200.0, 600.0));
        assert_eq!(middle.prev_opacity, 1.0);
        assert_eq!(middle.next_opacity, 1.0);

        let end = ScrollButtons::for_metrics(metrics(600.0, 1200.0, 600.0));
        assert_eq!(end.prev_opacity, 1.0);
        assert_eq!(end.next_opacity, DIMMED_OPACITY);
    }

    #[test]
    fn test_swipe_scales_drag() {
        let mut swipe = SwipeTracker::new(2.0);
        assert_eq!(swipe.drag(10.0), None);

        swipe.begin(100.0, 400.0);
        assert!(swipe.is_dragging());
        assert_eq!(swipe.drag(70.0), Some(460.0));
        assert_eq!(swipe.drag(150.0), Some(300.0));

        swipe.end();
        assert_eq!(swipe.drag(150.0), None);
    }

    #[test]
    fn test_swipe_from_left_edge() {
        let mut swipe = SwipeTracker::new(2.0);
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.drag(-20.0), Some(40.0));
    }
}
