//! Brush selection: transient pixel-space drag state on the overview strip.

use super::LinearScale;

/// Draggable selection region over the overview chart.
///
/// All state is pixel-space and owned by the overview controller; nothing
/// here is persisted. The selection is keyed to the overview width: any
/// width change discards it wholesale via [`BrushSelection::reset_for_width`]
/// because the pixel↔time mapping is width-dependent and a partial-width
/// selection would go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushSelection {
    width: f64,
    x0: f64,
    x1: f64,
    anchor: Option<f64>,
}

impl BrushSelection {
    /// Create a selection spanning the full pixel width (anchor edge at 0,
    /// far edge at the current width). Negative widths collapse to zero.
    #[must_use]
    pub fn new(width: f64) -> Self {
        let width = width.max(0.0);
        Self {
            width,
            x0: 0.0,
            x1: width,
            anchor: None,
        }
    }

    /// The pixel↔time scale for the current width.
    #[must_use]
    pub fn scale(&self) -> LinearScale {
        LinearScale::new(self.width)
    }

    /// Current pixel bounds `(x0, x1)`.
    #[must_use]
    pub fn pixel_bounds(&self) -> (f64, f64) {
        (self.x0, self.x1)
    }

    /// Current bounds mapped to hours through the inverse scale.
    #[must_use]
    pub fn time_bounds(&self) -> (f64, f64) {
        let scale = self.scale();
        (scale.invert(self.x0), scale.invert(self.x1))
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Reset to the full-width initial position. Cancels any in-progress
    /// gesture; does not itself report bounds (the domain window is only
    /// changed by drag updates).
    pub fn reset_for_width(&mut self, width: f64) {
        *self = Self::new(width);
    }

    /// Anchor a new drag gesture at a pixel position.
    pub fn begin(&mut self, px: f64) {
        let px = self.clamp_px(px);
        self.anchor = Some(px);
        self.x0 = px;
        self.x1 = px;
    }

    /// Update an in-progress gesture, returning the new pixel bounds.
    ///
    /// Returns `None` when no gesture is active (a stray move event, or a
    /// gesture already aborted) so the caller never applies a partial bound.
    pub fn drag_to(&mut self, px: f64) -> Option<(f64, f64)> {
        let anchor = self.anchor?;
        let px = self.clamp_px(px);
        self.x0 = anchor.min(px);
        self.x1 = anchor.max(px);
        Some((self.x0, self.x1))
    }

    /// Finish the gesture, keeping the selected bounds.
    pub fn release(&mut self) {
        self.anchor = None;
    }

    /// Abandon the gesture. The selection keeps its last committed bounds
    /// and no domain update is produced.
    pub fn abort(&mut self) {
        self.anchor = None;
    }

    /// Shift the whole selection by `delta` pixels (keyboard panning),
    /// returning the new pixel bounds. The selection keeps its span and
    /// stops at the strip edges.
    pub fn nudge(&mut self, delta: f64) -> (f64, f64) {
        let span = self.x1 - self.x0;
        let x0 = (self.x0 + delta).clamp(0.0, (self.width - span).max(0.0));
        self.x0 = x0;
        self.x1 = x0 + span;
        (self.x0, self.x1)
    }

    /// Grow or shrink the far edge by `delta` pixels (keyboard resizing),
    /// returning the new pixel bounds. The span never collapses below one
    /// pixel so the window stays plottable.
    pub fn grow(&mut self, delta: f64) -> (f64, f64) {
        self.x1 = (self.x1 + delta).clamp(self.x0 + 1.0, self.width.max(self.x0 + 1.0));
        (self.x0, self.x1)
    }

    fn clamp_px(&self, px: f64) -> f64 {
        px.clamp(0.0, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_spans_full_width() {
        let brush = BrushSelection::new(120.0);
        assert_eq!(brush.pixel_bounds(), (0.0, 120.0));

        let (t0, t1) = brush.time_bounds();
        assert!((t0 - 0.0).abs() < 1e-9);
        assert!((t1 - 24.0).abs() < 1e-9);
    }

    #[test]
    fn reset_after_resize_maps_to_full_domain() {
        let mut brush = BrushSelection::new(120.0);
        brush.begin(10.0);
        brush.drag_to(40.0);
        brush.release();

        brush.reset_for_width(80.0);
        assert_eq!(brush.pixel_bounds(), (0.0, 80.0));
        let (t0, t1) = brush.time_bounds();
        assert!((t0 - 0.0).abs() < 1e-9);
        assert!((t1 - 24.0).abs() < 1e-9);
    }

    #[test]
    fn drag_orders_bounds_around_anchor() {
        let mut brush = BrushSelection::new(100.0);
        brush.begin(60.0);

        assert_eq!(brush.drag_to(80.0), Some((60.0, 80.0)));
        // Dragging back across the anchor swaps the edges.
        assert_eq!(brush.drag_to(20.0), Some((20.0, 60.0)));
    }

    #[test]
    fn drag_clamps_to_strip_edges() {
        let mut brush = BrushSelection::new(100.0);
        brush.begin(50.0);
        assert_eq!(brush.drag_to(250.0), Some((50.0, 100.0)));
        assert_eq!(brush.drag_to(-30.0), Some((0.0, 50.0)));
    }

    #[test]
    fn aborted_gesture_produces_no_bounds() {
        let mut brush = BrushSelection::new(100.0);
        brush.begin(10.0);
        brush.abort();
        assert_eq!(brush.drag_to(90.0), None);
        assert!(!brush.is_dragging());
    }

    #[test]
    fn move_without_gesture_is_ignored() {
        let mut brush = BrushSelection::new(100.0);
        assert_eq!(brush.drag_to(42.0), None);
        assert_eq!(brush.pixel_bounds(), (0.0, 100.0));
    }

    #[test]
    fn zero_width_strip_is_inert() {
        let mut brush = BrushSelection::new(0.0);
        assert_eq!(brush.pixel_bounds(), (0.0, 0.0));
        brush.begin(5.0);
        assert_eq!(brush.drag_to(9.0), Some((0.0, 0.0)));
        assert_eq!(brush.time_bounds(), (0.0, 0.0));
    }

    #[test]
    fn nudge_preserves_span_within_edges() {
        let mut brush = BrushSelection::new(100.0);
        brush.begin(20.0);
        brush.drag_to(40.0);
        brush.release();

        assert_eq!(brush.nudge(10.0), (30.0, 50.0));
        assert_eq!(brush.nudge(1000.0), (80.0, 100.0));
        assert_eq!(brush.nudge(-1000.0), (0.0, 20.0));
    }

    #[test]
    fn grow_never_collapses_span() {
        let mut brush = BrushSelection::new(100.0);
        brush.begin(20.0);
        brush.drag_to(40.0);
        brush.release();

        assert_eq!(brush.grow(-100.0), (20.0, 21.0));
        assert_eq!(brush.grow(500.0), (20.0, 100.0));
    }
}
