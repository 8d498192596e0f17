//! Application state for the timeline TUI.
//!
//! `App` owns the one piece of mutable view state (the domain window) and
//! the transient brush selection. All mutation happens synchronously inside
//! the event loop; the render pass only reads.

use crate::chart::{BrushSelection, DomainState, DomainWindow};
use crate::model::{ActivityTimeline, DaySheet};
use ratatui::layout::Rect;

/// Pixel step for keyboard-driven brush panning/resizing.
const KEY_STEP_PX: f64 = 2.0;

/// Top-level TUI application state.
pub struct App {
    /// Immutable input data for the session.
    pub timeline: ActivityTimeline,
    /// Header line: driver / date, when the day sheet carried them.
    pub title: String,

    /// The single live domain window; written only by brush updates.
    pub domain: DomainState,
    /// Pixel-space brush selection on the overview strip.
    pub brush: BrushSelection,

    /// Inner plot area of the overview strip from the last render, used to
    /// translate terminal mouse coordinates into strip-local pixels.
    pub overview_plot: Option<Rect>,

    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub tick: u64,
}

impl App {
    #[must_use]
    pub fn new(timeline: ActivityTimeline, title: String) -> Self {
        Self {
            timeline,
            title,
            domain: DomainState::new(),
            brush: BrushSelection::new(0.0),
            overview_plot: None,
            should_quit: false,
            show_help: false,
            status_message: None,
            tick: 0,
        }
    }

    /// Build an app from a parsed day sheet.
    pub fn from_day_sheet(sheet: DaySheet) -> crate::error::Result<Self> {
        let title = match (&sheet.driver, &sheet.recorded_on) {
            (Some(driver), Some(date)) => format!("{driver} — {date}"),
            (Some(driver), None) => driver.clone(),
            (None, Some(date)) => date.to_string(),
            (None, None) => "driver activity".to_string(),
        };
        let timeline = sheet.into_timeline()?;
        Ok(Self::new(timeline, title))
    }

    /// The window the detail chart must show right now.
    #[must_use]
    pub fn window(&self) -> DomainWindow {
        self.domain.current()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Record the overview plot area from the layout pass.
    ///
    /// The brush is keyed to the strip width: any width change (first layout
    /// settling from zero, terminal resize) resets the selection to the full
    /// strip and aborts an in-progress gesture, because the pixel↔time
    /// mapping just changed under it. The domain window is left alone.
    pub fn sync_overview_plot(&mut self, plot: Rect) {
        let width = f64::from(plot.width);
        if (self.brush.scale().width() - width).abs() > f64::EPSILON {
            self.brush.reset_for_width(width);
        }
        self.overview_plot = Some(plot);
    }

    /// Translate an absolute terminal column into a strip-local pixel, if the
    /// position falls inside the overview plot.
    #[must_use]
    pub fn overview_px(&self, column: u16, row: u16) -> Option<f64> {
        let plot = self.overview_plot?;
        let inside = column >= plot.x
            && column < plot.x.saturating_add(plot.width)
            && row >= plot.y
            && row < plot.y.saturating_add(plot.height);
        inside.then(|| f64::from(column - plot.x))
    }

    /// Begin a drag gesture at a strip-local pixel.
    pub fn brush_begin(&mut self, px: f64) {
        self.brush.begin(px);
    }

    /// Drag update: recompute the domain window from the selection's pixel
    /// bounds through the inverse scale. An inactive gesture reports no
    /// bounds and therefore changes nothing.
    pub fn brush_drag(&mut self, px: f64) {
        let bounds = self.brush.drag_to(px).map(|(p0, p1)| {
            let scale = self.brush.scale();
            (scale.invert(p0), scale.invert(p1))
        });
        self.domain.set_from_brush(bounds);
    }

    /// Pointer released: the gesture is complete, bounds stay as committed.
    pub fn brush_release(&mut self) {
        self.brush.release();
    }

    /// Abort the in-progress gesture (release outside the strip, resize).
    pub fn brush_abort(&mut self) {
        self.brush.abort();
    }

    /// Keyboard: pan the selection left/right and re-derive the window.
    pub fn pan_selection(&mut self, direction: i8) {
        let (p0, p1) = self.brush.nudge(f64::from(direction) * KEY_STEP_PX);
        self.apply_pixel_bounds(p0, p1);
    }

    /// Keyboard: widen/narrow the selection's far edge and re-derive the
    /// window.
    pub fn resize_selection(&mut self, direction: i8) {
        let (p0, p1) = self.brush.grow(f64::from(direction) * KEY_STEP_PX);
        self.apply_pixel_bounds(p0, p1);
    }

    /// Keyboard: reset the selection to the whole strip and the window to
    /// the whole day.
    pub fn reset_zoom(&mut self) {
        let width = self.brush.scale().width();
        self.brush.reset_for_width(width);
        self.domain.reset();
    }

    fn apply_pixel_bounds(&mut self, p0: f64, p1: f64) {
        let scale = self.brush.scale();
        self.domain
            .set_from_brush(Some((scale.invert(p0), scale.invert(p1))));
    }
}
