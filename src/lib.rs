//! **tacho-view: a tachograph driver-activity timeline viewer.**
//!
//! Renders one recorded day of driver activity (a "tachograph" chart) as a
//! step function over the 24-hour domain, in a terminal UI with two linked
//! views: a detail chart and an overview strip with a draggable brush
//! selection. Dragging on the overview chooses the visible time window of
//! the detail chart.
//!
//! ## Core concepts & modules
//!
//! - **[`model`]**: the normalized [`ActivityTimeline`] — an ordered,
//!   contiguous sequence of [`ActivitySegment`]s spanning `[0, 24]` hours,
//!   with a closed status set and validated ingestion from JSON day sheets.
//! - **[`chart`]**: the linked overview/detail machinery: the live
//!   [`DomainWindow`], the pixel↔time [`LinearScale`], the
//!   [`BrushSelection`] drag state, and step-after clipping.
//! - **[`tui`]**: the ratatui front end (event loop, themes, rendering).
//! - **[`reports`]**: plain-text and JSON output for non-interactive use.
//!
//! ## Getting started
//!
//! ```no_run
//! use tacho_view::model::DaySheet;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sheet = DaySheet::demo();
//!     let timeline = sheet.into_timeline()?;
//!
//!     for segment in timeline.segments() {
//!         println!(
//!             "{} – {}  {}",
//!             segment.start_clock(),
//!             segment.end_clock(),
//!             segment.status
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Zooming programmatically
//!
//! The domain window is only ever written through the brush path:
//!
//! ```
//! use tacho_view::chart::{BrushSelection, DomainState};
//!
//! let mut brush = BrushSelection::new(120.0);
//! let mut domain = DomainState::new();
//!
//! brush.begin(30.0);
//! let bounds = brush.drag_to(60.0).map(|(p0, p1)| {
//!     let scale = brush.scale();
//!     (scale.invert(p0), scale.invert(p1))
//! });
//! domain.set_from_brush(bounds);
//!
//! assert_eq!(domain.current().x0, 6.0);
//! assert_eq!(domain.current().x1, 12.0);
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod reports;
pub mod tui;

pub use chart::{BrushSelection, DomainState, DomainWindow, LinearScale};
pub use error::{Result, TachoError};
pub use model::{ActivitySegment, ActivityStatus, ActivityTimeline, DaySheet};
