//! Coordinate scales: linear pixel↔time mapping and a categorical band scale.

use crate::model::{ActivityStatus, DOMAIN_HOURS};

/// Monotonic linear mapping between a pixel range `[0, width]` and the fixed
/// time domain `[0, 24]`.
///
/// The width is floored at zero on construction: during initial layout the
/// host reports a width of zero (or the margins exceed the container), and
/// the scale must collapse to a degenerate `[0, 0]` range instead of going
/// negative or dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    width: f64,
}

impl LinearScale {
    /// Create a scale for the given pixel width. Negative widths are treated
    /// as the transient zero-width layout state.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width: width.max(0.0),
        }
    }

    /// The (floored) pixel width of the range.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Map a time value in hours to a pixel position.
    #[must_use]
    pub fn apply(&self, hours: f64) -> f64 {
        hours / DOMAIN_HOURS * self.width
    }

    /// Map a pixel position back to hours. A degenerate scale maps every
    /// pixel to the domain start.
    #[must_use]
    pub fn invert(&self, px: f64) -> f64 {
        if self.width == 0.0 {
            0.0
        } else {
            px / self.width * DOMAIN_HOURS
        }
    }
}

/// Discrete-category scale mapping the fixed status order to evenly spaced
/// vertical positions.
///
/// Row 0 is the bottom band. The order comes from
/// [`ActivityStatus::DISPLAY_ORDER`] and is never data-driven.
#[derive(Debug, Clone, Copy)]
pub struct BandScale;

impl BandScale {
    /// Number of bands.
    pub const LEN: usize = ActivityStatus::DISPLAY_ORDER.len();

    /// Vertical position of a status, as a band index in `0..LEN`.
    #[must_use]
    pub fn position(status: ActivityStatus) -> f64 {
        status.band_index() as f64
    }

    /// The categories in display order, bottom to top.
    #[must_use]
    pub fn categories() -> &'static [ActivityStatus] {
        &ActivityStatus::DISPLAY_ORDER
    }
}
