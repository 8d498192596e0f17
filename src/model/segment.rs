//! Activity segment: one contiguous interval with a single status.

use super::time::{compact_duration, format_clock, humanize_hours};
use super::ActivityStatus;
use serde::{Deserialize, Serialize};

/// One interval of a driver's day.
///
/// Bounds are fractional hours since midnight in `[0, 24]`. The derived
/// presentation strings (clock, humanized duration, compact duration) are
/// pure functions of the numeric bounds, never independent state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySegment {
    pub status: ActivityStatus,
    pub start_hours: f64,
    pub end_hours: f64,
    /// Ordinal position in the sequence; reassigned during ingestion.
    #[serde(default)]
    pub id: usize,
}

impl ActivitySegment {
    #[must_use]
    pub fn new(status: ActivityStatus, start_hours: f64, end_hours: f64) -> Self {
        Self {
            status,
            start_hours,
            end_hours,
            id: 0,
        }
    }

    /// Duration in fractional hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.end_hours - self.start_hours
    }

    /// Start bound as a `HH:MM` clock string.
    #[must_use]
    pub fn start_clock(&self) -> String {
        format_clock(self.start_hours)
    }

    /// End bound as a `HH:MM` clock string.
    #[must_use]
    pub fn end_clock(&self) -> String {
        format_clock(self.end_hours)
    }

    /// Humanized duration, e.g. "5 hours 34 minutes".
    #[must_use]
    pub fn humanized_duration(&self) -> String {
        humanize_hours(self.duration_hours())
    }

    /// Compact duration, e.g. "5h 34m".
    #[must_use]
    pub fn compact_duration(&self) -> String {
        compact_duration(self.duration_hours())
    }
}
