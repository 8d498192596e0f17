//! Step-after geometry: segment sequence → staircase polyline, clipped to a
//! domain window.

use super::{BandScale, DomainWindow};
use crate::model::{ActivitySegment, ActivityStatus};

/// One horizontal run of the step function: a status held from `start` to
/// `end` (hours), possibly trimmed to the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRun {
    pub status: ActivityStatus,
    pub start: f64,
    pub end: f64,
}

impl StepRun {
    /// Vertical band position of this run.
    #[must_use]
    pub fn band(&self) -> f64 {
        BandScale::position(self.status)
    }
}

/// Clip the segment sequence to a domain window, producing the horizontal
/// runs visible in it.
///
/// Step-after semantics: each segment's value holds from its start until the
/// next segment's start, so a segment contributes exactly its own interval.
/// Segments wholly outside the window are dropped; boundary segments are
/// trimmed to the window edges. A degenerate window (`x0 >= x1`) yields
/// nothing rather than feeding an inverted range into a scale.
#[must_use]
pub fn visible_runs(segments: &[ActivitySegment], window: DomainWindow) -> Vec<StepRun> {
    if !window.is_valid() {
        return Vec::new();
    }

    segments
        .iter()
        .filter_map(|seg| {
            let start = seg.start_hours.max(window.x0);
            let end = seg.end_hours.min(window.x1);
            (end - start > 0.0).then_some(StepRun {
                status: seg.status,
                start,
                end,
            })
        })
        .collect()
}

/// Expand runs into the vertex list of a step-after staircase.
///
/// Each run contributes its two horizontal endpoints; where adjacent runs
/// share a boundary the duplicated x-coordinate forms the vertical riser.
#[must_use]
pub fn staircase(runs: &[StepRun]) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(runs.len() * 2);

    for run in runs {
        let y = run.band();
        points.push((run.start, y));
        points.push((run.end, y));
    }

    points
}
