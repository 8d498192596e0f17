//! Normalized activity timeline and its ingestion rules.

use super::{ActivitySegment, ActivityStatus};
use crate::error::{DataErrorKind, Result, TachoError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Width of the time domain in hours.
pub const DOMAIN_HOURS: f64 = 24.0;

/// Tolerance for comparing recorded hour values. Recorded data carries
/// repeating decimals (minutes expressed in fractional hours), so boundary
/// checks cannot use exact equality.
pub const HOURS_EPSILON: f64 = 1e-6;

/// Ordered, contiguous activity segments spanning exactly `[0, 24]`.
///
/// Immutable after ingestion: no component may add, remove, or reorder
/// segments. The rendering layer calls the accessors many times per frame,
/// so they are plain field reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityTimeline {
    segments: Vec<ActivitySegment>,
}

impl ActivityTimeline {
    /// Validate and normalize a raw segment sequence.
    ///
    /// Rules:
    /// - the set of statuses is closed (enforced upstream by the type),
    /// - every segment satisfies `0 <= start < end <= 24`,
    /// - adjacent segments are contiguous (`end[i] == start[i+1]`),
    /// - the sequence starts at 0 and ends at 24.
    ///
    /// Recorded data sometimes closes the series with a redundant terminal
    /// record (a duplicate of the prior segment's bounds, or a zero-width
    /// sentinel at hour 24 — an accumulation-loop artifact). Such records are
    /// dropped with a warning rather than rejected.
    pub fn from_segments(mut segments: Vec<ActivitySegment>) -> Result<Self> {
        absorb_terminal_artifacts(&mut segments);

        if segments.is_empty() {
            return Err(TachoError::data("activity sequence", DataErrorKind::Empty));
        }

        for (i, seg) in segments.iter().enumerate() {
            if seg.start_hours < -HOURS_EPSILON || seg.end_hours > DOMAIN_HOURS + HOURS_EPSILON {
                return Err(TachoError::data(
                    "activity sequence",
                    DataErrorKind::OutOfDomain {
                        index: i,
                        start: seg.start_hours,
                        end: seg.end_hours,
                    },
                ));
            }
            if seg.start_hours >= seg.end_hours {
                return Err(TachoError::data(
                    "activity sequence",
                    DataErrorKind::InvertedBounds {
                        index: i,
                        start: seg.start_hours,
                        end: seg.end_hours,
                    },
                ));
            }
        }

        let first = &segments[0];
        if first.start_hours.abs() > HOURS_EPSILON {
            return Err(TachoError::data(
                "activity sequence",
                DataErrorKind::OpenStart {
                    start: first.start_hours,
                },
            ));
        }

        for i in 1..segments.len() {
            let prev_end = segments[i - 1].end_hours;
            let start = segments[i].start_hours;
            if (prev_end - start).abs() > HOURS_EPSILON {
                return Err(TachoError::data(
                    "activity sequence",
                    DataErrorKind::Gap {
                        index: i - 1,
                        next: i,
                        prev_end,
                        start,
                    },
                ));
            }
        }

        let last_end = segments.last().map(|s| s.end_hours).unwrap_or(0.0);
        if (last_end - DOMAIN_HOURS).abs() > HOURS_EPSILON {
            return Err(TachoError::data(
                "activity sequence",
                DataErrorKind::OpenEnd { end: last_end },
            ));
        }

        // Ids are ordinal positions; whatever the input carried is replaced.
        for (i, seg) in segments.iter_mut().enumerate() {
            seg.id = i;
        }

        Ok(Self { segments })
    }

    /// The ordered segment sequence.
    #[must_use]
    pub fn segments(&self) -> &[ActivitySegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// X-coordinate accessor: a step's leading edge is the segment start.
    #[must_use]
    pub fn position_of(segment: &ActivitySegment) -> f64 {
        segment.start_hours
    }

    /// Y-coordinate accessor: the categorical status.
    #[must_use]
    pub fn status_of(segment: &ActivitySegment) -> ActivityStatus {
        segment.status
    }

    /// Total recorded hours per status, in display order.
    #[must_use]
    pub fn totals_by_status(&self) -> Vec<(ActivityStatus, f64)> {
        ActivityStatus::DISPLAY_ORDER
            .iter()
            .map(|status| {
                let total = self
                    .segments
                    .iter()
                    .filter(|s| s.status == *status)
                    .map(ActivitySegment::duration_hours)
                    .sum();
                (*status, total)
            })
            .collect()
    }

    /// The built-in demo day (a real recorded sample, including the
    /// redundant terminal record ingestion absorbs).
    #[must_use]
    pub fn demo() -> Self {
        let segments = demo_segments();
        Self::from_segments(segments).expect("demo dataset is valid")
    }
}

/// A recorded day as it arrives on the wire: raw activities plus optional
/// export metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_on: Option<NaiveDate>,
    pub activities: Vec<ActivitySegment>,
}

impl DaySheet {
    /// Parse a day sheet from JSON. Accepts either the full wrapper object
    /// or a bare segment array.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let trimmed = input.trim_start();
        if trimmed.starts_with('[') {
            let activities: Vec<ActivitySegment> = serde_json::from_str(input)?;
            Ok(Self {
                driver: None,
                recorded_on: None,
                activities,
            })
        } else {
            Ok(serde_json::from_str(input)?)
        }
    }

    /// Validate the raw activities into a normalized timeline.
    pub fn into_timeline(self) -> Result<ActivityTimeline> {
        ActivityTimeline::from_segments(self.activities)
    }

    /// The built-in demo day sheet.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            driver: None,
            recorded_on: None,
            activities: demo_segments(),
        }
    }
}

/// Drop trailing records that merely restate the end of the series: an exact
/// duplicate of the previous segment's bounds, or a zero-width sentinel at
/// the domain boundary.
fn absorb_terminal_artifacts(segments: &mut Vec<ActivitySegment>) {
    while segments.len() >= 2 {
        let last = &segments[segments.len() - 1];
        let prev = &segments[segments.len() - 2];

        let duplicate_of_prev = (last.start_hours - prev.start_hours).abs() <= HOURS_EPSILON
            && (last.end_hours - prev.end_hours).abs() <= HOURS_EPSILON;
        let zero_width_sentinel = (last.end_hours - last.start_hours).abs() <= HOURS_EPSILON
            && (last.end_hours - DOMAIN_HOURS).abs() <= HOURS_EPSILON;

        if duplicate_of_prev || zero_width_sentinel {
            tracing::warn!(
                start = last.start_hours,
                end = last.end_hours,
                "dropping redundant terminal activity record"
            );
            segments.pop();
        } else {
            break;
        }
    }
}

/// The sample day from a real tachograph export: status plus start/end in
/// fractional hours. The final row duplicates the bounds of the one before
/// it; ingestion is expected to absorb it.
#[rustfmt::skip]
const DEMO_DAY: &[(ActivityStatus, f64, f64)] = &[
    (ActivityStatus::Rest,      0.0,                 5.566666666666666),
    (ActivityStatus::Rest,      5.566666666666666,   5.616666666666666),
    (ActivityStatus::Driving,   5.616666666666666,   5.8),
    (ActivityStatus::OtherWork, 5.8,                 6.016666666666667),
    (ActivityStatus::Driving,   6.016666666666667,   6.033333333333333),
    (ActivityStatus::OtherWork, 6.033333333333333,   6.116666666666666),
    (ActivityStatus::Driving,   6.116666666666666,   6.916666666666667),
    (ActivityStatus::OtherWork, 6.916666666666667,   7.0),
    (ActivityStatus::Driving,   7.0,                 8.316666666666666),
    (ActivityStatus::OtherWork, 8.316666666666666,   8.35),
    (ActivityStatus::Driving,   8.35,                8.933333333333334),
    (ActivityStatus::OtherWork, 8.933333333333334,   8.966666666666667),
    (ActivityStatus::Driving,   8.966666666666667,   9.033333333333333),
    (ActivityStatus::Rest,      9.033333333333333,   9.133333333333333),
    (ActivityStatus::Driving,   9.133333333333333,   9.15),
    (ActivityStatus::OtherWork, 9.15,                9.316666666666666),
    (ActivityStatus::Rest,      9.316666666666666,   9.583333333333334),
    (ActivityStatus::Driving,   9.583333333333334,   9.616666666666667),
    (ActivityStatus::Rest,      9.616666666666667,   13.133333333333333),
    (ActivityStatus::OtherWork, 13.133333333333333,  13.166666666666666),
    (ActivityStatus::Driving,   13.166666666666666,  14.283333333333333),
    (ActivityStatus::Rest,      14.283333333333333,  15.2),
    (ActivityStatus::Driving,   15.2,                15.216666666666667),
    (ActivityStatus::OtherWork, 15.216666666666667,  15.366666666666667),
    (ActivityStatus::Driving,   15.366666666666667,  15.383333333333333),
    (ActivityStatus::Rest,      15.383333333333333,  16.066666666666666),
    (ActivityStatus::Driving,   16.066666666666666,  18.333333333333332),
    (ActivityStatus::OtherWork, 18.333333333333332,  18.383333333333333),
    (ActivityStatus::Driving,   18.383333333333333,  18.566666666666666),
    (ActivityStatus::Rest,      18.566666666666666,  24.0),
    (ActivityStatus::Rest,      18.566666666666666,  24.0),
];

fn demo_segments() -> Vec<ActivitySegment> {
    DEMO_DAY
        .iter()
        .map(|(status, start, end)| ActivitySegment::new(*status, *start, *end))
        .collect()
}
