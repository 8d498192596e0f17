//! Driver activity status categories.

use crate::error::{DataErrorKind, Result, TachoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical activity status recorded by a tachograph.
///
/// The set is closed: a segment with any other status fails ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    Available,
    Driving,
    Rest,
    OtherWork,
    Unknown,
}

impl ActivityStatus {
    /// Fixed vertical display order, bottom to top.
    ///
    /// This is a presentation contract (not alphabetical and not data-driven)
    /// so each status keeps a stable row across renders.
    pub const DISPLAY_ORDER: [ActivityStatus; 5] = [
        ActivityStatus::Unknown,
        ActivityStatus::Rest,
        ActivityStatus::Available,
        ActivityStatus::OtherWork,
        ActivityStatus::Driving,
    ];

    /// Position of this status in [`Self::DISPLAY_ORDER`].
    #[must_use]
    pub fn band_index(self) -> usize {
        Self::DISPLAY_ORDER
            .iter()
            .position(|s| *s == self)
            .unwrap_or(0)
    }

    /// Wire/display name (the recorded form).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityStatus::Available => "AVAILABLE",
            ActivityStatus::Driving => "DRIVING",
            ActivityStatus::Rest => "REST",
            ActivityStatus::OtherWork => "OTHER_WORK",
            ActivityStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = TachoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AVAILABLE" => Ok(ActivityStatus::Available),
            "DRIVING" => Ok(ActivityStatus::Driving),
            "REST" => Ok(ActivityStatus::Rest),
            "OTHER_WORK" => Ok(ActivityStatus::OtherWork),
            "UNKNOWN" => Ok(ActivityStatus::Unknown),
            other => Err(TachoError::data(
                "parsing activity status",
                DataErrorKind::UnknownStatus {
                    value: other.to_string(),
                },
            )),
        }
    }
}
