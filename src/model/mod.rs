//! Data model for driver-activity timelines.
//!
//! A recorded day is normalized into an [`ActivityTimeline`]: an ordered,
//! contiguous sequence of [`ActivitySegment`]s spanning exactly the 24-hour
//! domain. Both the category set and its display order are part of the
//! interface contract, not configuration.

mod activity;
mod segment;
mod timeline;
pub mod time;

pub use activity::*;
pub use segment::*;
pub use timeline::*;
