//! Chart core: domain-window state, coordinate scales, brush selection,
//! and step-after geometry.
//!
//! This is the linked overview/detail machinery. Control flows one way:
//! drag on the overview → pixel bounds → time bounds (inverse linear scale)
//! → domain-window update → detail re-render. The detail view never feeds
//! back into the overview.

mod brush;
mod domain;
mod scale;
mod step;

pub use brush::*;
pub use domain::*;
pub use scale::*;
pub use step::*;
