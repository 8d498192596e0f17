//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each implements the business logic
//! for one subcommand.

mod view;

pub use view::{load_day_sheet, run_view, ViewConfig};
