//! Interactive terminal UI using ratatui.
//!
//! Two linked views over one dataset: a detail chart showing the activity
//! step function over the current domain window, and an overview strip with
//! a draggable brush selection that chooses that window. Information flows
//! one way only: overview → domain state → detail.

mod app;
mod events;
pub mod theme;
mod ui;

pub use app::App;
pub use events::{handle_key_event, handle_mouse_event, handle_resize, Event, EventHandler};
pub use theme::{colors, current_theme_name, set_theme, toggle_theme, ColorScheme, Theme};
pub use ui::run_tui;
