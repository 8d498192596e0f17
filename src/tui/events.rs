//! Event plumbing and input handling for the timeline TUI.

use super::app::App;
use super::theme::toggle_theme;
use crate::config::TuiPreferences;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler.
///
/// A background thread polls crossterm and forwards events over a channel;
/// the main loop consumes them synchronously, so all state transitions stay
/// on one thread.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(100);

        let event_tx = tx.clone();
        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if event_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => {
                            if event_tx.send(Event::Mouse(mouse)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if event_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }
}

impl EventHandler {
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle key events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    app.clear_status_message();

    if app.show_help {
        // Any key closes the help overlay.
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('t') => {
            let name = toggle_theme();
            let prefs = TuiPreferences {
                theme: name.to_string(),
            };
            if prefs.save().is_err() {
                tracing::warn!("failed to persist theme preference");
            }
            app.set_status_message(format!("theme: {name}"));
        }
        KeyCode::Char('h') | KeyCode::Left => app.pan_selection(-1),
        KeyCode::Char('l') | KeyCode::Right => app.pan_selection(1),
        KeyCode::Char('+') | KeyCode::Char('L') => app.resize_selection(1),
        KeyCode::Char('-') | KeyCode::Char('H') => app.resize_selection(-1),
        KeyCode::Char('r') => {
            app.reset_zoom();
            app.set_status_message("zoom reset to full day");
        }
        _ => {}
    }
}

/// Handle mouse events: press/move/release on the overview strip drives the
/// brush selection.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // A press anywhere outside the strip is not a gesture.
            if let Some(px) = app.overview_px(mouse.column, mouse.row) {
                app.brush_begin(px);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.brush.is_dragging() {
                // Track the column even when the pointer wanders off the
                // strip vertically; the brush clamps to the strip edges.
                if let Some(px) = strip_column(app, mouse.column) {
                    app.brush_drag(px);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.brush.is_dragging() {
                if app.overview_px(mouse.column, mouse.row).is_some() {
                    app.brush_release();
                } else {
                    // Released outside the strip: the gesture is abandoned
                    // and must not produce a domain update.
                    app.brush_abort();
                }
            }
        }
        _ => {}
    }
}

/// Handle a terminal resize: any in-progress gesture is invalidated. The
/// brush itself is re-keyed to the new width during the next layout pass.
pub fn handle_resize(app: &mut App) {
    if app.brush.is_dragging() {
        app.brush_abort();
    }
}

/// Strip-local pixel for a terminal column, ignoring the row (used while a
/// drag is active).
fn strip_column(app: &App, column: u16) -> Option<f64> {
    let plot = app.overview_plot?;
    Some(f64::from(column.saturating_sub(plot.x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActivityTimeline;
    use crossterm::event::{KeyModifiers, MouseEventKind};
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::new(ActivityTimeline::demo(), "test".to_string());
        app.sync_overview_plot(Rect::new(0, 20, 120, 6));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn full_drag_gesture_zooms() {
        let mut app = app();
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 21),
        );
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Drag(MouseButton::Left), 60, 21),
        );
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Up(MouseButton::Left), 60, 21),
        );

        let window = app.window();
        assert!((window.x0 - 6.0).abs() < 1e-9);
        assert!((window.x1 - 12.0).abs() < 1e-9);
        assert!(!app.brush.is_dragging());
    }

    #[test]
    fn press_outside_strip_starts_nothing() {
        let mut app = app();
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 2),
        );
        assert!(!app.brush.is_dragging());
    }

    #[test]
    fn release_outside_strip_aborts() {
        let mut app = app();
        let before = app.window();

        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 21),
        );
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Up(MouseButton::Left), 30, 2),
        );

        assert!(!app.brush.is_dragging());
        assert_eq!(app.window(), before);
    }

    #[test]
    fn resize_aborts_in_progress_gesture() {
        let mut app = app();
        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 30, 21),
        );
        assert!(app.brush.is_dragging());

        handle_resize(&mut app);
        assert!(!app.brush.is_dragging());
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut app = app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
        );
        assert!(app.show_help);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        );
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
