//! Main UI rendering: detail chart, overview/brush strip, and chrome.

use super::app::App;
use super::events::{handle_key_event, handle_mouse_event, handle_resize, Event, EventHandler};
use super::theme::{colors, render_footer_hints, set_theme, Theme};
use crate::chart::{staircase, visible_runs, BandScale, DomainWindow};
use crate::config::TuiPreferences;
use crate::model::time::format_clock;
use crate::model::{ActivityTimeline, DOMAIN_HOURS};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Clear, Paragraph,
    },
};
use std::io::{self, stdout};

/// Shared horizontal margins so the detail and overview time axes align.
const GUTTER_WIDTH: u16 = 6;
const MARGIN_RIGHT: u16 = 2;
/// Fixed height of the overview/brush strip.
const OVERVIEW_HEIGHT: u16 = 7;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 16;

/// Vertical canvas bounds: the five bands plus headroom so the outer rows
/// are not clipped by the Braille grid.
const Y_BOUNDS: [f64; 2] = [-0.6, 4.6];

/// Run the TUI application.
pub fn run_tui(app: &mut App) -> io::Result<()> {
    // Load saved theme preference
    let prefs = TuiPreferences::load();
    set_theme(Theme::from_name(&prefs.theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let events = EventHandler::default();
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => handle_resize(app),
            Event::Tick => {
                app.tick += 1;
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function.
fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let scheme = colors();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small: need at least {MIN_WIDTH}x{MIN_HEIGHT}"
        ))
        .style(Style::default().fg(scheme.warning))
        .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(1),               // Top time axis
            Constraint::Min(8),                  // Detail chart
            Constraint::Length(OVERVIEW_HEIGHT), // Overview/brush strip
            Constraint::Length(1),               // Status bar
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    let window = app.window();
    render_time_axis(frame, margined(chunks[1]), window);
    render_detail(frame, chunks[2], app, window);
    render_overview(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);
    render_footer(frame, chunks[5]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Apply the shared horizontal margins to a row.
fn margined(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GUTTER_WIDTH),
            Constraint::Min(0),
            Constraint::Length(MARGIN_RIGHT),
        ])
        .split(area);
    chunks[1]
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let window = app.window();

    let range = if window.is_valid() {
        format!(
            "{} – {}",
            format_clock(window.x0),
            format_clock(window.x1.min(DOMAIN_HOURS))
        )
    } else {
        "no visible range".to_string()
    };

    let title = truncate_str(&app.title, usize::from(area.width / 3));
    let line = Line::from(vec![
        Span::styled(
            " tacho-view ",
            Style::default().fg(scheme.primary).bold(),
        ),
        Span::styled("│ ", Style::default().fg(scheme.muted)),
        Span::styled(title, Style::default().fg(scheme.text)),
        Span::styled("  │  ", Style::default().fg(scheme.muted)),
        Span::styled("visible: ", Style::default().fg(scheme.text_muted)),
        Span::styled(range, Style::default().fg(scheme.accent)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Top-edge time axis: `HH:MM` labels at evenly spaced positions across the
/// current window.
fn render_time_axis(frame: &mut Frame, area: Rect, window: DomainWindow) {
    let scheme = colors();
    if area.width == 0 || !window.is_valid() {
        return;
    }

    let tick_count = usize::from(area.width / 12).clamp(2, 8);
    let mut row = vec![b' '; area.width as usize];

    for i in 0..=tick_count {
        let frac = i as f64 / tick_count as f64;
        let hours = window.x0 + frac * window.width();
        let label = format_clock(hours);
        let col = (frac * f64::from(area.width.saturating_sub(1))) as usize;
        let start = col.min(area.width as usize - label.len().min(area.width as usize));
        for (offset, byte) in label.bytes().enumerate() {
            if start + offset < row.len() {
                row[start + offset] = byte;
            }
        }
    }

    let text = String::from_utf8_lossy(&row).into_owned();
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(scheme.text_muted)),
        area,
    );
}

/// Detail chart: the step-after series against the current domain window,
/// with a fixed-marker gutter on the left.
fn render_detail(frame: &mut Frame, area: Rect, app: &App, window: DomainWindow) {
    let scheme = colors();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GUTTER_WIDTH),
            Constraint::Min(0),
            Constraint::Length(MARGIN_RIGHT),
        ])
        .split(area);
    let gutter = chunks[0];
    let plot = chunks[1];

    render_band_gutter(frame, gutter);

    let runs = visible_runs(app.timeline.segments(), window);
    if runs.is_empty() {
        // Degenerate window or nothing in range: graceful no-plot.
        let empty = Paragraph::new("nothing in the visible range")
            .style(Style::default().fg(scheme.text_muted))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(scheme.border)),
            );
        frame.render_widget(empty, plot);
        return;
    }

    let points = staircase(&runs);
    let series_color = scheme.series;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(scheme.border)),
        )
        .x_bounds([window.x0, window.x1])
        .y_bounds(Y_BOUNDS)
        .marker(Marker::Braille)
        .paint(move |ctx| {
            // Horizontal band gridlines.
            for band in 0..BandScale::LEN {
                ctx.draw(&CanvasLine {
                    x1: window.x0,
                    y1: band as f64,
                    x2: window.x1,
                    y2: band as f64,
                    color: scheme.muted,
                });
            }
            ctx.layer();
            for pair in points.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color: series_color,
                });
            }
        });

    frame.render_widget(canvas, plot);
}

/// Left gutter: a fixed marker per band row instead of per-category labels
/// (a static legend anchor, not a dynamic axis).
fn render_band_gutter(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    if area.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = vec![Line::from(""); area.height as usize];
    let span = Y_BOUNDS[1] - Y_BOUNDS[0];
    for band in 0..BandScale::LEN {
        let frac = (band as f64 - Y_BOUNDS[0]) / span;
        let row = ((1.0 - frac) * f64::from(area.height.saturating_sub(1))).round() as usize;
        if let Some(line) = lines.get_mut(row) {
            *line = Line::from(Span::styled(
                format!("{:>width$} ", "O", width = (GUTTER_WIDTH - 1) as usize),
                Style::default().fg(scheme.text_muted),
            ));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Overview strip: the full-day series at reduced scale, with the brush
/// selection shaded over it.
fn render_overview(frame: &mut Frame, area: Rect, app: &mut App) {
    let scheme = colors();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GUTTER_WIDTH),
            Constraint::Min(0),
            Constraint::Length(MARGIN_RIGHT),
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" overview — drag to zoom ")
        .border_style(Style::default().fg(scheme.border));
    let plot = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    // The brush is keyed to this width; a change resets the selection.
    app.sync_overview_plot(plot);

    let full = DomainWindow::full();
    let runs = visible_runs(app.timeline.segments(), full);
    let points = staircase(&runs);
    let series_color = scheme.series;

    let canvas = Canvas::default()
        .x_bounds([0.0, DOMAIN_HOURS])
        .y_bounds(Y_BOUNDS)
        .marker(Marker::Braille)
        .paint(move |ctx| {
            for pair in points.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color: series_color,
                });
            }
        });
    frame.render_widget(canvas, plot);

    shade_brush_selection(frame, plot, app);
}

/// Shade the brushed pixel columns of the overview plot.
fn shade_brush_selection(frame: &mut Frame, plot: Rect, app: &App) {
    let scheme = colors();
    let (px0, px1) = app.brush.pixel_bounds();
    if plot.width == 0 || px1 <= px0 {
        return;
    }

    let first = plot.x.saturating_add(px0.round() as u16);
    let last = plot
        .x
        .saturating_add((px1.round() as u16).min(plot.width))
        .saturating_sub(1);

    let buf = frame.buffer_mut();
    for x in first..=last.min(plot.x + plot.width.saturating_sub(1)) {
        for y in plot.y..plot.y + plot.height {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(scheme.brush_fill);
            }
        }
    }

    // Edge columns get the handle color.
    for x in [first, last.min(plot.x + plot.width.saturating_sub(1))] {
        for y in plot.y..plot.y + plot.height {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(scheme.brush_edge);
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();

    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(scheme.accent),
        ))
    } else {
        totals_line(&app.timeline)
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// One-line per-status totals for the whole recorded day.
fn totals_line(timeline: &ActivityTimeline) -> Line<'static> {
    let scheme = colors();
    let mut spans = vec![Span::raw(" ")];

    for (status, hours) in timeline.totals_by_status() {
        if hours <= 0.0 {
            continue;
        }
        spans.push(Span::styled(
            format!("{} ", status.as_str()),
            Style::default().fg(scheme.status_color(status)),
        ));
        spans.push(Span::styled(
            crate::model::time::compact_duration(hours),
            Style::default().fg(scheme.text),
        ));
        spans.push(Span::raw("  "));
    }

    Line::from(spans)
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = [
        ("drag", "zoom"),
        ("h/l", "pan"),
        ("+/-", "resize"),
        ("r", "reset"),
        ("t", "theme"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = vec![Span::raw(" ")];
    spans.extend(render_footer_hints(&hints));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Mouse",
            Style::default().fg(scheme.primary).bold(),
        )),
        Line::from("    drag on the overview strip  select the visible range"),
        Line::from("    release outside the strip   cancel the gesture"),
        Line::from(""),
        Line::from(Span::styled(
            "  Keys",
            Style::default().fg(scheme.primary).bold(),
        )),
        Line::from("    h / l, ← / →   pan the selection"),
        Line::from("    + / -          widen / narrow the selection"),
        Line::from("    r              reset zoom to the full day"),
        Line::from("    t              cycle theme"),
        Line::from("    q, Esc         quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  press any key to close",
            Style::default().fg(scheme.text_muted),
        )),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scheme.border_focused)),
    );
    frame.render_widget(help, popup);
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    format!("{truncated}...")
}

/// Helper function to create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
