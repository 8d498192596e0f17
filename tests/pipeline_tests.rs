//! End-to-end tests over the data pipeline: JSON day sheet in, validated
//! timeline, zoom via the overview brush, and report output.

use std::fs;

use tacho_view::chart::{visible_runs, BrushSelection, DomainState};
use tacho_view::cli::load_day_sheet;
use tacho_view::model::{ActivityStatus, ActivityTimeline, DaySheet};
use tacho_view::reports::{render_json, render_summary};

const SHEET_JSON: &str = r#"{
  "driver": "A. Kowalski",
  "recordedOn": "2026-03-14",
  "activities": [
    { "status": "REST", "startHours": 0.0, "endHours": 6.5 },
    { "status": "DRIVING", "startHours": 6.5, "endHours": 10.75 },
    { "status": "OTHER_WORK", "startHours": 10.75, "endHours": 11.0 },
    { "status": "DRIVING", "startHours": 11.0, "endHours": 15.0 },
    { "status": "REST", "startHours": 15.0, "endHours": 24.0 }
  ]
}"#;

#[test]
fn loads_sheet_from_file_and_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("day.json");
    fs::write(&path, SHEET_JSON).unwrap();

    let sheet = load_day_sheet(Some(path.as_path())).unwrap();
    assert_eq!(sheet.driver.as_deref(), Some("A. Kowalski"));

    let timeline = sheet.into_timeline().unwrap();
    assert_eq!(timeline.len(), 5);
    assert_eq!(timeline.segments()[1].status, ActivityStatus::Driving);
}

#[test]
fn missing_input_falls_back_to_demo() {
    let sheet = load_day_sheet(None).unwrap();
    let timeline = sheet.into_timeline().unwrap();
    assert!(timeline.len() > 0);
    // The built-in day always covers the full 24-hour domain.
    assert_eq!(timeline.segments().first().unwrap().start_hours, 0.0);
    assert_eq!(timeline.segments().last().unwrap().end_hours, 24.0);
}

#[test]
fn malformed_sheet_is_rejected_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_day_sheet(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("day sheet"));
}

#[test]
fn gap_between_segments_is_rejected() {
    let sheet: DaySheet = serde_json::from_str(
        r#"{ "activities": [
            { "status": "REST", "startHours": 0.0, "endHours": 6.0 },
            { "status": "DRIVING", "startHours": 7.0, "endHours": 24.0 }
        ]}"#,
    )
    .unwrap();
    assert!(sheet.into_timeline().is_err());
}

#[test]
fn brush_gesture_zooms_the_detail_pane() {
    let timeline = ActivityTimeline::demo();
    let mut brush = BrushSelection::new(240.0);
    let mut domain = DomainState::new();

    // Drag across the left quarter of a 240-column strip: 0..60px is 0..6h.
    brush.begin(0.0);
    if let Some((p0, p1)) = brush.drag_to(60.0) {
        let scale = brush.scale();
        domain.set_from_brush(Some((scale.invert(p0), scale.invert(p1))));
    }
    brush.release();

    let window = domain.current();
    assert_eq!(window.x0, 0.0);
    assert_eq!(window.x1, 6.0);

    // Every visible run is trimmed to the window, and the edges touch it.
    let runs = visible_runs(timeline.segments(), window);
    assert!(!runs.is_empty());
    for run in &runs {
        assert!(run.start >= window.x0 && run.end <= window.x1);
    }
    assert_eq!(runs.first().unwrap().start, window.x0);
    assert_eq!(runs.last().unwrap().end, window.x1);
}

#[test]
fn aborted_gesture_keeps_the_previous_window() {
    let mut brush = BrushSelection::new(120.0);
    let mut domain = DomainState::new();

    brush.begin(30.0);
    if let Some((p0, p1)) = brush.drag_to(60.0) {
        let scale = brush.scale();
        domain.set_from_brush(Some((scale.invert(p0), scale.invert(p1))));
    }
    brush.release();
    let zoomed = domain.current();

    // A press that never commits must leave the window alone.
    brush.begin(10.0);
    brush.abort();
    assert_eq!(domain.current(), zoomed);
}

#[test]
fn summary_report_lists_all_segments_and_totals() {
    let sheet = DaySheet::from_json_str(SHEET_JSON).unwrap();
    let timeline = sheet.clone().into_timeline().unwrap();
    let summary = render_summary(&sheet, &timeline);

    assert!(summary.contains("A. Kowalski"));
    assert!(summary.contains("06:30"));
    assert!(summary.contains("DRIVING"));
    // 6.5h rest + 9h rest.
    assert!(summary.contains("15h 30m"));
}

#[test]
fn json_report_round_trips_totals() {
    let sheet = DaySheet::from_json_str(SHEET_JSON).unwrap();
    let timeline = sheet.clone().into_timeline().unwrap();
    let rendered = render_json(&sheet, &timeline).unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["driver"], "A. Kowalski");
    assert_eq!(value["activities"].as_array().unwrap().len(), 5);

    let totals = value["totals"].as_array().unwrap();
    let driving: f64 = totals
        .iter()
        .filter(|t| t["status"] == "DRIVING")
        .map(|t| t["hours"].as_f64().unwrap())
        .sum();
    assert!((driving - 8.25).abs() < 1e-9);
}
