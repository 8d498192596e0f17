//! Non-interactive report output.
//!
//! When stdout is not a TTY (or the user asks for it), the day is rendered
//! as a plain-text summary or a JSON document instead of the interactive UI.

use crate::error::{Result, TachoError};
use crate::model::time::{compact_duration, humanize_hours};
use crate::model::{ActivitySegment, ActivityTimeline, DaySheet};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Output format for the `view` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// TUI when stdout is a terminal, summary otherwise
    Auto,
    Tui,
    Summary,
    Json,
}

impl ReportFormat {
    /// Resolve `auto` against the actual stdout target.
    #[must_use]
    pub fn resolve(self, to_file: bool) -> ReportFormat {
        match self {
            ReportFormat::Auto => {
                if !to_file && std::io::stdout().is_terminal() {
                    ReportFormat::Tui
                } else {
                    ReportFormat::Summary
                }
            }
            other => other,
        }
    }
}

/// JSON report payload: the normalized day plus computed totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    driver: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recorded_on: Option<NaiveDate>,
    activities: &'a [ActivitySegment],
    totals: Vec<TotalEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalEntry {
    status: String,
    hours: f64,
    duration: String,
}

/// Render the normalized day as JSON.
pub fn render_json(sheet: &DaySheet, timeline: &ActivityTimeline) -> Result<String> {
    let totals = timeline
        .totals_by_status()
        .into_iter()
        .filter(|(_, hours)| *hours > 0.0)
        .map(|(status, hours)| TotalEntry {
            status: status.as_str().to_string(),
            hours,
            duration: compact_duration(hours),
        })
        .collect();

    let report = JsonReport {
        driver: sheet.driver.as_deref(),
        recorded_on: sheet.recorded_on,
        activities: timeline.segments(),
        totals,
    };

    serde_json::to_string_pretty(&report)
        .map_err(|e| TachoError::report(format!("JSON serialization failed: {e}")))
}

/// Render the normalized day as a plain-text summary.
#[must_use]
pub fn render_summary(sheet: &DaySheet, timeline: &ActivityTimeline) -> String {
    let mut out = String::new();

    out.push_str("Driver activity");
    if let Some(driver) = &sheet.driver {
        out.push_str(&format!(" — {driver}"));
    }
    if let Some(date) = sheet.recorded_on {
        out.push_str(&format!(" — {date}"));
    }
    out.push('\n');
    out.push('\n');

    out.push_str("Totals:\n");
    for (status, hours) in timeline.totals_by_status() {
        if hours <= 0.0 {
            continue;
        }
        out.push_str(&format!(
            "  {:<10} {:>7}  ({})\n",
            status.as_str(),
            compact_duration(hours),
            humanize_hours(hours)
        ));
    }
    out.push('\n');

    out.push_str("Segments:\n");
    for segment in timeline.segments() {
        out.push_str(&format!(
            "  {:>3}  {} – {}  {:<10} {}\n",
            segment.id,
            segment.start_clock(),
            segment.end_clock(),
            segment.status.as_str(),
            segment.compact_duration()
        ));
    }

    out
}

/// Write report content to stdout or a file.
pub fn write_output(content: &str, target: Option<&PathBuf>) -> Result<()> {
    match target {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| TachoError::io(path.clone(), e))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_all_segments() {
        let sheet = DaySheet::demo();
        let timeline = ActivityTimeline::demo();
        let summary = render_summary(&sheet, &timeline);

        assert!(summary.contains("Totals:"));
        assert!(summary.contains("DRIVING"));
        assert!(summary.contains("00:00 – 05:34"));
        // One line per normalized segment.
        assert_eq!(
            summary.lines().filter(|l| l.contains(" – ")).count(),
            timeline.len()
        );
    }

    #[test]
    fn json_report_round_trips() {
        let sheet = DaySheet::demo();
        let timeline = ActivityTimeline::demo();
        let json = render_json(&sheet, &timeline).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["activities"].as_array().unwrap().len(),
            timeline.len()
        );
        assert!(value["totals"].as_array().unwrap().len() >= 3);
        assert!(value.get("driver").is_none());
    }

    #[test]
    fn explicit_formats_resolve_to_themselves() {
        assert_eq!(ReportFormat::Json.resolve(false), ReportFormat::Json);
        assert_eq!(ReportFormat::Tui.resolve(true), ReportFormat::Tui);
    }

    #[test]
    fn auto_with_file_target_is_summary() {
        assert_eq!(ReportFormat::Auto.resolve(true), ReportFormat::Summary);
    }
}
