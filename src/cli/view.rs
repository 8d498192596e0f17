//! View command handler.

use crate::error::{ErrorContext, Result};
use crate::model::DaySheet;
use crate::reports::{render_json, render_summary, write_output, ReportFormat};
use crate::tui::{run_tui, App};
use std::path::{Path, PathBuf};

/// Configuration for the `view` command.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Input day-sheet JSON; the built-in demo day when absent.
    pub input: Option<PathBuf>,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
}

/// Load a day sheet from a JSON file, or the demo day when no path is given.
pub fn load_day_sheet(path: Option<&Path>) -> Result<DaySheet> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| crate::error::TachoError::io(path, e))?;
            DaySheet::from_json_str(&content)
                .with_context(|| format!("parsing day sheet from {}", path.display()))
        }
        None => {
            tracing::debug!("no input file given, using the built-in demo day");
            Ok(DaySheet::demo())
        }
    }
}

/// Run the view command.
pub fn run_view(config: ViewConfig) -> anyhow::Result<()> {
    let sheet = load_day_sheet(config.input.as_deref())?;
    let timeline = sheet
        .clone()
        .into_timeline()
        .context("validating activity data")?;

    let format = config.output.resolve(config.output_file.is_some());
    match format {
        ReportFormat::Tui => {
            let mut app = App::from_day_sheet(sheet)?;
            run_tui(&mut app).map_err(anyhow::Error::from)?;
        }
        ReportFormat::Summary => {
            let report = render_summary(&sheet, &timeline);
            write_output(&report, config.output_file.as_ref())?;
        }
        ReportFormat::Json => {
            let report = render_json(&sheet, &timeline)?;
            write_output(&report, config.output_file.as_ref())?;
        }
        ReportFormat::Auto => unreachable!("resolve() never returns Auto"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = load_day_sheet(Some(Path::new("/nonexistent/day.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/day.json"));
    }

    #[test]
    fn no_input_falls_back_to_demo() {
        let sheet = load_day_sheet(None).unwrap();
        assert!(!sheet.activities.is_empty());
    }
}
