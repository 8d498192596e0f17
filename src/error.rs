//! Unified error types for tacho-view.
//!
//! A single error hierarchy for the library, with specific kinds for
//! activity-data ingestion failures and context chaining for everything
//! that touches the filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tacho-view operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TachoError {
    /// Errors while ingesting or validating activity data
    #[error("Invalid activity data: {context}")]
    Data {
        context: String,
        #[source]
        source: DataErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(String),

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific activity-data error kinds.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataErrorKind {
    #[error("Unknown activity status: {value:?} (expected AVAILABLE, DRIVING, REST, OTHER_WORK or UNKNOWN)")]
    UnknownStatus { value: String },

    #[error("Segment {index} has inverted bounds: start {start} >= end {end}")]
    InvertedBounds { index: usize, start: f64, end: f64 },

    #[error("Segment {index} lies outside the 24-hour domain: [{start}, {end}]")]
    OutOfDomain { index: usize, start: f64, end: f64 },

    #[error("Gap between segment {index} (ends at {prev_end}) and segment {next} (starts at {start})")]
    Gap {
        index: usize,
        next: usize,
        prev_end: f64,
        start: f64,
    },

    #[error("Day does not start at hour 0: first segment starts at {start}")]
    OpenStart { start: f64 },

    #[error("Day is not closed at hour 24: last segment ends at {end}")]
    OpenEnd { end: f64 },

    #[error("Empty activity sequence")]
    Empty,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

/// Convenient Result type for tacho-view operations.
pub type Result<T> = std::result::Result<T, TachoError>;

impl TachoError {
    /// Create a data error with context.
    pub fn data(context: impl Into<String>, source: DataErrorKind) -> Self {
        Self::Data {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error.
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }
}

impl From<std::io::Error> for TachoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TachoError {
    fn from(err: serde_json::Error) -> Self {
        Self::data(
            "JSON deserialization",
            DataErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// Prepends the given context to the error's existing context, building a
/// chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (only evaluated on the error path).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<TachoError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: TachoError, new_ctx: &str) -> TachoError {
    match err {
        TachoError::Data {
            context: existing,
            source,
        } => TachoError::Data {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TachoError::Report(msg) => TachoError::Report(chain_context(new_ctx, &msg)),
        TachoError::Io {
            path,
            message,
            source,
        } => TachoError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        TachoError::Config(msg) => TachoError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings, skipping an empty existing context.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
