//! Warnings raised while extracting type information.
//!
//! Extraction never fails; each fault is reported to a `WarningSink` instead.
//! `TracingSink` logs through `tracing`, and a `Vec<ExtractionWarning>` keeps
//! the warnings as values for callers that want to inspect them.

use std::fmt;
use tracing::warn;

/// A non-fatal fault encountered during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionWarning {
    /// The provider could not produce the type-info result set.
    RetrieveFailed { message: String },
    /// Reading a row failed; iteration stopped.
    AccessFailed { message: String },
    /// Closing the result set failed.
    ReleaseFailed,
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::RetrieveFailed { message } => {
                write!(f, "Unable to retrieve type info result set : {}", message)
            }
            ExtractionWarning::AccessFailed { message } => {
                write!(f, "Error accessing type info result set : {}", message)
            }
            ExtractionWarning::ReleaseFailed => write!(f, "Unable to release type info result set"),
        }
    }
}

/// Receives warnings emitted during extraction.
pub trait WarningSink {
    fn warn(&mut self, warning: ExtractionWarning);
}

/// Sink that logs each warning at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, warning: ExtractionWarning) {
        warn!("{}", warning);
    }
}

impl WarningSink for Vec<ExtractionWarning> {
    fn warn(&mut self, warning: ExtractionWarning) {
        self.push(warning);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &mut S {
    fn warn(&mut self, warning: ExtractionWarning) {
        (**self).warn(warning);
    }
}
