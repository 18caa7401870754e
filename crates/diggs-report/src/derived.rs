//! Values derived from the drilling log, with their default substitutions.
//!
//! Every assembly step that can fall back to a default returns a
//! [`Derived`] instead of failing. The assembler records the attached
//! [`Diagnostic`] and keeps going.

use std::fmt;

use tracing::warn;

/// A default substitution made while assembling the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A header field used for an identifier or name is missing or blank.
    MissingHeaderField { key: &'static str },
    /// A coordinate header field is not a finite number.
    InvalidCoordinate { key: &'static str, value: String },
    /// The log has no data rows to derive a depth from.
    NoRows,
    /// The last row's depth field is missing or not a number.
    InvalidLastDepth { value: Option<String> },
    /// No row has a numeric depth.
    NoValidDepths,
    /// A row has no timestamp; a placeholder was written.
    MissingTimestamp { row: usize },
    /// A row is too short for the configured value columns; zeros were written.
    ShortDataRow { row: usize, fields: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeaderField { key } => write!(f, "header field {key} is missing"),
            Self::InvalidCoordinate { key, value } => {
                write!(f, "header field {key} has invalid coordinate '{value}'")
            }
            Self::NoRows => write!(f, "no data rows"),
            Self::InvalidLastDepth { value: Some(value) } => {
                write!(f, "last data row has invalid depth '{value}'")
            }
            Self::InvalidLastDepth { value: None } => write!(f, "last data row has no depth"),
            Self::NoValidDepths => write!(f, "no data row has a numeric depth"),
            Self::MissingTimestamp { row } => write!(f, "data row {row} has no timestamp"),
            Self::ShortDataRow { row, fields } => {
                write!(f, "data row {row} has only {fields} field(s)")
            }
        }
    }
}

/// A value that is either read from the input or a documented default.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Derived<T> {
    /// Value taken from the input as-is.
    pub fn found(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// Default substituted for the reason given.
    pub fn defaulted(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn is_default(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Derived<U> {
        Derived {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Log and move the diagnostics into `sink`, returning the value.
    pub fn record(self, step: &'static str, sink: &mut Vec<Diagnostic>) -> T {
        for diagnostic in &self.diagnostics {
            warn!(step, %diagnostic, "using default");
        }
        sink.extend(self.diagnostics);
        self.value
    }
}
