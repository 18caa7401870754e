//! Line-oriented section parser.
//!
//! A single forward pass tracks the active [`Section`] and routes every
//! non-blank, non-marker line to the header, parameter or data collector.
//! A line that cannot be interpreted is logged and skipped; the pass itself
//! never fails.

use thiserror::Error;
use tracing::{debug, info, warn};

use diggs_model::{
    DATUM, DataRow, HeaderData, MIN_ROW_FIELDS, ParameterSchema, ParsedLog, TIMESTAMP_COLUMN,
};

use crate::section::Section;

/// Why a single line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineIssue {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    #[error("header line has no '=' separator")]
    MissingSeparator,
    #[error("data row has {found} field(s), need at least two")]
    ShortRow { found: usize },
    #[error("line appears before any section marker")]
    OutsideSection,
}

/// Parser state for one log.
#[derive(Debug, Default)]
pub struct SectionParser {
    section: Section,
    header: HeaderData,
    names: Option<Vec<String>>,
    units: Option<Vec<String>>,
    rows: Vec<DataRow>,
    skipped_lines: usize,
}

impl SectionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Feed one raw line (without its terminator). `line_number` is 1-based
    /// and only used for diagnostics.
    pub fn feed_line(&mut self, line_number: usize, raw: &str) {
        let line = raw.trim();
        if let Some(section) = Section::from_marker(line) {
            debug!(line = line_number, section = section.as_str(), "section marker");
            self.section = section;
            return;
        }
        if line.is_empty() {
            return;
        }
        if let Err(issue) = self.dispatch(line) {
            self.skip(line_number, &issue);
        }
    }

    /// Record a line that could not be decoded at all.
    pub fn feed_undecodable(&mut self, line_number: usize) {
        self.skip(line_number, &LineIssue::InvalidUtf8);
    }

    fn skip(&mut self, line_number: usize, issue: &LineIssue) {
        self.skipped_lines += 1;
        warn!(line = line_number, section = self.section.as_str(), %issue, "skipping line");
    }

    fn dispatch(&mut self, line: &str) -> Result<(), LineIssue> {
        match self.section {
            Section::None => Err(LineIssue::OutsideSection),
            Section::Header => self.header_line(line),
            Section::Parameter => {
                self.parameter_line(line);
                Ok(())
            }
            Section::Data => self.data_line(line),
            Section::Footer => Ok(()),
        }
    }

    fn header_line(&mut self, line: &str) -> Result<(), LineIssue> {
        let (key, value) = line.split_once('=').ok_or(LineIssue::MissingSeparator)?;
        self.header.insert(key, value);
        Ok(())
    }

    /// Only the first two lines of the section are read: names, then units.
    fn parameter_line(&mut self, line: &str) {
        let fields = || line.split(';').map(str::to_string).collect::<Vec<_>>();
        if self.names.is_none() {
            let names = fields();
            debug!(count = names.len(), "parameter names");
            self.names = Some(names);
        } else if self.units.is_none() {
            let units = fields();
            debug!(count = units.len(), "parameter units");
            self.units = Some(units);
        }
    }

    fn data_line(&mut self, line: &str) -> Result<(), LineIssue> {
        let row = DataRow::from_line(line);
        if row.get(TIMESTAMP_COLUMN) == Some(DATUM) {
            return Ok(());
        }
        if row.len() < MIN_ROW_FIELDS {
            return Err(LineIssue::ShortRow { found: row.len() });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Finish the pass and apply the parameter defaulting policy.
    pub fn finish(self) -> ParsedLog {
        let mut rows = self.rows;
        let mut schema_defaulted = false;
        let schema = match (self.names, self.units) {
            (Some(names), Some(units)) => {
                if names.len() != units.len() {
                    warn!(
                        names = names.len(),
                        units = units.len(),
                        "parameter names and units differ in length, truncating to the shorter"
                    );
                }
                ParameterSchema::new(names, units)
            }
            (names, units) => {
                warn!(
                    has_names = names.is_some(),
                    has_units = units.is_some(),
                    "missing parameter section, using default Datum/Depth schema"
                );
                schema_defaulted = true;
                if rows.is_empty() {
                    rows.push(DataRow::placeholder());
                }
                ParameterSchema::fallback()
            }
        };

        info!(
            header_items = self.header.len(),
            parameters = schema.len(),
            rows = rows.len(),
            skipped_lines = self.skipped_lines,
            "parsed drilling log"
        );
        if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
            debug!(first = ?first.fields(), last = ?last.fields(), columns = first.len(), "row span");
        }

        ParsedLog {
            header: self.header,
            schema,
            rows,
            skipped_lines: self.skipped_lines,
            schema_defaulted,
        }
    }
}

/// Parse a whole log held in memory.
pub fn parse_log(text: &str) -> ParsedLog {
    let mut parser = SectionParser::new();
    for (index, line) in strip_bom(text).lines().enumerate() {
        parser.feed_line(index + 1, line);
    }
    parser.finish()
}

/// Parse raw bytes, decoding each line separately so one bad line does not
/// spoil the rest.
///
/// An undecodable line that still starts with a section marker switches
/// sections; any other undecodable line is skipped.
pub fn parse_bytes(bytes: &[u8]) -> ParsedLog {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut parser = SectionParser::new();
    for (index, line) in bytes.split(|byte| *byte == b'\n').enumerate() {
        match std::str::from_utf8(line) {
            Ok(text) => parser.feed_line(index + 1, text),
            Err(_) => {
                let lossy = String::from_utf8_lossy(line);
                if Section::from_marker(lossy.trim()).is_some() {
                    parser.feed_line(index + 1, &lossy);
                } else {
                    parser.feed_undecodable(index + 1);
                }
            }
        }
    }
    parser.finish()
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
