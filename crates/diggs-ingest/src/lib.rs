//! Ingestion of `.guh` measurement-while-drilling logs.
//!
//! A `.guh` file is split into bracketed sections:
//!
//! - **`[HEADER]`**: `key=value` lines
//! - **`[PARAMETER]`**: a `;`-separated name line followed by a unit line
//! - **`[DATA]`**: `;`-separated rows (timestamp, depth, channels...)
//! - **`[FOOTER]`**: ignored
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use diggs_ingest::read_log;
//!
//! let log = read_log(Path::new("logs/B-2.guh"))?;
//! println!("{} rows", log.rows.len());
//! ```

mod error;
mod parser;
mod reader;
mod section;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use parser::{LineIssue, SectionParser, parse_bytes, parse_log};
pub use section::Section;

// === File Loading ===
pub use reader::{ensure_input_file, read_log, validate_encoding};
