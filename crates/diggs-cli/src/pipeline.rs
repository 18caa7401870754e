//! Conversion pipeline: read, parse, assemble, serialize, write.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use diggs_ingest::read_log;
use diggs_model::{ConversionOptions, DiggsDocument, FailurePolicy, ParsedLog};
use diggs_report::{
    Assembly, DocumentIds, Namespaces, assemble_log, creation_date, render_fallback,
    write_document, write_text,
};

use crate::types::{ConversionOutcome, ConversionReport};

/// Input converted when no path is given.
pub const DEFAULT_INPUT: &str = "input.guh";

/// Output written when no path is given.
pub const DEFAULT_OUTPUT: &str = "mwd_diggs.xml";

/// Convert one `.guh` file to DIGGS XML at `output`.
///
/// An unreadable input is returned as an error under
/// [`FailurePolicy::Strict`], before anything is parsed or written, and
/// turned into a fallback document under [`FailurePolicy::Fallback`]. A
/// document that cannot be serialized always degrades to the fallback
/// document. Failing to write `output` is always an error.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConversionOptions,
) -> Result<ConversionOutcome> {
    convert_with(input, output, options, write_document)
}

fn convert_with<S>(
    input: &Path,
    output: &Path,
    options: &ConversionOptions,
    serialize: S,
) -> Result<ConversionOutcome>
where
    S: FnOnce(&DiggsDocument, &Namespaces) -> Result<String>,
{
    let span = info_span!(
        "convert",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();

    let log = match read_log(input).with_context(|| format!("read {}", input.display())) {
        Ok(log) => log,
        Err(err) if options.on_failure == FailurePolicy::Strict => return Err(err),
        Err(err) => return write_fallback(output, options, &err),
    };
    let assembly = assemble_log(&log, options);
    let xml = match serialize(&assembly.document, &Namespaces::default())
        .context("serialize DIGGS document")
    {
        Ok(xml) => xml,
        Err(err) => return write_fallback(output, options, &err),
    };

    write_text(output, &xml)?;
    info!(
        bytes = xml.len(),
        defaults = assembly.diagnostics.len(),
        "wrote DIGGS document"
    );
    Ok(ConversionOutcome::Converted(report(
        input, output, &log, &assembly,
    )))
}

fn write_fallback(
    output: &Path,
    options: &ConversionOptions,
    err: &anyhow::Error,
) -> Result<ConversionOutcome> {
    let message = format!("{err:#}");
    error!(error = %message, "conversion failed, writing fallback document");
    let text = render_fallback(&message, creation_date(options));
    write_text(output, &text).context("write fallback document")?;
    Ok(ConversionOutcome::Fallback {
        output: output.to_path_buf(),
        message,
    })
}

fn report(input: &Path, output: &Path, log: &ParsedLog, assembly: &Assembly) -> ConversionReport {
    let ids = DocumentIds::from_header(&log.header);
    ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        borehole: ids.borehole,
        measurement: ids.measurement,
        parameters: log.schema.len(),
        rows: log.rows.len(),
        skipped_lines: log.skipped_lines,
        schema_defaulted: log.schema_defaulted,
        max_depth: log.max_depth(),
        diagnostics: assembly.diagnostics.clone(),
    }
}
