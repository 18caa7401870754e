use anyhow::{Context, Result};
use tracing::info_span;

use diggs_cli::convert_file;
use diggs_cli::types::{ConversionOutcome, LogSummary};
use diggs_ingest::read_log;

use crate::cli::{ConvertArgs, InspectArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<ConversionOutcome> {
    convert_file(&args.input, &args.output, &args.options())
}

pub fn run_inspect(args: &InspectArgs) -> Result<LogSummary> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();
    let log = read_log(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    Ok(LogSummary::from_log(args.input.clone(), &log))
}
