//! CLI argument definitions for the `.guh` to DIGGS converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use diggs_cli::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use diggs_model::{ColumnAlignment, ConversionOptions, FailurePolicy, MeasurementKind};

#[derive(Parser)]
#[command(
    name = "guh2diggs",
    version,
    about = "Convert .guh measurement-while-drilling logs to DIGGS 2.6 XML",
    long_about = "Convert .guh measurement-while-drilling logs to DIGGS 2.6 XML.\n\n\
                  Without a subcommand, input.guh in the current directory is\n\
                  converted to mwd_diggs.xml."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a .guh file to a DIGGS XML document.
    Convert(ConvertArgs),

    /// Parse a .guh file and print its header, parameters and row statistics.
    Inspect(InspectArgs),
}

#[derive(Args, Clone)]
pub struct ConvertArgs {
    /// Drilling log to convert.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// DIGGS XML file to write.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Row columns exported as data values.
    #[arg(long = "columns", value_enum, default_value = "depth-and-channels")]
    pub columns: ColumnsArg,

    /// Measurement element to emit.
    #[arg(long = "measurement", value_enum, default_value = "mwd")]
    pub measurement: MeasurementArg,

    /// Write a fallback document instead of failing when INPUT cannot be read.
    #[arg(long = "fallback")]
    pub fallback: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            columns: ColumnsArg::DepthAndChannels,
            measurement: MeasurementArg::Mwd,
            fallback: false,
        }
    }
}

impl ConvertArgs {
    pub fn options(&self) -> ConversionOptions {
        let policy = if self.fallback {
            FailurePolicy::Fallback
        } else {
            FailurePolicy::Strict
        };
        ConversionOptions::new()
            .with_columns(self.columns.into())
            .with_measurement(self.measurement.into())
            .with_failure_policy(policy)
    }
}

#[derive(Args)]
pub struct InspectArgs {
    /// Drilling log to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI column alignment choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ColumnsArg {
    /// Depth followed by every channel.
    DepthAndChannels,
    /// Channels only.
    ChannelsOnly,
}

impl From<ColumnsArg> for ColumnAlignment {
    fn from(value: ColumnsArg) -> Self {
        match value {
            ColumnsArg::DepthAndChannels => Self::DepthAndChannels,
            ColumnsArg::ChannelsOnly => Self::ChannelsOnly,
        }
    }
}

/// CLI measurement element choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MeasurementArg {
    /// MeasurementWhileDrilling with an MWDResult.
    Mwd,
    /// Test with a TestResult and depth points.
    Test,
}

impl From<MeasurementArg> for MeasurementKind {
    fn from(value: MeasurementArg) -> Self {
        match value {
            MeasurementArg::Mwd => Self::MeasurementWhileDrilling,
            MeasurementArg::Test => Self::Test,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
