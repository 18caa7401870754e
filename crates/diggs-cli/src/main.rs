//! `guh2diggs`: convert `.guh` drilling logs to DIGGS 2.6 XML.

use clap::{ColorChoice, Parser};
use diggs_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, ConvertArgs, LogFormatArg, LogLevelArg};
use crate::commands::{run_convert, run_inspect};
use crate::summary::{print_log_summary, print_outcome};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command.unwrap_or_else(|| Command::Convert(ConvertArgs::default())) {
        Command::Convert(args) => match run_convert(&args) {
            Ok(outcome) => {
                print_outcome(&outcome);
                outcome.exit_code()
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Inspect(args) => match run_inspect(&args) {
            Ok(summary) if args.json => match summary.to_json() {
                Ok(json) => {
                    println!("{json}");
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            },
            Ok(summary) => {
                print_log_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flags_reach_config() {
        let cli = Cli::parse_from([
            "guh2diggs",
            "--color",
            "never",
            "--log-level",
            "debug",
            "--log-timestamps",
            "--log-target",
            "inspect",
            "input.guh",
        ]);
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
    }

    #[test]
    fn log_flags_default_off() {
        let config = log_config_from_cli(&Cli::parse_from(["guh2diggs"]));
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
