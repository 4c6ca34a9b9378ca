//! CLI argument definitions for the claim report tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rx_core::MAX_RECOMMENDED_CHAINS;
use rx_report::ReportKind;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

/// Default location of the unpacked input snapshot.
pub const DEFAULT_INPUT_DIR: &str = "input_data/unzipped";
/// Default location for written reports.
pub const DEFAULT_OUTPUT_DIR: &str = "output_data";

#[derive(Parser)]
#[command(
    name = "rx-claims",
    version,
    about = "Pharmacy claim reports - fill metrics, common quantities and chain pricing",
    long_about = "Aggregate pharmacy claims, reverts and the pharmacy chain directory.\n\n\
                  Reads <INPUT_DIR>/pharmacies/*.csv, <INPUT_DIR>/claims/*.json and\n\
                  <INPUT_DIR>/reverts/*.json and writes JSON reports to <OUTPUT_DIR>."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Fill, reversal and price metrics per (npi, ndc).
    Metrics(ReportArgs),

    /// Most commonly prescribed quantities per ndc.
    MostPrescribed(ReportArgs),

    /// Cheapest pharmacy chains per ndc.
    Recommend(RecommendArgs),

    /// Realized revenue per pharmacy chain.
    Revenue(ReportArgs),

    /// Produce every report in one run.
    All(RecommendArgs),
}

impl Command {
    /// Reports produced by this subcommand.
    pub fn report_kinds(&self) -> Vec<ReportKind> {
        match self {
            Command::Metrics(_) => vec![ReportKind::Metrics],
            Command::MostPrescribed(_) => vec![ReportKind::MostPrescribed],
            Command::Recommend(_) => vec![ReportKind::Recommendations],
            Command::Revenue(_) => vec![ReportKind::Revenue],
            Command::All(_) => ReportKind::ALL.to_vec(),
        }
    }

    pub fn report_args(&self) -> &ReportArgs {
        match self {
            Command::Metrics(args) | Command::MostPrescribed(args) | Command::Revenue(args) => args,
            Command::Recommend(args) | Command::All(args) => &args.report,
        }
    }

    /// Chains kept per ndc in recommendations.
    pub fn top_chains(&self) -> usize {
        match self {
            Command::Recommend(args) | Command::All(args) => args.top,
            _ => MAX_RECOMMENDED_CHAINS,
        }
    }
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Directory holding the pharmacies/, claims/ and reverts/ folders.
    #[arg(long = "input-dir", value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory for generated JSON reports.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Compute and print reports without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Number of chains to recommend per ndc.
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = MAX_RECOMMENDED_CHAINS,
        value_parser = parse_top
    )]
    pub top: usize,
}

fn parse_top(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(top) => Ok(top),
        Err(error) => Err(error.to_string()),
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

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence.
    ///
    /// `--log-level` wins over `-v/-q`; `RUST_LOG` applies only when neither
    /// was given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        let mut config = LogConfig::default()
            .with_level(level_filter)
            .with_format(format)
            .with_ansi(with_ansi)
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config
    }
}
