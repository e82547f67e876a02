//! CLI argument definitions for the survey triage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-triage",
    version,
    about = "Survey data-quality triage - normalize missing values, profile completeness",
    long_about = "Triage a delimited survey dataset.\n\n\
                  Rewrites ad-hoc missing-value encodings (NA, N/A, custom tokens) into a\n\
                  canonical marker, reports how many cells changed, and summarizes how\n\
                  complete records are distributed across the original row order."
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
    /// Triage a survey dataset and print its completeness summary.
    Check(CheckArgs),

    /// List the recognized missing-value tokens.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the delimited survey dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Extra missing-value token (repeatable).
    #[arg(long = "rule", value_name = "TOKEN")]
    pub rules: Vec<String>,

    /// Start from an empty rule set instead of the built-in NA / N/A tokens.
    #[arg(long = "no-default-rules")]
    pub no_default_rules: bool,

    /// Treat the empty string as missing.
    ///
    /// Disabled by default: some providers use "" for skipped questions,
    /// others for legitimately blank free-text fields.
    #[arg(long = "empty-as-missing")]
    pub empty_as_missing: bool,

    /// Match tokens case-insensitively instead of exactly.
    #[arg(long = "ignore-case")]
    pub ignore_case: bool,

    /// Trim surrounding whitespace from cells before matching.
    #[arg(long = "trim-tokens")]
    pub trim_tokens: bool,

    /// Output format for the triage result.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write the JSON report to a file in addition to the terminal output.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Terminal output choices for `check`.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
