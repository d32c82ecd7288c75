//! CLI argument definitions for the NDC converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ndc_ingest::ColumnSelector;
use ndc_model::{Direction, SegmentVariant};

#[derive(Parser)]
#[command(
    name = "ndc-converter",
    version,
    about = "NDC Format Converter - Convert National Drug Codes between 10- and 11-digit forms",
    long_about = "Convert National Drug Codes between the legacy 10-digit layouts\n\
                  (4-4-2, 5-3-2, 5-4-1) and the standardized 11-digit 5-4-2 layout.\n\
                  Detects the segmentation of each code and applies the matching\n\
                  padding or stripping rule reversibly."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Convert the code column of a delimited file, appending a result column.
    File(FileArgs),

    /// Convert a single raw code and print its classification.
    Code(CodeArgs),

    /// List the known segment layouts.
    Variants,
}

#[derive(Parser)]
pub struct FileArgs {
    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding the codes: header name or 1-based position.
    #[arg(long = "column", value_name = "NAME|N")]
    pub column: ColumnSelector,

    /// Conversion direction.
    #[arg(long = "direction", value_enum)]
    pub direction: DirectionArg,

    /// Output file (default: <INPUT stem>_converted.<ext> beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Layout assumed for rows the classifier reports as ambiguous.
    ///
    /// Without this flag, ambiguous rows are warned about and left
    /// unconverted.
    #[arg(long = "assume", value_enum)]
    pub assume: Option<VariantArg>,

    /// Abort on the first row failure instead of warning and continuing.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Classify and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the run report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CodeArgs {
    /// The raw code, separators allowed (e.g. 5486-8123-45).
    #[arg(value_name = "CODE")]
    pub raw: String,

    /// Conversion direction.
    #[arg(long = "direction", value_enum)]
    pub direction: DirectionArg,

    /// Layout assumed when the classifier reports ambiguous.
    #[arg(long = "assume", value_enum)]
    pub assume: Option<VariantArg>,
}

/// CLI direction choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    #[value(name = "10to11")]
    TenToEleven,
    #[value(name = "11to10")]
    ElevenToTen,
}

impl DirectionArg {
    pub fn direction(self) -> Direction {
        match self {
            DirectionArg::TenToEleven => Direction::TenToEleven,
            DirectionArg::ElevenToTen => Direction::ElevenToTen,
        }
    }
}

/// CLI layout choices for --assume (10-digit layouts only).
#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    #[value(name = "4-4-2")]
    FourFourTwo,
    #[value(name = "5-3-2")]
    FiveThreeTwo,
    #[value(name = "5-4-1")]
    FiveFourOne,
}

impl VariantArg {
    pub fn variant(self) -> SegmentVariant {
        match self {
            VariantArg::FourFourTwo => SegmentVariant::FourFourTwo,
            VariantArg::FiveThreeTwo => SegmentVariant::FiveThreeTwo,
            VariantArg::FiveFourOne => SegmentVariant::FiveFourOne,
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
