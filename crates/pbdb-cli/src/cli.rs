//! CLI argument definitions for the PBDB field dictionary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pbdb_model::{DictionaryError, Direction};

#[derive(Parser)]
#[command(
    name = "pbdb",
    version,
    about = "PBDB field dictionary - translate between compact and verbose field names",
    long_about = "Look up Paleobiology Database field names and translate download headers.\n\n\
                  Compact downloads use short codes (tna, oid); verbose downloads use\n\
                  full names (accepted_name, occurrence_id)."
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
    /// List every field grouped by category.
    Fields(OutputArgs),

    /// Show the compact code, verbose name and category of one field.
    Describe(DescribeArgs),

    /// Show the recommended fields for an analysis type.
    Analysis(AnalysisArgs),

    /// Translate column names given on the command line.
    Columns(ColumnsArgs),

    /// Translate the header of a CSV/TSV download.
    Translate(TranslateArgs),

    /// Show dictionary size statistics.
    Stats(OutputArgs),

    /// Report duplicate codes, reverse collisions and names without a code.
    Check(OutputArgs),

    /// Run the usage walkthrough: categories, a lookup, an analysis, statistics.
    Demo,
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Emit JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// Compact code or verbose name (e.g., "tna" or "accepted_name").
    #[arg(value_name = "FIELD")]
    pub field: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct AnalysisArgs {
    /// Analysis type (omit to list the available types).
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Only print fields present in this CSV/TSV header, and report the missing ones.
    #[arg(long = "against", value_name = "FILE")]
    pub against: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Column names to translate.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Translation direction.
    #[arg(
        long = "direction",
        default_value_t = Direction::CompactToVerbose,
        value_parser = parse_direction
    )]
    pub direction: Direction,
}

#[derive(Parser)]
pub struct TranslateArgs {
    /// Input download (.csv, or .tsv/.txt for tab-separated).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Translation direction.
    #[arg(
        long = "direction",
        default_value_t = Direction::CompactToVerbose,
        value_parser = parse_direction
    )]
    pub direction: Direction,

    /// Write the translated table here; without it only the header mapping is printed.
    #[arg(long = "output", short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Infer column types instead of keeping every value as text.
    #[arg(long = "infer-types")]
    pub infer_types: bool,
}

/// Accepts `compact_to_verbose` / `verbose_to_compact` (or hyphenated).
pub fn parse_direction(value: &str) -> Result<Direction, DictionaryError> {
    match value {
        "compact-to-verbose" => Ok(Direction::CompactToVerbose),
        "verbose-to-compact" => Ok(Direction::VerboseToCompact),
        _ => value.parse(),
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
