// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "row_index_filter",
    version = crate::VERSION,
    about = "Print the input rows whose position is listed in an index specification"
)]
pub struct Args {
    /// Rows to keep, e.g. "1,3,5-7,10,12-14" (overrides the settings file)
    #[arg(short, long)]
    pub indexes: Option<String>,

    /// Settings file (.json, or .yaml/.yml with the `yaml` feature)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Validate the index specification before reading any rows
    #[arg(long)]
    pub eager: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: CliOutputFormat,

    /// Input file, one row per line; standard input when omitted or "-"
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}
