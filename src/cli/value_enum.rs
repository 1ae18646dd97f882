// src/cli/value_enum.rs
use clap::ValueEnum;

use crate::output::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Plain,
    Numbered,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Numbered => OutputFormat::Numbered,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}
