// src/output.rs
use std::io::{self, Write};

use row_index_filter_usecase::SelectionOutput;

/// How selected rows are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Row text only.
    #[default]
    Plain,
    /// `<index>\t<row>`.
    Numbered,
    /// The whole selection as pretty-printed JSON.
    Json,
}

pub fn write_selection<W: Write>(out: &mut W, selection: &SelectionOutput, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => {
            for row in &selection.rows {
                writeln!(out, "{}", row.value)?;
            }
        }
        OutputFormat::Numbered => {
            for row in &selection.rows {
                writeln!(out, "{}\t{}", row.index, row.value)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, selection)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
