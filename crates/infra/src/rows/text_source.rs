// crates/infra/src/rows/text_source.rs
use std::io::{self, BufRead};

use row_index_filter_ports::rows::{RowInput, RowSource};
use row_index_filter_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Line-oriented row source: every line of the input is one row.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRowSource;

impl TextRowSource {
    pub fn new() -> Self {
        Self
    }

    /// Reads all lines from any buffered reader.
    pub fn read_from<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
        reader.lines().collect()
    }
}

impl RowSource for TextRowSource {
    fn read_rows(&self, input: &RowInput) -> Result<Vec<String>> {
        let rows = match input {
            RowInput::Path(path) => FileReader::read_lines(path)?,
            RowInput::Stdin => Self::read_from(io::stdin().lock())
                .map_err(|source| InfrastructureError::StdinRead { source })?,
        };
        Ok(rows)
    }
}
