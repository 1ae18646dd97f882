// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use row_index_filter_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| file_read(path, source))
    }

    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut reader = Self::open_buffered(path)?;
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| file_read(path, source))?;
        Ok(text)
    }

    /// Read the file line by line, without line terminators.
    pub fn read_lines(path: &Path) -> InfraResult<Vec<String>> {
        Self::open_buffered(path)?
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|source| file_read(path, source))
    }
}

fn file_read(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}
