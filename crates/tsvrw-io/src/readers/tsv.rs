//! Streaming line reader → `Row`.
//!
//! Caveats:
//! - No quoting: every delimiter splits, every line break ends a row.
//! - An empty line is a row with one empty field.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tsvrw_core::{AccessorConfig, Row};

use crate::error::{Error, Result};

pub struct TsvReader<R: Read> {
    reader: BufReader<R>,
    path: PathBuf,
    delimiter: char,
    line: u64,
    buf: String,
}

impl TsvReader<File> {
    pub fn from_path(path: impl AsRef<Path>, config: &AccessorConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileDoesNotExist {
                path: path.to_path_buf(),
            },
            _ => Error::FileRead {
                path: path.to_path_buf(),
                line: None,
                source: e,
            },
        })?;
        let mut rdr = Self::from_reader(file, config);
        rdr.path = path.to_path_buf();
        Ok(rdr)
    }
}

impl<R: Read> TsvReader<R> {
    pub fn from_reader(reader: R, config: &AccessorConfig) -> Self {
        Self {
            reader: BufReader::with_capacity(config.buffer_capacity, reader),
            path: PathBuf::from("<reader>"),
            delimiter: config.delimiter,
            line: 0,
            buf: String::new(),
        }
    }

    /// Line number of the most recently returned row (1-based, 0 before the first read).
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next line and split it. `Ok(None)` at end of input.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => return Ok(None),
            Ok(_) => self.line += 1,
            Err(source) => {
                // The failed line's bytes are already consumed.
                self.line += 1;
                return Err(Error::FileRead {
                    path: self.path.clone(),
                    line: Some(self.line),
                    source,
                });
            }
        }

        let mut text = self.buf.as_str();
        if let Some(stripped) = text.strip_suffix('\n') {
            text = stripped;
            if let Some(stripped) = text.strip_suffix('\r') {
                text = stripped;
            }
        }

        Ok(Some(text.split(self.delimiter).map(str::to_string).collect()))
    }
}
