//! `DelimitedFileAccessor`: one open file, in one mode, at a time.
//!
//! Every operation returns a `Result`. Reading in a write session, writing in
//! a read session, or touching rows with nothing open are reported as
//! contract violations rather than ignored.

use std::fs::File;
use std::path::Path;

use tsvrw_core::{AccessorConfig, FileMode, Row};

use crate::error::{Error, Result};
use crate::readers::tsv::TsvReader;
use crate::writers::tsv::TsvWriter;

enum Session {
    Read(TsvReader<File>),
    Write(TsvWriter<File>),
}

impl Session {
    fn mode(&self) -> FileMode {
        match self {
            Session::Read(_) => FileMode::Read,
            Session::Write(_) => FileMode::Write,
        }
    }

    fn path(&self) -> &Path {
        match self {
            Session::Read(r) => r.path(),
            Session::Write(w) => w.path(),
        }
    }
}

pub struct DelimitedFileAccessor {
    config: AccessorConfig,
    session: Option<Session>,
}

impl Default for DelimitedFileAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimitedFileAccessor {
    /// Tab-delimited accessor with no file open.
    pub fn new() -> Self {
        Self {
            config: AccessorConfig::default(),
            session: None,
        }
    }

    pub fn with_config(config: AccessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            session: None,
        })
    }

    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn mode(&self) -> Option<FileMode> {
        self.session.as_ref().map(Session::mode)
    }

    pub fn path(&self) -> Option<&Path> {
        self.session.as_ref().map(Session::path)
    }

    /// Open `path` in `mode`, closing any session already open.
    ///
    /// Read requires the file to exist; Write creates or truncates it.
    pub fn open(&mut self, path: impl AsRef<Path>, mode: FileMode) -> Result<()> {
        self.close()?;
        let path = path.as_ref();
        let session = match mode {
            FileMode::Read => Session::Read(TsvReader::from_path(path, &self.config)?),
            FileMode::Write => Session::Write(TsvWriter::to_path(path, &self.config)?),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), mode = %mode, "opened session");
        self.session = Some(session);
        Ok(())
    }

    /// `open` for call sites that only care whether it worked.
    pub fn try_open(&mut self, path: impl AsRef<Path>, mode: FileMode) -> bool {
        match self.open(path, mode) {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, mode = %mode, "open failed");
                false
            }
        }
    }

    /// Next row split into all of its fields, or `None` at end of file.
    pub fn read_columns(&mut self) -> Result<Option<Row>> {
        self.reader_mut()?.next_row()
    }

    /// Next row as its first two fields. A line with fewer than two fields is
    /// `MalformedRow`; fields past the second are ignored.
    pub fn read_two_columns(&mut self) -> Result<Option<(String, String)>> {
        let rdr = self.reader_mut()?;
        let Some(row) = rdr.next_row()? else {
            return Ok(None);
        };
        let found = row.len();
        let mut fields = row.into_iter();
        match (fields.next(), fields.next()) {
            (Some(first), Some(second)) => Ok(Some((first, second))),
            _ => Err(Error::MalformedRow {
                line: rdr.line(),
                expected: 2,
                found,
            }),
        }
    }

    /// Iterate over the remaining rows. Stops after the first error.
    pub fn rows(&mut self) -> Rows<'_> {
        Rows {
            accessor: self,
            done: false,
        }
    }

    /// Read every remaining row.
    pub fn read_all(&mut self) -> Result<Vec<Row>> {
        self.rows().collect()
    }

    pub fn write_row<I, S>(&mut self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.writer_mut()?.write_row(columns)
    }

    /// Write rows in order, returning how many were written.
    ///
    /// Rows before a rejected one stay written; the error's context carries
    /// their count.
    pub fn write_rows<I, R, S>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wtr = self.writer_mut()?;
        let mut n = 0usize;
        for row in rows {
            wtr.write_row(row)
                .map_err(|e| e.with_context(format!("write_rows after {n} rows")))?;
            n += 1;
        }
        Ok(n)
    }

    /// Release the session. Safe to call when nothing is open.
    ///
    /// The handle is released even if flushing a write session fails; the
    /// flush failure is still returned.
    pub fn close(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        match session {
            Session::Read(_rdr) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %_rdr.path().display(), rows = _rdr.line(), "closed read session");
            }
            Session::Write(wtr) => {
                #[cfg(feature = "tracing")]
                let (path, rows) = (wtr.path().to_path_buf(), wtr.rows_written());
                wtr.into_inner()?;
                #[cfg(feature = "tracing")]
                tracing::debug!(path = %path.display(), rows, "closed write session");
            }
        }
        Ok(())
    }

    fn reader_mut(&mut self) -> Result<&mut TsvReader<File>> {
        match &mut self.session {
            Some(Session::Read(rdr)) => Ok(rdr),
            Some(Session::Write(_)) => Err(wrong_mode(FileMode::Read, FileMode::Write)),
            None => Err(Error::NotOpen),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut TsvWriter<File>> {
        match &mut self.session {
            Some(Session::Write(wtr)) => Ok(wtr),
            Some(Session::Read(_)) => Err(wrong_mode(FileMode::Write, FileMode::Read)),
            None => Err(Error::NotOpen),
        }
    }
}

fn wrong_mode(expected: FileMode, actual: FileMode) -> Error {
    #[cfg(feature = "tracing")]
    tracing::warn!(expected = %expected, actual = %actual, "rejected operation in wrong mode");
    Error::WrongMode { expected, actual }
}

impl Drop for DelimitedFileAccessor {
    fn drop(&mut self) {
        if let Some(Session::Write(wtr)) = self.session.take() {
            if let Err(_e) = wtr.into_inner() {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "failed to flush on drop");
            }
        }
    }
}

/// Iterator returned by [`DelimitedFileAccessor::rows`].
pub struct Rows<'a> {
    accessor: &'a mut DelimitedFileAccessor,
    done: bool,
}

impl Iterator for Rows<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.accessor.read_columns() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
