//! Streaming line writer from `Row`s.
//!
//! Fields are joined with the delimiter as-is. Since nothing is quoted, a
//! field that would change the line structure is rejected instead.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tsvrw_core::{AccessorConfig, LineTerminator};

use crate::error::{Error, Result};

pub struct TsvWriter<W: Write> {
    wtr: BufWriter<W>,
    path: PathBuf,
    delimiter: char,
    terminator: LineTerminator,
    rows_written: u64,
}

impl TsvWriter<File> {
    /// Create or truncate `path`.
    pub fn to_path(path: impl AsRef<Path>, config: &AccessorConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        let mut wtr = Self::to_writer(file, config);
        wtr.path = path.to_path_buf();
        Ok(wtr)
    }
}

impl<W: Write> TsvWriter<W> {
    pub fn to_writer(writer: W, config: &AccessorConfig) -> Self {
        Self {
            wtr: BufWriter::with_capacity(config.buffer_capacity, writer),
            path: PathBuf::from("<writer>"),
            delimiter: config.delimiter,
            terminator: config.line_terminator,
            rows_written: 0,
        }
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate and write one row. Nothing is written if any field is rejected.
    pub fn write_row<I, S>(&mut self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = String::new();
        let mut ncols = 0usize;
        for (column, field) in columns.into_iter().enumerate() {
            let field = field.as_ref();
            if let Some(reason) = self.reject_reason(field) {
                return Err(Error::InvalidField { column, reason });
            }
            if column > 0 {
                line.push(self.delimiter);
            }
            line.push_str(field);
            ncols += 1;
        }
        if ncols == 0 {
            return Err(Error::EmptyRow);
        }
        line.push_str(self.terminator.as_str());

        self.wtr
            .write_all(line.as_bytes())
            .map_err(|source| Error::FileWrite {
                path: self.path.clone(),
                source,
            })?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.wtr.flush().map_err(|source| Error::FileWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let path = self.path;
        self.wtr.into_inner().map_err(|e| Error::FileWrite {
            path,
            source: e.into_error(),
        })
    }

    fn reject_reason(&self, field: &str) -> Option<String> {
        if field.contains(self.delimiter) {
            Some(format!("contains the delimiter {:?}", self.delimiter))
        } else if field.contains('\n') || field.contains('\r') {
            Some("contains a line break".into())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(rows: &[&[&str]], config: &AccessorConfig) -> String {
        let mut wtr = TsvWriter::to_writer(Vec::new(), config);
        for row in rows {
            wtr.write_row(row.iter()).unwrap();
        }
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn joins_with_tab_and_lf() {
        let out = written(&[&["a", "b", "c"], &["d"]], &AccessorConfig::default());
        assert_eq!(out, "a\tb\tc\nd\n");
    }

    #[test]
    fn crlf_terminator() {
        let cfg = AccessorConfig::default().with_line_terminator(LineTerminator::CrLf);
        assert_eq!(written(&[&["a", "b"]], &cfg), "a\tb\r\n");
    }

    #[test]
    fn empty_fields_are_kept() {
        let out = written(&[&[""], &["", ""]], &AccessorConfig::default());
        assert_eq!(out, "\n\t\n");
    }

    #[test]
    fn rejects_delimiter_and_line_breaks_without_writing() {
        let mut wtr = TsvWriter::to_writer(Vec::new(), &AccessorConfig::default());
        wtr.write_row(["ok"]).unwrap();

        match wtr.write_row(["fine", "tab\there"]) {
            Err(Error::InvalidField { column, .. }) => assert_eq!(column, 1),
            other => panic!("expected InvalidField, got {other:?}"),
        }
        assert!(matches!(
            wtr.write_row(["multi\nline"]),
            Err(Error::InvalidField { column: 0, .. })
        ));
        assert!(matches!(
            wtr.write_row(["cr\r"]),
            Err(Error::InvalidField { .. })
        ));
        assert_eq!(wtr.rows_written(), 1);
        assert_eq!(wtr.into_inner().unwrap(), b"ok\n");
    }

    #[test]
    fn rejects_empty_row() {
        let mut wtr = TsvWriter::to_writer(Vec::new(), &AccessorConfig::default());
        let empty: [&str; 0] = [];
        assert!(matches!(wtr.write_row(empty), Err(Error::EmptyRow)));
    }

    #[test]
    fn tab_is_plain_text_with_other_delimiter() {
        let cfg = AccessorConfig::default().with_delimiter(',');
        assert_eq!(written(&[&["a\tb", "c"]], &cfg), "a\tb,c\n");
    }
}
