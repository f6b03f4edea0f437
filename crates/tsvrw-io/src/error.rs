use std::path::PathBuf;

use thiserror::Error;
use tsvrw_core::FileMode;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification callers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileDoesNotExist,
    FileRead,
    FileWrite,
    MalformedRow,
    ContractViolation,
    Config,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("file does not exist: {}", .path.display())]
    FileDoesNotExist { path: PathBuf },

    /// `line` is `None` when the failure happened while opening.
    #[error("read error in {}{}: {source}", .path.display(), line_suffix(.line))]
    FileRead {
        path: PathBuf,
        line: Option<u64>,
        #[source]
        source: std::io::Error,
    },

    #[error("write error in {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("session is open for {actual}, operation requires {expected}")]
    WrongMode { expected: FileMode, actual: FileMode },

    #[error("no file is open")]
    NotOpen,

    #[error("column {column} cannot be written: {reason}")]
    InvalidField { column: usize, reason: String },

    #[error("cannot write a row with no fields")]
    EmptyRow,

    #[error("core error: {0}")]
    Core(#[from] tsvrw_core::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileDoesNotExist { .. } => ErrorKind::FileDoesNotExist,
            Error::FileRead { .. } => ErrorKind::FileRead,
            Error::FileWrite { .. } => ErrorKind::FileWrite,
            Error::MalformedRow { .. } => ErrorKind::MalformedRow,
            Error::WrongMode { .. }
            | Error::NotOpen
            | Error::InvalidField { .. }
            | Error::EmptyRow => ErrorKind::ContractViolation,
            Error::Core(_) => ErrorKind::Config,
            Error::Context { source, .. } => source.kind(),
        }
    }

    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Error::FileDoesNotExist { path } => vec![
                format!("Check that {} exists", path.display()),
                "Open in write mode to create a new file".into(),
            ],
            Error::FileRead { .. } => vec![
                "Check file permissions".into(),
                "Verify the file is UTF-8 text".into(),
            ],
            Error::FileWrite { .. } => vec![
                "Check directory permissions".into(),
                "Verify disk space is available".into(),
            ],
            Error::MalformedRow { expected, .. } => vec![format!(
                "Every line must contain at least {} delimiter-separated fields",
                expected
            )],
            Error::WrongMode { expected, .. } => {
                vec![format!("Close the file and reopen it in {} mode", expected)]
            }
            Error::NotOpen => vec!["Call open() before reading or writing".into()],
            Error::InvalidField { .. } => vec![
                "Fields cannot contain the delimiter or line breaks; there is no quoting".into(),
            ],
            Error::Core(e) => e.suggestions(),
            Error::Context { source, .. } => source.suggestions(),
            Error::EmptyRow => vec![],
        }
    }
}
