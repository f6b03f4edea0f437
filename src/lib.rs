#![forbid(unsafe_code)]
//! tsvrw: open a tab-separated file, read or write rows, close it.
//!
//! ```rust,no_run
//! use tsvrw::{DelimitedFileAccessor, FileMode};
//!
//! let mut acc = DelimitedFileAccessor::new();
//! acc.open("pairs.tsv", FileMode::Write)?;
//! acc.write_row(["key", "value"])?;
//! acc.close()?;
//!
//! acc.open("pairs.tsv", FileMode::Read)?;
//! while let Some(row) = acc.read_columns()? {
//!     println!("{row:?}");
//! }
//! acc.close()?;
//! # Ok::<(), tsvrw::Error>(())
//! ```

pub use tsvrw_core::{AccessorConfig, FileMode, LineTerminator, Row};
pub use tsvrw_io::{DelimitedFileAccessor, Error, ErrorKind, Result, Rows, TsvReader, TsvWriter};

