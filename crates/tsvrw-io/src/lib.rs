#![forbid(unsafe_code)]
//! tsvrw-io: delimited file access.
//!
//! - `readers`: line reader splitting each line into a `Row`.
//! - `writers`: line writer joining a `Row` with the delimiter.
//! - `accessor`: `DelimitedFileAccessor`, one read-or-write session over a path.

pub mod accessor;
pub mod readers;
pub mod writers;

pub mod error;

pub use accessor::{DelimitedFileAccessor, Rows};
pub use error::{Error, ErrorKind, Result};
pub use readers::tsv::TsvReader;
pub use writers::tsv::TsvWriter;
