#![forbid(unsafe_code)]
//! tsvrw-core: shared types for the tsvrw accessor.
//!
//! Only *pure* types live here: the file mode, the row representation, and
//! the accessor configuration. There is **no I/O** in this crate.
//!
//! Crates that use this:
//! - tsvrw-io: opens sessions in a `FileMode`, reads/writes `Row`s, honours `AccessorConfig`.

pub mod config;
pub mod error;
pub mod mode;
pub mod types;

pub use config::{AccessorConfig, LineTerminator};
pub use error::{Error, Result};
pub use mode::FileMode;
pub use types::Row;
