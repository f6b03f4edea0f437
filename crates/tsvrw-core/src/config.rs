//! Accessor configuration.
//!
//! Plain values with serde support so callers can embed it in their own
//! config files. Nothing here reads the environment.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Line ending appended after each written row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorConfig {
    /// Field separator. Tab unless overridden.
    pub delimiter: char,
    /// Terminator for written rows. Reading accepts both `\n` and `\r\n`.
    pub line_terminator: LineTerminator,
    /// Capacity of the buffered reader/writer, in bytes.
    pub buffer_capacity: usize,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            line_terminator: LineTerminator::Lf,
            buffer_capacity: 8 * 1024,
        }
    }
}

impl AccessorConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::Config(format!(
                "delimiter must not be a line break (got {:?})",
                self.delimiter
            )));
        }
        if self.buffer_capacity == 0 {
            return Err(Error::Config("buffer capacity must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_tab_lf() {
        let cfg = AccessorConfig::default();
        assert_eq!(cfg.delimiter, '\t');
        assert_eq!(cfg.line_terminator.as_str(), "\n");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_line_break_delimiter() {
        let cfg = AccessorConfig::default().with_delimiter('\n');
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
        let cfg = AccessorConfig::default().with_delimiter('\r');
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_buffer() {
        let cfg = AccessorConfig::default().with_buffer_capacity(0);
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("buffer"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: AccessorConfig = serde_json::from_str(r#"{"delimiter": ","}"#).unwrap();
        assert_eq!(cfg.delimiter, ',');
        assert_eq!(cfg.line_terminator, LineTerminator::Lf);
        assert_eq!(cfg.buffer_capacity, 8 * 1024);

        let cfg: AccessorConfig = serde_json::from_str(r#"{"line_terminator": "crlf"}"#).unwrap();
        assert_eq!(cfg.line_terminator, LineTerminator::CrLf);
    }
}
