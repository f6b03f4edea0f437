use std::fmt;

use serde::{Deserialize, Serialize};

/// Which direction a session is open in. Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    Read,
    Write,
}

impl FileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileMode::Read => "read",
            FileMode::Write => "write",
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(FileMode::Read.to_string(), "read");
        assert_eq!(FileMode::Write.to_string(), "write");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&FileMode::Write).unwrap();
        assert_eq!(json, "\"write\"");
        let mode: FileMode = serde_json::from_str("\"read\"").unwrap();
        assert_eq!(mode, FileMode::Read);
    }
}
