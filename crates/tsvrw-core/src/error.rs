use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error with context chain for better debugging
    #[error("Error in {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error, creating an error chain.
    ///
    /// # Example
    /// ```rust,no_run
    /// use tsvrw_core::error::Error;
    /// let err = Error::Config("delimiter must not be a line break".into());
    /// let err = err.with_context("while building accessor");
    /// ```
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Error::Config(msg) => {
                if msg.contains("delimiter") {
                    vec![
                        "Use a single printable character as the delimiter".into(),
                        "The default delimiter is a tab ('\\t')".into(),
                    ]
                } else if msg.contains("buffer") {
                    vec!["Set buffer_capacity to a positive number of bytes".into()]
                } else {
                    vec![]
                }
            }
            Error::Context { source, .. } => source.suggestions(),
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_source() {
        let err = Error::Config("bad delimiter".into()).with_context("accessor setup");
        match &err {
            Error::Context { context, source } => {
                assert_eq!(context, "accessor setup");
                assert!(matches!(**source, Error::Config(_)));
            }
            other => panic!("expected Context, got {other:?}"),
        }
        assert!(err.to_string().contains("accessor setup"));
    }

    #[test]
    fn suggestions_follow_context_chain() {
        let err = Error::Config("delimiter must not be a line break".into()).with_context("x");
        assert!(err.suggestions().iter().any(|s| s.contains("delimiter")));
    }
}
