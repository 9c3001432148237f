use thiserror::Error;

/// Returned when a level name or number does not map to a known severity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized log level: {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }
}
