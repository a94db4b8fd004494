use crate::html::RenderError;

/// Failures that abort the conversion of a whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unmatched delimiter '{delimiter}' found in text: '{text}'")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("Malformed code fence in block: '{block}'")]
    MalformedCodeFence { block: String },

    #[error("Invalid heading level {level}, expected 1 to 6")]
    InvalidHeadingLevel { level: usize },

    #[error("Document must start with a level-1 heading")]
    MissingTitle,

    #[error("Document title must be a level-1 heading, found level {level}")]
    MisplacedTitle { level: usize },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
