use thiserror::Error;

/// Failure while splitting text into inline spans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    /// A `**`, `_`, `*` or backtick delimiter has no closing partner.
    #[error("unmatched delimiter `{delimiter}` in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}

/// A node tree that cannot be serialized. Always a construction bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("structural error in <{tag}>: {reason}")]
    Structural { tag: String, reason: &'static str },
}

/// The single error returned by a whole-document conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
