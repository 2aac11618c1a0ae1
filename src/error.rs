//! Errors raised by annotated conversion.
//!
//! The converter expects balanced tags from the tokenizer; these errors
//! report event streams that are not.

/// Error type for annotated conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A closing tag popped an empty style stack.
    #[error("closing tag </{tag}> has no open style to pop")]
    StyleStackUnderflow { tag: String },

    /// The event stream ended with styles still open.
    #[error("{open} style(s) still open at end of document")]
    UnclosedStyles { open: usize },
}

/// Result type alias for annotated conversion.
pub type Result<T> = std::result::Result<T, Error>;
