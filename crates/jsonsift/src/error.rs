use thiserror::Error;

/// Errors raised by the parsing pipeline.
///
/// Syntax problems carry the offending lexeme and its byte offset where one
/// is available. Truncated input is kept distinct from malformed input so
/// callers can tell "the stream ended too early" apart from "this will never
/// parse"; see [`JsonError::is_incomplete`].
///
/// Extraction stages propagate these errors unchanged and add no variants of
/// their own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// A lexeme that cannot appear in the current parser state.
    #[error("unexpected symbol {symbol:?} at offset {offset}")]
    UnexpectedSymbol {
        /// The offending lexeme, verbatim (string lexemes keep their quotes).
        symbol: String,
        /// Byte offset of the lexeme in the decoded input text.
        offset: usize,
    },

    /// Input continued after a complete top-level value.
    ///
    /// Only raised when [`multiple_values`] is off.
    ///
    /// [`multiple_values`]: crate::ParseOptions::multiple_values
    #[error("additional data found at offset {offset}")]
    AdditionalData {
        /// Byte offset of the first lexeme past the completed value.
        offset: usize,
    },

    /// End of input while a value or container was still open.
    #[error("incomplete JSON content")]
    IncompleteJson,

    /// End of input inside a string lexeme.
    #[error("incomplete string lexeme at offset {offset}")]
    IncompleteString {
        /// Byte offset of the string's opening quote.
        offset: usize,
    },

    /// A string literal with a malformed escape sequence, an unpaired
    /// surrogate escape, or a raw control character.
    #[error("malformed string literal at offset {offset}")]
    MalformedString {
        /// Byte offset of the string's opening quote.
        offset: usize,
    },

    /// A byte source produced data that is not valid UTF-8.
    #[error("invalid UTF-8 at offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid byte.
        offset: usize,
    },

    /// `allow_comments` was requested from a backend that does not support
    /// comments.
    #[error("comments are not supported by this backend")]
    CommentsUnsupported,

    /// The chunk source failed to produce input.
    ///
    /// The originating error is flattened to its message so that `JsonError`
    /// stays `Clone` and comparable in tests.
    #[error("source error: {0}")]
    Source(String),
}

impl JsonError {
    /// Returns `true` for errors caused by truncated input rather than
    /// malformed input.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteJson | Self::IncompleteString { .. })
    }
}

impl From<std::io::Error> for JsonError {
    fn from(err: std::io::Error) -> Self {
        Self::Source(err.to_string())
    }
}
