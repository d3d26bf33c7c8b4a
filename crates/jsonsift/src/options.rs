/// Default number of bytes pulled from a source per chunk.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for a parse session.
///
/// # Default
///
/// Both flags default to `false`; `buffer_size` defaults to
/// [`DEFAULT_BUFFER_SIZE`].
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Whether to skip `//` and `/* */` comments outside strings.
    ///
    /// The built-in state-machine backend does not support comments:
    /// constructing a session with this set fails fast with
    /// [`CommentsUnsupported`] rather than silently ignoring the flag. A
    /// backend that understands comments may honor it.
    ///
    /// [`CommentsUnsupported`]: crate::JsonError::CommentsUnsupported
    pub allow_comments: bool,

    /// Whether to accept concatenated top-level values.
    ///
    /// When `true`, the parser reseeds itself after each complete value
    /// instead of raising an error on further input. This supports formats
    /// such as JSON Lines and arbitrary concatenation of JSON documents.
    ///
    /// # Examples
    ///
    /// ```json
    /// {"a":1}{"b":2}
    /// ```
    pub multiple_values: bool,

    /// Number of bytes pulled from the input source per chunk. Affects only
    /// how input is fetched, never the emitted events.
    pub buffer_size: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_comments: false,
            multiple_values: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}
