//! Input sources.
//!
//! A [`ChunkSource`] yields successive chunks of decoded text; an empty
//! chunk marks end of input. Text sources hand their content over directly;
//! byte sources are decoded as UTF-8 incrementally, so a multi-byte sequence
//! split across reads is never misinterpreted.

use std::io::Read;
use std::str;

use crate::error::JsonError;
use crate::options::DEFAULT_BUFFER_SIZE;

/// Yields successive chunks of input text to a parse session.
pub trait ChunkSource {
    /// Appends the next chunk to `buf`, returning the number of bytes added.
    /// Zero means end of input.
    ///
    /// # Errors
    ///
    /// Fails when the underlying input cannot be read or decoded.
    fn next_chunk(&mut self, buf: &mut String) -> Result<usize, JsonError>;

    /// Applies the session's configured pull size. Sources with fixed
    /// chunking ignore it.
    fn set_buffer_size(&mut self, _bytes: usize) {}
}

/// A text source feeding from an in-memory string in `buffer_size` slices.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    text: &'a str,
    pos: usize,
    buffer_size: usize,
}

impl<'a> StrSource<'a> {
    /// Creates a source over `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl ChunkSource for StrSource<'_> {
    fn next_chunk(&mut self, buf: &mut String) -> Result<usize, JsonError> {
        if self.pos >= self.text.len() {
            return Ok(0);
        }
        let mut end = usize::min(self.pos + self.buffer_size, self.text.len());
        while !self.text.is_char_boundary(end) {
            end += 1;
        }
        buf.push_str(&self.text[self.pos..end]);
        let n = end - self.pos;
        self.pos = end;
        Ok(n)
    }

    fn set_buffer_size(&mut self, bytes: usize) {
        self.buffer_size = bytes.max(1);
    }
}

/// A byte source pulling from a reader and decoding UTF-8 incrementally.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    buffer_size: usize,
    /// Undecoded tail bytes — at most one partial UTF-8 sequence.
    pending: Vec<u8>,
    /// Bytes decoded so far, for error offsets.
    decoded: usize,
    eof: bool,
}

impl<R: Read> ReadSource<R> {
    /// Creates a source over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer_size: DEFAULT_BUFFER_SIZE,
            pending: Vec::new(),
            decoded: 0,
            eof: false,
        }
    }
}

impl<R: Read> ChunkSource for ReadSource<R> {
    fn next_chunk(&mut self, buf: &mut String) -> Result<usize, JsonError> {
        let mut appended = 0;
        while appended == 0 {
            if self.eof {
                if self.pending.is_empty() {
                    return Ok(0);
                }
                // A partial sequence with nothing left to complete it.
                return Err(JsonError::InvalidUtf8 {
                    offset: self.decoded,
                });
            }
            let start = self.pending.len();
            self.pending.resize(start + self.buffer_size, 0);
            let n = self.reader.read(&mut self.pending[start..])?;
            self.pending.truncate(start + n);
            if n == 0 {
                self.eof = true;
                continue;
            }
            match str::from_utf8(&self.pending) {
                Ok(text) => {
                    buf.push_str(text);
                    appended = self.pending.len();
                    self.pending.clear();
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    if valid == 0 && err.error_len().is_some() {
                        return Err(JsonError::InvalidUtf8 {
                            offset: self.decoded,
                        });
                    }
                    // Deliver the valid prefix and carry the tail — either a
                    // sequence split by the read boundary, or invalid bytes
                    // that will surface as an error on the next call once
                    // everything before them has been parsed.
                    if let Ok(text) = str::from_utf8(&self.pending[..valid]) {
                        buf.push_str(text);
                    }
                    appended = valid;
                    self.pending.drain(..valid);
                }
            }
            self.decoded += appended;
        }
        Ok(appended)
    }

    fn set_buffer_size(&mut self, bytes: usize) {
        self.buffer_size = bytes.max(1);
    }
}

/// A source over an explicit sequence of text chunks, useful for pinning
/// exact chunk boundaries. An empty chunk ends the input.
#[derive(Debug)]
pub struct ChunkIterSource<I> {
    chunks: I,
    done: bool,
}

impl<I> ChunkIterSource<I> {
    /// Creates a source that yields each chunk of `chunks` as-is.
    pub fn new<T>(chunks: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            chunks: chunks.into_iter(),
            done: false,
        }
    }
}

impl<I, S> ChunkSource for ChunkIterSource<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn next_chunk(&mut self, buf: &mut String) -> Result<usize, JsonError> {
        if self.done {
            return Ok(0);
        }
        match self.chunks.next() {
            Some(chunk) => {
                let chunk = chunk.as_ref();
                if chunk.is_empty() {
                    self.done = true;
                    return Ok(0);
                }
                buf.push_str(chunk);
                Ok(chunk.len())
            }
            None => {
                self.done = true;
                Ok(0)
            }
        }
    }
}
