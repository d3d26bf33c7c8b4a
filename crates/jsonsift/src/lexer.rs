//! Incremental tokenizer.
//!
//! The lexer accepts input in arbitrarily sized chunks and produces
//! offset-tagged lexemes. A token that might continue past the end of the
//! buffered input — an unterminated string, or a bare run touching the buffer
//! end — is held back until the next chunk arrives or end of input is
//! declared. Consumed bytes are dropped from the front of the buffer and
//! accounted in `discarded`, so reported offsets stay globally correct
//! without retaining the whole input.

use std::collections::VecDeque;

use bstr::ByteSlice;

use crate::error::JsonError;

/// A single token with its byte offset in the overall input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub offset: usize,
    pub token: Token,
}

/// Token payloads, split by how the parser consumes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A quoted string literal, quotes included, escapes intact.
    Str(String),
    /// A bare run of `[a-z0-9eE.+-]` — a number or keyword literal — or a
    /// single character the lexer has no use for (the parser rejects it).
    Scalar(String),
    /// One of `{` `}` `[` `]` `,` `:`.
    Punct(u8),
}

impl Token {
    /// The token text as the user wrote it, for error reporting.
    pub fn symbol(&self) -> String {
        match self {
            Self::Str(s) | Self::Scalar(s) => s.clone(),
            Self::Punct(b) => char::from(*b).to_string(),
        }
    }
}

fn is_bare(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'E' | b'.' | b'+' | b'-')
}

fn is_punct(b: u8) -> bool {
    matches!(b, b'{' | b'}' | b'[' | b']' | b',' | b':')
}

fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

// Length of a UTF-8 sequence from its leading byte. The buffer is a `String`,
// so the byte is always a valid leading byte.
fn utf8_len(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

/// Outcome of scanning for a string's closing quote.
enum StringScan {
    /// Index of the closing quote.
    Complete(usize),
    /// No unescaped quote yet; resume searching from this index once more
    /// input arrives.
    Partial(usize),
}

#[derive(Debug, Default)]
pub(crate) struct Lexer {
    buf: String,
    /// Bytes dropped from the front of `buf` so far.
    discarded: usize,
    /// Resume point for the closing-quote search of a pending string.
    resume: usize,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and emits every lexeme that is certainly complete.
    pub fn feed(&mut self, chunk: &str, out: &mut VecDeque<Lexeme>) {
        self.buf.push_str(chunk);
        // Scanning with more input pending never fails; incomplete tokens
        // simply stay buffered.
        let _ = self.scan(false, out);
    }

    /// Declares end of input, flushing any trailing token.
    pub fn finish(&mut self, out: &mut VecDeque<Lexeme>) -> Result<(), JsonError> {
        self.scan(true, out)
    }

    fn scan(&mut self, at_eof: bool, out: &mut VecDeque<Lexeme>) -> Result<(), JsonError> {
        let mut pos = 0;
        loop {
            let bytes = self.buf.as_bytes();
            let len = bytes.len();
            while pos < len && is_ws(bytes[pos]) {
                pos += 1;
            }
            if pos >= len {
                break;
            }
            let b = bytes[pos];
            if b == b'"' {
                match self.scan_string(pos) {
                    StringScan::Complete(end) => {
                        out.push_back(Lexeme {
                            offset: self.discarded + pos,
                            token: Token::Str(self.buf[pos..=end].to_string()),
                        });
                        self.resume = 0;
                        pos = end + 1;
                    }
                    StringScan::Partial(next) => {
                        if at_eof {
                            return Err(JsonError::IncompleteString {
                                offset: self.discarded + pos,
                            });
                        }
                        self.resume = next;
                        break;
                    }
                }
            } else if is_bare(b) {
                let mut end = pos + 1;
                while end < len && is_bare(bytes[end]) {
                    end += 1;
                }
                if end == len && !at_eof {
                    // The run may continue in the next chunk.
                    break;
                }
                out.push_back(Lexeme {
                    offset: self.discarded + pos,
                    token: Token::Scalar(self.buf[pos..end].to_string()),
                });
                pos = end;
            } else if is_punct(b) {
                out.push_back(Lexeme {
                    offset: self.discarded + pos,
                    token: Token::Punct(b),
                });
                pos += 1;
            } else {
                // Any other character forms its own lexeme; the parser
                // reports it as unexpected.
                let end = pos + utf8_len(b);
                out.push_back(Lexeme {
                    offset: self.discarded + pos,
                    token: Token::Scalar(self.buf[pos..end].to_string()),
                });
                pos = end;
            }
        }
        self.discarded += pos;
        self.buf.drain(..pos);
        self.resume = self.resume.saturating_sub(pos);
        Ok(())
    }

    /// Finds the first unescaped `"` after the opener at `quote`. A quote is
    /// escaped iff preceded by an odd number of consecutive backslashes.
    fn scan_string(&self, quote: usize) -> StringScan {
        let bytes = self.buf.as_bytes();
        let mut from = (quote + 1).max(self.resume);
        loop {
            let Some(rel) = bytes[from..].find_byte(b'"') else {
                return StringScan::Partial(bytes.len());
            };
            let end = from + rel;
            let mut esc = end;
            while esc > quote + 1 && bytes[esc - 1] == b'\\' {
                esc -= 1;
            }
            if (end - esc) % 2 == 0 {
                return StringScan::Complete(end);
            }
            from = end + 1;
        }
    }
}
