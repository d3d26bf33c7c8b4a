//! The stack-based finite-state parser.
//!
//! Consumes lexemes from the [`Lexer`](crate::lexer::Lexer) and emits
//! [`ParseEvent`]s. The stack holds one frame per open container plus the
//! pending-value frame; an empty stack means no value is pending. Because the
//! parser is push-based, the points where a pull parser would peek ahead —
//! directly after `[` or `{`, and between a key and its `:` — are encoded as
//! explicit wait states, and the lexeme that resolves them is reprocessed in
//! the state it selects.

use std::collections::VecDeque;

use crate::error::JsonError;
use crate::escape::unescape;
use crate::event::ParseEvent;
use crate::lexer::{Lexeme, Token};
use crate::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// A value is expected.
    Value,
    /// Just saw `[`; either `]` or the first element follows.
    ArrayFirst,
    /// An element just completed; `,` or `]` follows.
    ArrayElementEnd,
    /// Just saw `{`; either `}` or the first key follows.
    ObjectFirst,
    /// A key is expected.
    ObjectKey,
    /// A key was emitted; `:` must follow.
    Colon,
    /// A member value just completed; `,` or `}` follows.
    ObjectEnd,
}

#[derive(Debug)]
pub(crate) struct ValueParser {
    stack: Vec<State>,
    multiple_values: bool,
}

impl ValueParser {
    pub fn new(multiple_values: bool) -> Self {
        Self {
            stack: vec![State::Value],
            multiple_values,
        }
    }

    /// Consumes one lexeme, emitting any events it completes.
    pub fn push(&mut self, lexeme: &Lexeme, out: &mut VecDeque<ParseEvent>) -> Result<(), JsonError> {
        let unexpected = || JsonError::UnexpectedSymbol {
            symbol: lexeme.token.symbol(),
            offset: lexeme.offset,
        };
        loop {
            let Some(&state) = self.stack.last() else {
                if self.multiple_values {
                    self.stack.push(State::Value);
                    continue;
                }
                return Err(JsonError::AdditionalData {
                    offset: lexeme.offset,
                });
            };
            match (state, &lexeme.token) {
                (State::Value, Token::Scalar(text)) => {
                    match text.as_str() {
                        "null" => out.push_back(ParseEvent::Null),
                        "true" => out.push_back(ParseEvent::Boolean(true)),
                        "false" => out.push_back(ParseEvent::Boolean(false)),
                        _ => match Number::classify(text) {
                            Some(n) => out.push_back(ParseEvent::Number(n)),
                            None => return Err(unexpected()),
                        },
                    }
                    self.stack.pop();
                }
                (State::Value, Token::Str(raw)) => {
                    out.push_back(ParseEvent::String(unescape(raw, lexeme.offset)?));
                    self.stack.pop();
                }
                (State::Value, Token::Punct(b'[')) => {
                    out.push_back(ParseEvent::StartArray);
                    // The Value frame stays beneath; `]` pops both.
                    self.stack.push(State::ArrayFirst);
                }
                (State::Value, Token::Punct(b'{')) => {
                    out.push_back(ParseEvent::StartMap);
                    self.stack.push(State::ObjectFirst);
                }
                (State::Value, Token::Punct(_)) => return Err(unexpected()),

                (State::ArrayFirst, Token::Punct(b']')) => {
                    out.push_back(ParseEvent::EndArray);
                    self.stack.pop();
                    self.stack.pop();
                }
                (State::ArrayFirst, _) => {
                    *self.top() = State::ArrayElementEnd;
                    self.stack.push(State::Value);
                    continue;
                }

                (State::ObjectFirst, Token::Punct(b'}')) => {
                    out.push_back(ParseEvent::EndMap);
                    self.stack.pop();
                    self.stack.pop();
                }
                (State::ObjectFirst, _) => {
                    *self.top() = State::ObjectKey;
                    continue;
                }

                (State::ObjectKey, Token::Str(raw)) => {
                    out.push_back(ParseEvent::MapKey(unescape(raw, lexeme.offset)?));
                    *self.top() = State::Colon;
                }
                (State::ObjectKey, _) => return Err(unexpected()),

                (State::Colon, Token::Punct(b':')) => {
                    *self.top() = State::ObjectEnd;
                    self.stack.push(State::Value);
                }
                (State::Colon, _) => return Err(unexpected()),

                (State::ObjectEnd, Token::Punct(b',')) => {
                    *self.top() = State::ObjectKey;
                }
                (State::ObjectEnd, Token::Punct(b'}')) => {
                    out.push_back(ParseEvent::EndMap);
                    self.stack.pop();
                    self.stack.pop();
                }
                (State::ObjectEnd, _) => return Err(unexpected()),

                (State::ArrayElementEnd, Token::Punct(b',')) => {
                    self.stack.push(State::Value);
                }
                (State::ArrayElementEnd, Token::Punct(b']')) => {
                    out.push_back(ParseEvent::EndArray);
                    self.stack.pop();
                    self.stack.pop();
                }
                (State::ArrayElementEnd, _) => return Err(unexpected()),
            }
            return Ok(());
        }
    }

    /// Observes end of input.
    pub fn finish(&self) -> Result<(), JsonError> {
        if self.stack.is_empty() {
            Ok(())
        } else {
            Err(JsonError::IncompleteJson)
        }
    }

    fn top(&mut self) -> &mut State {
        // The caller just matched on a non-empty stack.
        self.stack.last_mut().expect("state stack is non-empty")
    }
}
