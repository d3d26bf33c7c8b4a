//! The public pipeline: sessions, layered iterators, and entry points.
//!
//! Each layer is a one-pass, forward-only iterator driving the layer beneath
//! it: chunks feed the lexer, lexemes feed the state machine, events are
//! tagged with path prefixes, and the extractors materialize values at a
//! target prefix. All stage state lives in plain struct fields, so a session
//! suspends cleanly between chunks. The first error ends the stream; later
//! calls to `next` return `None`.

use std::collections::VecDeque;

use crate::error::JsonError;
use crate::event::ParseEvent;
use crate::extract::{ItemsFilter, KvItemsFilter};
use crate::lexer::{Lexeme, Lexer};
use crate::options::ParseOptions;
use crate::parser::ValueParser;
use crate::path::PathAnnotator;
use crate::source::ChunkSource;
use crate::value::Value;

/// Capability of producing the typed event stream.
///
/// This is the seam between the event consumers ([`Parse`], [`Items`],
/// [`KvItems`]) and whatever produces events: the built-in state-machine
/// session, or an adapter over a native parsing library that reproduces the
/// same event ordering, numeric classification, and error taxonomy. Any
/// iterator of event results qualifies.
pub trait EventSource {
    /// Pulls the next event.
    fn next_event(&mut self) -> Option<Result<ParseEvent, JsonError>>;
}

impl<I: Iterator<Item = Result<ParseEvent, JsonError>>> EventSource for I {
    fn next_event(&mut self) -> Option<Result<ParseEvent, JsonError>> {
        self.next()
    }
}

/// The raw event stream over a chunk source — no path tagging.
///
/// Created by [`basic_parse`].
#[derive(Debug)]
pub struct BasicParse<S> {
    source: S,
    lexer: Lexer,
    parser: ValueParser,
    chunk: String,
    lexemes: VecDeque<Lexeme>,
    events: VecDeque<ParseEvent>,
    /// An error waiting to be surfaced once queued events have drained.
    failed: Option<JsonError>,
    done: bool,
}

impl<S: ChunkSource> BasicParse<S> {
    /// Creates a session over `source`.
    ///
    /// # Errors
    ///
    /// Fails with [`JsonError::CommentsUnsupported`] when `allow_comments`
    /// is set; this backend has no comment support.
    pub fn new(mut source: S, options: ParseOptions) -> Result<Self, JsonError> {
        if options.allow_comments {
            return Err(JsonError::CommentsUnsupported);
        }
        source.set_buffer_size(options.buffer_size);
        Ok(Self {
            source,
            lexer: Lexer::new(),
            parser: ValueParser::new(options.multiple_values),
            chunk: String::new(),
            lexemes: VecDeque::new(),
            events: VecDeque::new(),
            failed: None,
            done: false,
        })
    }

    /// Pulls one chunk through the lexer and state machine.
    fn pump(&mut self) -> Result<(), JsonError> {
        self.chunk.clear();
        let n = self.source.next_chunk(&mut self.chunk)?;
        if n == 0 {
            self.lexer.finish(&mut self.lexemes)?;
            while let Some(lexeme) = self.lexemes.pop_front() {
                self.parser.push(&lexeme, &mut self.events)?;
            }
            self.parser.finish()?;
            self.done = true;
        } else {
            self.lexer.feed(&self.chunk, &mut self.lexemes);
            while let Some(lexeme) = self.lexemes.pop_front() {
                self.parser.push(&lexeme, &mut self.events)?;
            }
        }
        Ok(())
    }
}

impl<S: ChunkSource> Iterator for BasicParse<S> {
    type Item = Result<ParseEvent, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Events produced before a failure drain first, matching the
            // order a blocking parse would have surfaced them in.
            if let Some(event) = self.events.pop_front() {
                return Some(Ok(event));
            }
            if let Some(err) = self.failed.take() {
                self.done = true;
                return Some(Err(err));
            }
            if self.done {
                return None;
            }
            if let Err(err) = self.pump() {
                self.failed = Some(err);
            }
        }
    }
}

/// The path-tagged event stream.
///
/// Created by [`parse`], or by [`Parse::over`] for a foreign event source.
#[derive(Debug)]
pub struct Parse<E> {
    events: E,
    annotator: PathAnnotator,
}

impl<E: EventSource> Parse<E> {
    /// Tags an existing event stream with path prefixes.
    pub fn over(events: E) -> Self {
        Self {
            events,
            annotator: PathAnnotator::new(),
        }
    }
}

impl<E: EventSource> Iterator for Parse<E> {
    type Item = Result<(String, ParseEvent), JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.events.next_event()? {
            Ok(event) => Some(Ok((self.annotator.annotate(&event), event))),
            Err(err) => Some(Err(err)),
        }
    }
}

/// Values materialized at a target prefix.
///
/// Created by [`items`], or by [`Items::over`] for an existing tagged
/// stream.
#[derive(Debug)]
pub struct Items<T> {
    tagged: T,
    filter: ItemsFilter,
    out: VecDeque<Value>,
    failed: Option<JsonError>,
    done: bool,
}

impl<T> Items<T>
where
    T: Iterator<Item = Result<(String, ParseEvent), JsonError>>,
{
    /// Filters an existing tagged stream.
    pub fn over(tagged: T, prefix: &str) -> Self {
        Self {
            tagged,
            filter: ItemsFilter::new(prefix),
            out: VecDeque::new(),
            failed: None,
            done: false,
        }
    }
}

impl<T> Iterator for Items<T>
where
    T: Iterator<Item = Result<(String, ParseEvent), JsonError>>,
{
    type Item = Result<Value, JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.out.pop_front() {
                return Some(Ok(value));
            }
            if let Some(err) = self.failed.take() {
                self.done = true;
                return Some(Err(err));
            }
            if self.done {
                return None;
            }
            match self.tagged.next() {
                Some(Ok((path, event))) => self.filter.push(&path, event, &mut self.out),
                Some(Err(err)) => self.failed = Some(err),
                None => self.done = true,
            }
        }
    }
}

/// Key/value pairs of the object at a target prefix.
///
/// Created by [`kvitems`], or by [`KvItems::over`] for an existing tagged
/// stream.
#[derive(Debug)]
pub struct KvItems<T> {
    tagged: T,
    filter: KvItemsFilter,
    out: VecDeque<(String, Value)>,
    failed: Option<JsonError>,
    done: bool,
}

impl<T> KvItems<T>
where
    T: Iterator<Item = Result<(String, ParseEvent), JsonError>>,
{
    /// Filters an existing tagged stream.
    pub fn over(tagged: T, prefix: &str) -> Self {
        Self {
            tagged,
            filter: KvItemsFilter::new(prefix),
            out: VecDeque::new(),
            failed: None,
            done: false,
        }
    }
}

impl<T> Iterator for KvItems<T>
where
    T: Iterator<Item = Result<(String, ParseEvent), JsonError>>,
{
    type Item = Result<(String, Value), JsonError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.out.pop_front() {
                return Some(Ok(pair));
            }
            if let Some(err) = self.failed.take() {
                self.done = true;
                return Some(Err(err));
            }
            if self.done {
                return None;
            }
            match self.tagged.next() {
                Some(Ok((path, event))) => self.filter.push(&path, event, &mut self.out),
                Some(Err(err)) => self.failed = Some(err),
                None => self.done = true,
            }
        }
    }
}

/// Streams raw structural events from `source` — no path tagging.
///
/// # Errors
///
/// Fails fast when `options` requests a feature this backend lacks; see
/// [`BasicParse::new`].
///
/// # Examples
///
/// ```
/// use jsonsift::{basic_parse, ParseEvent, ParseOptions, StrSource};
///
/// let events: Result<Vec<_>, _> =
///     basic_parse(StrSource::new("{}"), ParseOptions::default())
///         .unwrap()
///         .collect();
/// assert_eq!(
///     events.unwrap(),
///     vec![ParseEvent::StartMap, ParseEvent::EndMap]
/// );
/// ```
pub fn basic_parse<S: ChunkSource>(
    source: S,
    options: ParseOptions,
) -> Result<BasicParse<S>, JsonError> {
    BasicParse::new(source, options)
}

/// Streams `(prefix, event)` pairs from `source`.
///
/// # Errors
///
/// Fails fast when `options` requests a feature this backend lacks; see
/// [`BasicParse::new`].
///
/// # Examples
///
/// ```
/// use jsonsift::{parse, ParseEvent, ParseOptions, StrSource};
///
/// let tagged: Result<Vec<_>, _> =
///     parse(StrSource::new(r#"{"a": [1]}"#), ParseOptions::default())
///         .unwrap()
///         .collect();
/// let prefixes: Vec<String> = tagged.unwrap().into_iter().map(|(p, _)| p).collect();
/// assert_eq!(prefixes, vec!["", "", "a", "a.item", "a", ""]);
/// ```
pub fn parse<S: ChunkSource>(
    source: S,
    options: ParseOptions,
) -> Result<Parse<BasicParse<S>>, JsonError> {
    Ok(Parse::over(basic_parse(source, options)?))
}

/// Streams the values found at `prefix`, in document order.
///
/// Only the currently matched subtree is ever materialized; everything
/// outside the prefix is scanned and discarded.
///
/// # Errors
///
/// Fails fast when `options` requests a feature this backend lacks; see
/// [`BasicParse::new`].
///
/// # Examples
///
/// ```
/// use jsonsift::{items, ParseOptions, StrSource, Value};
///
/// let source = StrSource::new(r#"{"rows": [1, 2, 3]}"#);
/// let rows: Result<Vec<_>, _> = items(source, "rows.item", ParseOptions::default())
///     .unwrap()
///     .collect();
/// assert_eq!(
///     rows.unwrap(),
///     vec![Value::from(1), Value::from(2), Value::from(3)]
/// );
/// ```
pub fn items<S: ChunkSource>(
    source: S,
    prefix: &str,
    options: ParseOptions,
) -> Result<Items<Parse<BasicParse<S>>>, JsonError> {
    Ok(Items::over(parse(source, options)?, prefix))
}

/// Streams `(key, value)` pairs of the object at `prefix`, in document
/// order. Repeated keys are emitted once per occurrence.
///
/// # Errors
///
/// Fails fast when `options` requests a feature this backend lacks; see
/// [`BasicParse::new`].
///
/// # Examples
///
/// ```
/// use jsonsift::{kvitems, ParseOptions, StrSource, Value};
///
/// let source = StrSource::new(r#"{"a": 1, "b": 2}"#);
/// let pairs: Result<Vec<_>, _> = kvitems(source, "", ParseOptions::default())
///     .unwrap()
///     .collect();
/// assert_eq!(
///     pairs.unwrap(),
///     vec![
///         ("a".to_string(), Value::from(1)),
///         ("b".to_string(), Value::from(2)),
///     ]
/// );
/// ```
pub fn kvitems<S: ChunkSource>(
    source: S,
    prefix: &str,
    options: ParseOptions,
) -> Result<KvItems<Parse<BasicParse<S>>>, JsonError> {
    Ok(KvItems::over(parse(source, options)?, prefix))
}
