//! A streaming, incremental JSON event parser with path-prefix extraction.
//!
//! Input arrives as arbitrarily chunked text or bytes and flows through a
//! four-stage pipeline: the lexer turns chunks into offset-tagged lexemes, a
//! stack-based state machine turns lexemes into structural [`ParseEvent`]s,
//! a path annotator tags each event with its dotted position in the document
//! tree, and the extractors materialize only the subtrees a caller asked
//! for. No stage ever needs the whole document in memory, and no stage cares
//! how the input was chunked.
//!
//! Four entry points cover the common shapes:
//!
//! - [`basic_parse`] — the raw event stream.
//! - [`parse`] — events tagged with path prefixes such as `rows.item.id`
//!   (array elements all share the segment `item`).
//! - [`items`] — complete [`Value`]s at a prefix, in document order.
//! - [`kvitems`] — `(key, value)` pairs of the object at a prefix.
//!
//! # Examples
//!
//! ```
//! use jsonsift::{items, ParseOptions, StrSource, Value};
//!
//! let source = StrSource::new(r#"{"users": [{"name": "ana"}, {"name": "bo"}]}"#);
//! let names: Vec<String> = items(source, "users.item", ParseOptions::default())
//!     .unwrap()
//!     .map(|user| {
//!         let user = user.unwrap();
//!         user.as_object().unwrap()["name"]
//!             .as_str()
//!             .unwrap()
//!             .to_string()
//!     })
//!     .collect();
//! assert_eq!(names, vec!["ana".to_string(), "bo".to_string()]);
//! ```
//!
//! Sessions are one-pass and forward-only: to iterate again, build a new
//! session over a fresh source. The consumers ([`Parse`], [`Items`],
//! [`KvItems`]) depend only on the [`EventSource`] capability, so a backend
//! wrapping a native parsing library can substitute for the built-in state
//! machine as long as it reproduces the same event ordering, numeric
//! classification, and error taxonomy.

mod builder;
mod error;
mod escape;
mod event;
mod extract;
mod lexer;
mod number;
mod options;
mod parser;
mod path;
mod source;
mod stream;
mod value;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use builder::ObjectBuilder;
pub use error::JsonError;
pub use event::ParseEvent;
pub use number::Number;
pub use options::{DEFAULT_BUFFER_SIZE, ParseOptions};
pub use source::{ChunkIterSource, ChunkSource, ReadSource, StrSource};
pub use stream::{
    BasicParse, EventSource, Items, KvItems, Parse, basic_parse, items, kvitems, parse,
};
pub use value::{Array, Map, Value};
