//! Prefix-filtered extraction stages.
//!
//! Both stages consume path-tagged events and materialize only the subtrees
//! at a caller-supplied prefix, holding at most one in-flight capture — the
//! rest of the document is scanned but never retained.

use std::collections::VecDeque;

use crate::builder::ObjectBuilder;
use crate::event::ParseEvent;
use crate::value::Value;

/// An in-flight container capture for [`ItemsFilter`].
#[derive(Debug)]
struct Capture {
    builder: ObjectBuilder,
    depth: usize,
}

/// Emits every complete value whose path equals the target prefix, in
/// document order.
#[derive(Debug)]
pub(crate) struct ItemsFilter {
    prefix: String,
    capture: Option<Capture>,
}

impl ItemsFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            capture: None,
        }
    }

    /// Consumes one tagged event, pushing any completed value.
    pub fn push(&mut self, path: &str, event: ParseEvent, out: &mut VecDeque<Value>) {
        if let Some(capture) = &mut self.capture {
            if event.starts_container() {
                capture.depth += 1;
            } else if event.ends_container() {
                capture.depth -= 1;
            }
            capture.builder.event(event);
            if capture.depth == 0 {
                if let Some(capture) = self.capture.take() {
                    if let Some(value) = capture.builder.into_value() {
                        out.push_back(value);
                    }
                }
            }
            return;
        }
        if path != self.prefix {
            return;
        }
        match event {
            ParseEvent::StartMap | ParseEvent::StartArray => {
                let mut builder = ObjectBuilder::new();
                builder.event(event);
                self.capture = Some(Capture { builder, depth: 1 });
            }
            ParseEvent::Null => out.push_back(Value::Null),
            ParseEvent::Boolean(b) => out.push_back(Value::Boolean(b)),
            ParseEvent::Number(n) => out.push_back(Value::Number(n)),
            ParseEvent::String(s) => out.push_back(Value::String(s)),
            // Keys and container ends at the prefix belong to the enclosing
            // structure, not to a value of their own.
            ParseEvent::MapKey(_) | ParseEvent::EndMap | ParseEvent::EndArray => {}
        }
    }
}

/// An in-flight member capture for [`KvItemsFilter`].
#[derive(Debug)]
struct KvCapture {
    key: String,
    builder: ObjectBuilder,
    /// Map nesting relative to the target object: 0 while directly inside
    /// it, -1 once its closing brace has been consumed.
    depth: i64,
}

/// Emits a `(key, value)` pair for every member of the object at the target
/// prefix, in document order.
///
/// Unlike [`ObjectBuilder`], which collapses duplicate keys last-write-wins,
/// this stage runs before any map is materialized for the target object and
/// therefore preserves every occurrence of a repeated key.
#[derive(Debug)]
pub(crate) struct KvItemsFilter {
    prefix: String,
    capture: Option<KvCapture>,
}

impl KvItemsFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            capture: None,
        }
    }

    /// Consumes one tagged event, pushing any completed pair.
    pub fn push(
        &mut self,
        path: &str,
        event: ParseEvent,
        out: &mut VecDeque<(String, Value)>,
    ) {
        if let Some(capture) = &mut self.capture {
            // Only map nesting matters: a key cannot appear inside an array
            // without an intervening map.
            match &event {
                ParseEvent::StartMap => capture.depth += 1,
                ParseEvent::EndMap => capture.depth -= 1,
                _ => {}
            }
            let balanced_key = capture.depth == 0 && matches!(event, ParseEvent::MapKey(_));
            let object_closed = capture.depth == -1;
            if balanced_key || object_closed {
                if let Some(done) = self.capture.take() {
                    let value = done.builder.into_value().unwrap_or(Value::Null);
                    out.push_back((done.key, value));
                }
                // A balanced key chains straight into the next capture.
                if let ParseEvent::MapKey(key) = event {
                    if path == self.prefix {
                        self.capture = Some(KvCapture {
                            key,
                            builder: ObjectBuilder::new(),
                            depth: 0,
                        });
                    }
                }
                return;
            }
            capture.builder.event(event);
            return;
        }
        if path == self.prefix {
            if let ParseEvent::MapKey(key) = event {
                self.capture = Some(KvCapture {
                    key,
                    builder: ObjectBuilder::new(),
                    depth: 0,
                });
            }
        }
    }
}
