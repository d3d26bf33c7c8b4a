//! Incremental construction of [`Value`]s from events.

use crate::event::ParseEvent;
use crate::value::{Array, Map, Value};

/// Where a finished container lands once it closes: under a key in the
/// enclosing object, or appended to the enclosing array.
#[derive(Debug)]
struct Slot {
    container: Container,
    home: Option<String>,
}

#[derive(Debug)]
enum Container {
    Array(Array),
    Object(Map),
}

/// Incrementally builds a single value from untagged parser events.
///
/// Containers are kept open on an internal stack and installed into their
/// parent when they close. Duplicate object keys resolve last-write-wins,
/// with the key keeping its first position — standard JSON object semantics.
///
/// # Examples
///
/// ```
/// use jsonsift::{basic_parse, ObjectBuilder, ParseOptions, StrSource, Value};
///
/// let mut builder = ObjectBuilder::new();
/// let source = StrSource::new(r#"{"key": "value"}"#);
/// for event in basic_parse(source, ParseOptions::default()).unwrap() {
///     builder.event(event.unwrap());
/// }
/// assert_eq!(
///     builder.into_value().unwrap(),
///     Value::Object([("key".to_string(), Value::from("value"))].into_iter().collect()),
/// );
/// ```
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    stack: Vec<Slot>,
    /// Key awaiting its value in the innermost open object.
    key: Option<String>,
    value: Option<Value>,
}

impl ObjectBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one event.
    pub fn event(&mut self, event: ParseEvent) {
        match event {
            ParseEvent::MapKey(key) => self.key = Some(key),
            ParseEvent::StartMap => {
                let home = self.key.take();
                self.stack.push(Slot {
                    container: Container::Object(Map::new()),
                    home,
                });
            }
            ParseEvent::StartArray => {
                let home = self.key.take();
                self.stack.push(Slot {
                    container: Container::Array(Array::new()),
                    home,
                });
            }
            ParseEvent::EndMap | ParseEvent::EndArray => {
                if let Some(slot) = self.stack.pop() {
                    let value = match slot.container {
                        Container::Array(a) => Value::Array(a),
                        Container::Object(m) => Value::Object(m),
                    };
                    self.place(slot.home, value);
                }
            }
            ParseEvent::Null => self.place_scalar(Value::Null),
            ParseEvent::Boolean(b) => self.place_scalar(Value::Boolean(b)),
            ParseEvent::Number(n) => self.place_scalar(Value::Number(n)),
            ParseEvent::String(s) => self.place_scalar(Value::String(s)),
        }
    }

    /// Returns `true` once the outermost value has been completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.value.is_some() && self.stack.is_empty()
    }

    /// The completed value, if the event stream described one.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    fn place_scalar(&mut self, value: Value) {
        let key = self.key.take();
        self.place(key, value);
    }

    fn place(&mut self, key: Option<String>, value: Value) {
        match self.stack.last_mut() {
            Some(Slot {
                container: Container::Array(a),
                ..
            }) => a.push(value),
            Some(Slot {
                container: Container::Object(m),
                ..
            }) => {
                if let Some(k) = key {
                    m.insert(k, value);
                }
            }
            None => self.value = Some(value),
        }
    }
}
