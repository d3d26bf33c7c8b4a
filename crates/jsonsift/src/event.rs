//! Structural events emitted by the parser.

use crate::number::Number;

/// A structural unit of the parsed JSON tree.
///
/// Events are emitted in document order: container starts and ends, map keys,
/// and scalar values. [`parse`](crate::parse) pairs each event with the
/// dotted path prefix locating it in the tree.
///
/// # Examples
///
/// ```
/// use jsonsift::{basic_parse, Number, ParseEvent, ParseOptions, StrSource};
///
/// let events: Result<Vec<_>, _> =
///     basic_parse(StrSource::new("[1]"), ParseOptions::default())
///         .unwrap()
///         .collect();
/// assert_eq!(
///     events.unwrap(),
///     vec![
///         ParseEvent::StartArray,
///         ParseEvent::Number(Number::Int(1)),
///         ParseEvent::EndArray,
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value"))]
pub enum ParseEvent {
    /// A JSON `null` value.
    Null,
    /// A JSON `true` or `false` value.
    Boolean(bool),
    /// A JSON number value.
    Number(Number),
    /// A JSON string value, unescaped.
    String(String),
    /// An object member key, unescaped.
    MapKey(String),
    /// Marks the start of a JSON object.
    StartMap,
    /// Marks the end of a JSON object.
    EndMap,
    /// Marks the start of a JSON array.
    StartArray,
    /// Marks the end of a JSON array.
    EndArray,
}

impl ParseEvent {
    /// Returns `true` for [`StartMap`] and [`StartArray`].
    ///
    /// [`StartMap`]: ParseEvent::StartMap
    /// [`StartArray`]: ParseEvent::StartArray
    #[must_use]
    pub fn starts_container(&self) -> bool {
        matches!(self, Self::StartMap | Self::StartArray)
    }

    /// Returns `true` for [`EndMap`] and [`EndArray`].
    ///
    /// [`EndMap`]: ParseEvent::EndMap
    /// [`EndArray`]: ParseEvent::EndArray
    #[must_use]
    pub fn ends_container(&self) -> bool {
        matches!(self, Self::EndMap | Self::EndArray)
    }
}
