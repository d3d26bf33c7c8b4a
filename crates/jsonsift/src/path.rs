//! Path prefixes for events.
//!
//! Each event is tagged with a dot-joined prefix describing its position in
//! the document tree. Object nesting contributes the member key; array
//! nesting contributes the literal segment `item`, shared by all elements.

use crate::event::ParseEvent;

/// Tags events with their tree position.
///
/// The segment stack grows and shrinks in lockstep with container starts and
/// ends. Entering an object pushes a placeholder that each `MapKey` event
/// overwrites, so the keyed prefix is in place before the member value's
/// events arrive.
#[derive(Debug, Default)]
pub(crate) struct PathAnnotator {
    segments: Vec<String>,
}

fn join(segments: &[String]) -> String {
    segments.join(".")
}

impl PathAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prefix for `event` and updates the segment stack.
    pub fn annotate(&mut self, event: &ParseEvent) -> String {
        match event {
            ParseEvent::MapKey(key) => {
                if self.segments.is_empty() {
                    return String::new();
                }
                let prefix = join(&self.segments[..self.segments.len() - 1]);
                if let Some(placeholder) = self.segments.last_mut() {
                    key.clone_into(placeholder);
                }
                prefix
            }
            ParseEvent::StartMap => {
                let prefix = join(&self.segments);
                self.segments.push(String::new());
                prefix
            }
            ParseEvent::StartArray => {
                let prefix = join(&self.segments);
                self.segments.push("item".to_string());
                prefix
            }
            ParseEvent::EndMap | ParseEvent::EndArray => {
                self.segments.pop();
                join(&self.segments)
            }
            _ => join(&self.segments),
        }
    }
}
