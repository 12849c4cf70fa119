//! Cursor Event Types
//!
//! The filtered event vocabulary seen by every traversal primitive. Comments,
//! processing instructions, the XML declaration and DOCTYPE never appear
//! here, and `<e/>` shows up as a start/end pair.

use crate::core::scanner::is_xml_whitespace;
use crate::reader::events::{EndElement, StartElement};
use std::borrow::Cow;

/// Event delivered by an [`EventCursor`](super::EventCursor)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    StartElement(StartElement<'a>),
    EndElement(EndElement<'a>),
    Characters(Characters<'a>),
    EndDocument,
}

/// Discriminant of an [`Event`], used to search the stream by type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    StartElement,
    EndElement,
    Characters,
    EndDocument,
}

/// A coalesced run of character data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Characters<'a> {
    text: Cow<'a, str>,
    whitespace_only: bool,
}

impl<'a> Characters<'a> {
    pub fn new(text: Cow<'a, str>) -> Self {
        let whitespace_only = is_xml_whitespace(&text);
        Characters {
            text,
            whitespace_only,
        }
    }

    /// Decoded character data
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the run contains only XML whitespace
    pub fn is_whitespace_only(&self) -> bool {
        self.whitespace_only
    }

    pub fn into_text(self) -> Cow<'a, str> {
        self.text
    }
}

impl<'a> Event<'a> {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StartElement(_) => EventKind::StartElement,
            Event::EndElement(_) => EventKind::EndElement,
            Event::Characters(_) => EventKind::Characters,
            Event::EndDocument => EventKind::EndDocument,
        }
    }

    pub fn characters(text: impl Into<Cow<'a, str>>) -> Self {
        Event::Characters(Characters::new(text.into()))
    }

    pub fn is_start_element(&self) -> bool {
        matches!(self, Event::StartElement(_))
    }

    pub fn is_end_element(&self) -> bool {
        matches!(self, Event::EndElement(_))
    }

    pub fn is_end_document(&self) -> bool {
        matches!(self, Event::EndDocument)
    }

    /// Whitespace-only character data
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Event::Characters(c) if c.is_whitespace_only())
    }

    pub fn as_start_element(&self) -> Option<&StartElement<'a>> {
        match self {
            Event::StartElement(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_end_element(&self) -> Option<&EndElement<'a>> {
        match self {
            Event::EndElement(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_characters(&self) -> Option<&Characters<'a>> {
        match self {
            Event::Characters(c) => Some(c),
            _ => None,
        }
    }

    /// Detach the event from the input buffer
    pub fn into_owned(self) -> Event<'static> {
        match self {
            Event::StartElement(e) => Event::StartElement(e.into_owned()),
            Event::EndElement(e) => Event::EndElement(e.into_owned()),
            Event::Characters(c) => Event::Characters(Characters {
                text: Cow::Owned(c.text.into_owned()),
                whitespace_only: c.whitespace_only,
            }),
            Event::EndDocument => Event::EndDocument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_detection() {
        assert!(Characters::new(Cow::Borrowed(" \n\t\r ")).is_whitespace_only());
        assert!(!Characters::new(Cow::Borrowed("  x ")).is_whitespace_only());
        // Non-breaking space is not XML whitespace
        assert!(!Characters::new(Cow::Borrowed("\u{a0}")).is_whitespace_only());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Event::characters("x").kind(), EventKind::Characters);
        assert_eq!(Event::EndDocument.kind(), EventKind::EndDocument);
        assert_eq!(
            Event::EndElement(EndElement::new("a")).kind(),
            EventKind::EndElement
        );
    }

    #[test]
    fn test_into_owned() {
        let input = String::from("<a>");
        let event = Event::StartElement(StartElement::new(&input[1..2], vec![]));
        let owned: Event<'static> = event.into_owned();
        drop(input);
        assert_eq!(owned.as_start_element().map(|e| e.name.local()), Some("a"));
    }
}
