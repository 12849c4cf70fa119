//! Zero-Copy Slice Reader
//!
//! Turns tokenizer output into raw `XmlEvent`s over an in-memory document.
//! Input references are maintained directly in the output wherever no
//! entity decoding was needed.

use super::events::{EndElement, StartElement, XmlEvent};
use crate::core::attributes::parse_attributes;
use crate::core::tokenizer::{ParseError, TokenKind, Tokenizer};
use std::borrow::Cow;

/// Zero-copy XML reader from a string slice
pub struct SliceReader<'a> {
    tokenizer: Tokenizer<'a>,
    /// Iterator has yielded an error; the tokenizer position is unreliable after it
    failed: bool,
}

impl<'a> SliceReader<'a> {
    /// Create a new slice reader
    pub fn new(input: &'a str) -> Self {
        SliceReader {
            tokenizer: Tokenizer::new(input),
            failed: false,
        }
    }

    /// Byte offset of the next unread construct
    pub fn position(&self) -> usize {
        self.tokenizer.position()
    }

    /// Get the next XML event. Returns `EndDocument` forever once input is exhausted.
    pub fn next_event(&mut self) -> Result<XmlEvent<'a>, ParseError> {
        let token = self.tokenizer.next_token()?;
        let name = token.name.unwrap_or_default();

        let event = match token.kind {
            TokenKind::Eof => XmlEvent::EndDocument,
            TokenKind::StartTag => {
                let attrs = parse_attributes(token.attributes.unwrap_or_default());
                XmlEvent::StartElement(StartElement::new(name, attrs))
            }
            TokenKind::EmptyTag => {
                let attrs = parse_attributes(token.attributes.unwrap_or_default());
                XmlEvent::EmptyElement(StartElement::new(name, attrs))
            }
            TokenKind::EndTag => XmlEvent::EndElement(EndElement::new(name)),
            TokenKind::Text => XmlEvent::Text(token.content.unwrap_or(Cow::Borrowed(""))),
            TokenKind::CData => XmlEvent::CData(borrowed(token.content)),
            TokenKind::Comment => XmlEvent::Comment(borrowed(token.content)),
            TokenKind::ProcessingInstruction => XmlEvent::ProcessingInstruction {
                target: name,
                data: borrowed(token.content),
            },
            TokenKind::XmlDeclaration => XmlEvent::XmlDeclaration(borrowed(token.content)),
            TokenKind::DocType => XmlEvent::DocType(borrowed(token.content)),
        };
        Ok(event)
    }
}

/// Raw markup content is never decoded, so it is always borrowed
fn borrowed(content: Option<Cow<'_, str>>) -> &str {
    match content {
        Some(Cow::Borrowed(s)) => s,
        _ => "",
    }
}

impl<'a> Iterator for SliceReader<'a> {
    type Item = Result<XmlEvent<'a>, ParseError>;

    /// Yields events up to (not including) `EndDocument`, or the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_event() {
            Ok(XmlEvent::EndDocument) => None,
            Ok(event) => Some(Ok(event)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Parse XML from a string slice and return all events
pub fn parse_events(input: &str) -> Result<Vec<XmlEvent<'_>>, ParseError> {
    SliceReader::new(input).collect()
}
