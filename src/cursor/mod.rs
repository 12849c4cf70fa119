//! Event Cursor
//!
//! One-token lookahead over the raw reader. The cursor is where the event
//! stream gets normalized for everything above it:
//!
//! ```text
//! SliceReader ---> filter (comments, PIs, prolog) ---> coalesce text ---> Event
//!                                                                          |
//!                                                                          v
//!                                                                   peek / next_event
//! ```
//!
//! A cursor is owned by exactly one traversal. Distinct documents get
//! distinct cursors; the only thing they share is a [`CursorFactory`].

pub mod event;

pub use event::{Characters, Event, EventKind};

use crate::error::{Error, Result};
use crate::reader::events::{EndElement, XmlEvent};
use crate::reader::SliceReader;
use log::trace;
use std::borrow::Cow;
use std::collections::VecDeque;

static END_DOCUMENT: Event<'static> = Event::EndDocument;

/// Immutable cursor configuration, shareable across documents and threads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorFactory {
    coalesce_text: bool,
}

impl Default for CursorFactory {
    fn default() -> Self {
        CursorFactory::new()
    }
}

impl CursorFactory {
    pub const fn new() -> Self {
        CursorFactory { coalesce_text: true }
    }

    /// Merge adjacent text and CDATA runs into a single `Characters` event.
    ///
    /// Defaults to enabled (`true`).
    pub const fn coalesce_text(self, coalesce_text: bool) -> Self {
        CursorFactory { coalesce_text }
    }

    /// Open a cursor over a complete in-memory document.
    ///
    /// Fails with [`Error::MalformedXml`] when the first event cannot be lexed.
    pub fn cursor<'a>(&self, xml: &'a str) -> Result<EventCursor<'a>> {
        let mut cursor = EventCursor {
            reader: SliceReader::new(xml),
            pending: VecDeque::with_capacity(4),
            coalesce_text: self.coalesce_text,
            failure: None,
            exhausted: false,
        };
        cursor.fill()?;
        Ok(cursor)
    }
}

/// Filtered, peekable event stream over one document
pub struct EventCursor<'a> {
    reader: SliceReader<'a>,
    /// Normalized events not yet handed out. The front is the peeked event;
    /// more than one entry only appears when a text run or `<e/>` expands.
    pending: VecDeque<Event<'a>>,
    coalesce_text: bool,
    /// First lexical failure; replayed on every later call
    failure: Option<Error>,
    /// Iterator has yielded `EndDocument` or an error
    exhausted: bool,
}

impl<'a> EventCursor<'a> {
    /// Open a cursor with the default configuration
    pub fn new(xml: &'a str) -> Result<Self> {
        CursorFactory::new().cursor(xml)
    }

    /// Look at the next event without consuming it.
    ///
    /// Idempotent. Returns `EndDocument` once the stream is exhausted.
    pub fn peek(&mut self) -> Result<&Event<'a>> {
        self.fill()?;
        Ok(self.pending.front().unwrap_or(&END_DOCUMENT))
    }

    /// Consume and return the next event
    pub fn next_event(&mut self) -> Result<Event<'a>> {
        self.fill()?;
        Ok(self.pending.pop_front().unwrap_or(Event::EndDocument))
    }

    /// Byte offset of the reader in the input
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Make sure at least one normalized event is queued
    fn fill(&mut self) -> Result<()> {
        if !self.pending.is_empty() {
            return Ok(());
        }
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut text: Option<Cow<'a, str>> = None;
        loop {
            let raw = match self.reader.next_event() {
                Ok(raw) => raw,
                Err(err) => {
                    let err = Error::from(err);
                    self.failure = Some(err.clone());
                    return Err(err);
                }
            };

            match raw {
                XmlEvent::Text(piece) => append_text(&mut text, piece),
                XmlEvent::CData(piece) => append_text(&mut text, Cow::Borrowed(piece)),
                XmlEvent::StartElement(start) => {
                    self.flush_text(text);
                    self.pending.push_back(Event::StartElement(start));
                    return Ok(());
                }
                XmlEvent::EmptyElement(start) => {
                    let end = EndElement {
                        name: start.name.clone(),
                    };
                    self.flush_text(text);
                    self.pending.push_back(Event::StartElement(start));
                    self.pending.push_back(Event::EndElement(end));
                    return Ok(());
                }
                XmlEvent::EndElement(end) => {
                    self.flush_text(text);
                    self.pending.push_back(Event::EndElement(end));
                    return Ok(());
                }
                XmlEvent::EndDocument => {
                    self.flush_text(text);
                    self.pending.push_back(Event::EndDocument);
                    return Ok(());
                }
                ignored => trace!("cursor skipped {:?}", ignored),
            }

            if !self.coalesce_text && text.is_some() {
                self.flush_text(text);
                return Ok(());
            }
        }
    }

    fn flush_text(&mut self, text: Option<Cow<'a, str>>) {
        if let Some(text) = text {
            self.pending.push_back(Event::characters(text));
        }
    }
}

fn append_text<'a>(run: &mut Option<Cow<'a, str>>, piece: Cow<'a, str>) {
    if piece.is_empty() {
        return;
    }
    match run {
        Some(existing) => existing.to_mut().push_str(&piece),
        None => *run = Some(piece),
    }
}

impl<'a> Iterator for EventCursor<'a> {
    type Item = Result<Event<'a>>;

    /// Yields events up to (not including) `EndDocument`, or the first error
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_event() {
            Ok(Event::EndDocument) => {
                self.exhausted = true;
                None
            }
            Ok(event) => Some(Ok(event)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}
