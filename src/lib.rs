//! xmlcursor - Pull-event XML traversal for row builders
//!
//! Layers, bottom up:
//! - core: scanner, tokenizer, entities, attributes, names
//! - reader: raw zero-copy events over an in-memory document
//! - cursor: filtered, coalesced events with one-event lookahead
//! - structure: skip/inspect primitives that never recurse
//! - serialize: inner markup of an element as a string
//! - mapper: attributes to prefixed row values
//!
//! ```
//! use xmlcursor::{skip_children, Event, EventCursor};
//!
//! let mut cursor = EventCursor::new("<row><skip><a>1</a></skip><keep/></row>")?;
//! cursor.next_event()?; // <row>
//! cursor.next_event()?; // <skip>
//! skip_children(&mut cursor)?;
//! assert!(cursor.next_event()?.is_end_element());
//! assert!(matches!(cursor.next_event()?, Event::StartElement(e) if e.name.local() == "keep"));
//! # Ok::<(), xmlcursor::Error>(())
//! ```

pub mod core;
pub mod cursor;
pub mod error;
pub mod mapper;
pub mod options;
pub mod reader;
pub mod serialize;
pub mod structure;

pub use crate::core::attributes::Attribute;
pub use crate::core::name::QName;
pub use cursor::{Characters, CursorFactory, Event, EventCursor, EventKind};
pub use error::{Error, Result};
pub use mapper::convert_attributes_to_values_map;
pub use options::Options;
pub use serialize::current_structure_as_string;
pub use structure::{check_end_element, gather_root_attributes, skip_children, skip_until};
