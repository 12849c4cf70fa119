//! XML Reader Module
//!
//! - SliceReader: zero-copy pull reader over an in-memory document
//! - Events: raw XML event types produced by the reader

pub mod events;
pub mod slice;

pub use events::{EndElement, StartElement, XmlEvent};
pub use slice::{parse_events, SliceReader};
