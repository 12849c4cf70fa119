//! Structure Serialization
//!
//! Rebuilds the inner markup of an element the caller has just entered, for
//! schema fields that ask for raw XML instead of parsed structure.
//!
//! The output format is fixed for compatibility with existing consumers:
//! attributes are written as `"name"="value"`, with the name quoted. This is
//! not valid XML and must not be changed to `name="value"`.

use crate::core::name::local_part;
use crate::cursor::{Event, EventCursor};
use crate::error::Result;
use crate::reader::events::StartElement;
use log::debug;

/// Consume the rest of `field`'s subtree and return its inner markup.
///
/// The cursor must be positioned just after `field`'s start tag. The
/// matching end tag is consumed but not emitted. Elements with no content
/// are written self-closing. Character data is written as decoded text.
///
/// Unbalanced input that hits `EndDocument` first returns what was built so
/// far instead of failing.
pub fn current_structure_as_string(cursor: &mut EventCursor<'_>, field: &str) -> Result<String> {
    let field = local_part(field);
    let mut out = String::new();
    // Open `field` elements, including the one the caller entered
    let mut depth = 1usize;

    loop {
        match cursor.next_event()? {
            Event::StartElement(start) => {
                write_start_tag(&mut out, &start);
                let closes_immediately = matches!(
                    cursor.peek()?,
                    Event::EndElement(end) if end.name.same_local(&start.name)
                );
                if closes_immediately {
                    cursor.next_event()?;
                    out.push_str("/>");
                } else {
                    out.push('>');
                    if start.name.local() == field {
                        depth += 1;
                    }
                }
            }
            Event::EndElement(end) => {
                if end.name.local() == field {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(out);
                    }
                }
                out.push_str("</");
                out.push_str(end.name.qualified());
                out.push('>');
            }
            Event::Characters(chars) => out.push_str(chars.text()),
            Event::EndDocument => {
                debug!("document ended inside <{}>, returning partial markup", field);
                return Ok(out);
            }
        }
    }
}

/// Write `<name "attr"="value" ...` without the closing bracket
fn write_start_tag(out: &mut String, start: &StartElement<'_>) {
    out.push('<');
    out.push_str(start.name.qualified());
    for attr in &start.attributes {
        out.push_str(" \"");
        out.push_str(attr.name.qualified());
        out.push_str("\"=\"");
        out.push_str(&attr.value);
        out.push('"');
    }
}
