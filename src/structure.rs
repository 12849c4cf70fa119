//! Structural Traversal
//!
//! Depth-aware primitives the row builder uses to move through a document:
//! locating the root, deciding whether the current element has ended, and
//! discarding whole subtrees it has no schema field for.
//!
//! Nothing here recurses. Subtree depth is tracked on an explicit stack so
//! arbitrarily deep input cannot exhaust the call stack.

use crate::core::attributes::Attribute;
use crate::core::name::QName;
use crate::cursor::{Event, EventCursor, EventKind};
use crate::error::Result;
use log::debug;

/// Discard events until the next one has type `kind`, and return it unconsumed.
///
/// Returns `EndDocument` when the stream ends first.
pub fn skip_until<'a>(cursor: &mut EventCursor<'a>, kind: EventKind) -> Result<Event<'a>> {
    loop {
        let next_kind = cursor.peek()?.kind();
        if next_kind == kind {
            return Ok(cursor.peek()?.clone());
        }
        if next_kind == EventKind::EndDocument {
            debug!("reached end of document looking for {:?}", kind);
            return Ok(Event::EndDocument);
        }
        cursor.next_event()?;
    }
}

/// Attributes of the document's root element, left unconsumed on the cursor.
///
/// Empty when the document has no element at all.
pub fn gather_root_attributes<'a>(cursor: &mut EventCursor<'a>) -> Result<Vec<Attribute<'a>>> {
    match skip_until(cursor, EventKind::StartElement)? {
        Event::StartElement(root) => Ok(root.attributes),
        _ => Ok(Vec::new()),
    }
}

/// Whether the element whose content is being read has ended.
///
/// Consumes whitespace-only `Characters` events and nothing else. Returns
/// true when the next significant event is `EndElement` or `EndDocument`,
/// false when it is a `StartElement` or non-whitespace text (left unconsumed).
pub fn check_end_element(cursor: &mut EventCursor<'_>) -> Result<bool> {
    loop {
        let ended = match cursor.peek()? {
            Event::EndElement(_) | Event::EndDocument => Some(true),
            Event::StartElement(_) => Some(false),
            Event::Characters(c) if c.is_whitespace_only() => None,
            Event::Characters(_) => Some(false),
        };
        match ended {
            Some(ended) => return Ok(ended),
            None => {
                cursor.next_event()?;
            }
        }
    }
}

/// Consume the children of a just-opened element.
///
/// Leaves the cursor on that element's own `EndElement`, whatever the names
/// of the descendants (including ones sharing the element's name).
pub fn skip_children(cursor: &mut EventCursor<'_>) -> Result<()> {
    let mut open: Vec<QName<'_>> = Vec::new();

    loop {
        if open.is_empty() && check_end_element(cursor)? {
            return Ok(());
        }

        match cursor.next_event()? {
            Event::StartElement(start) => open.push(start.name),
            Event::EndElement(end) => {
                if let Some(name) = open.pop() {
                    if !name.same_local(&end.name) {
                        debug!("end tag </{}> closes <{}> while skipping", end.name, name);
                    }
                }
            }
            Event::Characters(_) => {}
            Event::EndDocument => {
                debug!("document ended inside {} unclosed elements while skipping", open.len());
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Characters;

    fn enter<'a>(xml: &'a str, element: &str) -> EventCursor<'a> {
        let mut cursor = EventCursor::new(xml).unwrap();
        loop {
            match cursor.next_event().unwrap() {
                Event::StartElement(e) if e.name.local() == element => return cursor,
                Event::EndDocument => panic!("no <{element}> in {xml}"),
                _ => {}
            }
        }
    }

    fn end_name(event: &Event<'_>) -> Option<String> {
        event.as_end_element().map(|e| e.name.local().to_string())
    }

    #[test]
    fn test_skip_until_start_element_skips_noise() {
        let mut cursor = EventCursor::new("<?xml version=\"1.0\"?>\n<!-- c -->\n<root id=\"7\"/>").unwrap();
        let found = skip_until(&mut cursor, EventKind::StartElement).unwrap();
        assert_eq!(found.as_start_element().unwrap().name.local(), "root");
        // Not consumed
        assert!(cursor.peek().unwrap().is_start_element());
    }

    #[test]
    fn test_skip_until_missing_kind() {
        let mut cursor = EventCursor::new("<a>text</a>").unwrap();
        let found = skip_until(&mut cursor, EventKind::StartElement).unwrap();
        assert!(found.is_start_element());
        cursor.next_event().unwrap();
        let found = skip_until(&mut cursor, EventKind::StartElement).unwrap();
        assert!(found.is_end_document());
        assert!(cursor.peek().unwrap().is_end_document());
    }

    #[test]
    fn test_skip_until_end_document() {
        let mut cursor = EventCursor::new("<a><b/></a>").unwrap();
        let found = skip_until(&mut cursor, EventKind::EndDocument).unwrap();
        assert!(found.is_end_document());
    }

    #[test]
    fn test_gather_root_attributes() {
        let mut cursor = EventCursor::new("<!-- x --><row a=\"1\" b:c=\"2\"><f/></row>").unwrap();
        let attrs = gather_root_attributes(&mut cursor).unwrap();
        let names: Vec<&str> = attrs.iter().map(|a| a.name.qualified()).collect();
        assert_eq!(names, ["a", "b:c"]);
        assert!(cursor.peek().unwrap().is_start_element());

        let mut empty = EventCursor::new("just text").unwrap();
        assert!(gather_root_attributes(&mut empty).unwrap().is_empty());
    }

    #[test]
    fn test_check_end_element_on_end() {
        let mut cursor = enter("<a>\n   \n</a>", "a");
        assert!(check_end_element(&mut cursor).unwrap());
        assert_eq!(end_name(cursor.peek().unwrap()).as_deref(), Some("a"));
    }

    #[test]
    fn test_check_end_element_whitespace_between_siblings() {
        let mut cursor = enter("<a><b/>\n  <c/></a>", "a");
        cursor.next_event().unwrap(); // <b>
        cursor.next_event().unwrap(); // </b>
        assert!(!check_end_element(&mut cursor).unwrap());
        let next = cursor.peek().unwrap();
        assert_eq!(next.as_start_element().unwrap().name.local(), "c");
    }

    #[test]
    fn test_check_end_element_keeps_text() {
        let mut cursor = enter("<a> value </a>", "a");
        assert!(!check_end_element(&mut cursor).unwrap());
        let text = cursor.peek().unwrap().as_characters().map(Characters::text);
        assert_eq!(text, Some(" value "));
    }

    #[test]
    fn test_check_end_element_at_end_of_document() {
        let mut cursor = enter("<a>", "a");
        assert!(check_end_element(&mut cursor).unwrap());
    }

    #[test]
    fn test_skip_children_text_only() {
        let mut cursor = enter("<row><a>text</a><b/></row>", "a");
        skip_children(&mut cursor).unwrap();
        assert_eq!(end_name(&cursor.next_event().unwrap()).as_deref(), Some("a"));
        assert!(cursor.next_event().unwrap().is_start_element());
    }

    #[test]
    fn test_skip_children_nested() {
        let xml = "<row><a>\n  <x>1</x>\n  <y><z/>tail</y>\n  mixed\n</a><b/></row>";
        let mut cursor = enter(xml, "a");
        skip_children(&mut cursor).unwrap();
        assert_eq!(end_name(&cursor.next_event().unwrap()).as_deref(), Some("a"));
    }

    #[test]
    fn test_skip_children_same_name_descendants() {
        let mut cursor = enter("<a><a><a>deep</a></a><a/></a><after/>", "a");
        skip_children(&mut cursor).unwrap();
        assert_eq!(end_name(&cursor.next_event().unwrap()).as_deref(), Some("a"));
        let after = cursor.next_event().unwrap();
        assert_eq!(after.as_start_element().unwrap().name.local(), "after");
    }

    #[test]
    fn test_skip_children_empty_element() {
        let mut cursor = enter("<row><a/><b/></row>", "a");
        skip_children(&mut cursor).unwrap();
        assert_eq!(end_name(&cursor.next_event().unwrap()).as_deref(), Some("a"));
    }

    #[test]
    fn test_skip_children_truncated_input() {
        let mut cursor = enter("<row><a><b><c>", "a");
        skip_children(&mut cursor).unwrap();
        assert!(cursor.peek().unwrap().is_end_document());
    }

    #[test]
    fn test_skip_children_deep_nesting() {
        const DEPTH: usize = 100_000;
        let mut xml = String::with_capacity(DEPTH * 7 + 16);
        xml.push_str("<root>");
        for _ in 0..DEPTH {
            xml.push_str("<n>");
        }
        for _ in 0..DEPTH {
            xml.push_str("</n>");
        }
        xml.push_str("</root>");

        let mut cursor = enter(&xml, "root");
        skip_children(&mut cursor).unwrap();
        assert_eq!(end_name(&cursor.next_event().unwrap()).as_deref(), Some("root"));
        assert!(cursor.next_event().unwrap().is_end_document());
    }
}
