//! Property-based tests for structural traversal
//!
//! Documents are generated as random trees of elements and text, then the
//! traversal primitives are checked against what the tree says they should do:
//! - skip_children always lands on the entered element's own end tag
//! - current_structure_as_string reproduces the inner markup
//! - check_end_element only ever consumes whitespace

use proptest::prelude::*;
use xmlcursor::{
    check_end_element, current_structure_as_string, skip_children, Event, EventCursor, EventKind,
};

const ROOT: &str = "a";

#[derive(Debug, Clone)]
enum Node {
    Element(String, Vec<Node>),
    Text(String),
}

/// Element names share their local part with the root on purpose
fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("a"), Just("b"), Just("p:a"), Just("q:b")].prop_map(str::to_string)
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z0-9]{1,6}".prop_map(Node::Text),
        name_strategy().prop_map(|name| Node::Element(name, Vec::new())),
    ];
    leaf.prop_recursive(8, 64, 4, |inner| {
        (name_strategy(), prop::collection::vec(inner, 0..4))
            .prop_map(|(name, children)| Node::Element(name, children))
    })
}

fn children_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(node_strategy(), 0..5)
}

/// Childless elements are written `<n/>`. `pretty` indents every child.
fn render_element(name: &str, children: &[Node], pretty: bool, out: &mut String) {
    if children.is_empty() {
        out.push('<');
        out.push_str(name);
        out.push_str("/>");
        return;
    }
    out.push('<');
    out.push_str(name);
    out.push('>');
    render_children(children, pretty, out);
    if pretty {
        out.push('\n');
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn render_children(children: &[Node], pretty: bool, out: &mut String) {
    for child in children {
        if pretty {
            out.push_str("\n  ");
        }
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(name, grandchildren) => render_element(name, grandchildren, pretty, out),
        }
    }
}

fn document(children: &[Node], pretty: bool) -> String {
    let mut xml = String::new();
    render_element(ROOT, children, pretty, &mut xml);
    xml
}

fn enter_root(xml: &str) -> EventCursor<'_> {
    let mut cursor = EventCursor::new(xml).unwrap();
    assert!(cursor.next_event().unwrap().is_start_element());
    cursor
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn skip_children_lands_on_own_end(children in children_strategy(), pretty in any::<bool>()) {
            let xml = document(&children, pretty);
            let mut cursor = enter_root(&xml);

            skip_children(&mut cursor).unwrap();

            match cursor.next_event().unwrap() {
                Event::EndElement(end) => prop_assert_eq!(end.name.qualified(), ROOT),
                other => prop_assert!(false, "expected </{}>, got {:?} in {}", ROOT, other, xml),
            }
            prop_assert!(cursor.next_event().unwrap().is_end_document());
        }

        #[test]
        fn structure_as_string_reproduces_inner_markup(children in children_strategy()) {
            let xml = document(&children, false);
            let mut expected = String::new();
            render_children(&children, false, &mut expected);

            let mut cursor = enter_root(&xml);
            let markup = current_structure_as_string(&mut cursor, ROOT).unwrap();

            prop_assert_eq!(markup, expected);
            prop_assert!(cursor.next_event().unwrap().is_end_document());
        }

        #[test]
        fn check_end_element_consumes_only_whitespace(children in children_strategy()) {
            let xml = document(&children, true);
            let mut cursor = enter_root(&xml);

            let ended = check_end_element(&mut cursor).unwrap();
            let next = cursor.peek().unwrap().kind();

            match children.first() {
                None => {
                    prop_assert!(ended);
                    prop_assert_eq!(next, EventKind::EndElement);
                }
                Some(Node::Element(..)) => {
                    prop_assert!(!ended);
                    prop_assert_eq!(next, EventKind::StartElement);
                }
                Some(Node::Text(text)) => {
                    prop_assert!(!ended);
                    let characters = cursor.peek().unwrap().as_characters().unwrap();
                    prop_assert!(characters.text().trim_start().starts_with(text.as_str()));
                }
            }
        }

        #[test]
        fn check_end_element_is_idempotent(children in children_strategy()) {
            let xml = document(&children, true);
            let mut cursor = enter_root(&xml);

            let first = check_end_element(&mut cursor).unwrap();
            let peeked = cursor.peek().unwrap().clone();
            prop_assert_eq!(check_end_element(&mut cursor).unwrap(), first);
            prop_assert_eq!(cursor.peek().unwrap(), &peeked);
        }
    }
}
