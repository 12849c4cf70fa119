//! XML Attribute Parsing
//!
//! Parses XML attributes from tag content. Parsing is lenient: stray
//! characters are skipped, valueless and unquoted attributes are accepted,
//! and duplicate names are kept in document order.

use super::entities::decode_text;
use super::name::QName;
use std::borrow::Cow;

/// A parsed XML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Attribute name (may include namespace prefix)
    pub name: QName<'a>,
    /// Attribute value (entities decoded)
    pub value: Cow<'a, str>,
}

impl<'a> Attribute<'a> {
    /// Create a new attribute
    pub fn new(name: &'a str, value: Cow<'a, str>) -> Self {
        Attribute {
            name: QName::new(name),
            value,
        }
    }

    /// Local name of the attribute (prefix stripped)
    pub fn local_name(&self) -> &str {
        self.name.local()
    }

    /// Detach the attribute from the input buffer
    pub fn into_owned(self) -> Attribute<'static> {
        Attribute {
            name: self.name.into_owned(),
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}

/// Parse attributes from raw tag content (after the element name)
///
/// Input should be the content between element name and '>' or '/>'
pub fn parse_attributes(input: &str) -> Vec<Attribute<'_>> {
    let bytes = input.as_bytes();
    let mut attrs = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }

        if pos >= bytes.len() || bytes[pos] == b'/' || bytes[pos] == b'>' {
            break;
        }

        // Parse attribute name
        let name_start = pos;
        if !is_name_start_char(bytes[pos]) {
            pos += 1;
            continue;
        }
        while pos < bytes.len() && is_name_char(bytes[pos]) {
            pos += 1;
        }
        let name = &input[name_start..pos];

        // Skip whitespace around '='
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }

        if pos >= bytes.len() || bytes[pos] != b'=' {
            // Attribute without value (like HTML boolean attributes)
            attrs.push(Attribute::new(name, Cow::Borrowed("")));
            continue;
        }

        pos += 1; // Skip '='

        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }

        if pos >= bytes.len() {
            attrs.push(Attribute::new(name, Cow::Borrowed("")));
            break;
        }

        let quote = bytes[pos];
        if quote != b'"' && quote != b'\'' {
            // Unquoted value (non-standard but handle it)
            let value_start = pos;
            while pos < bytes.len() && !is_whitespace(bytes[pos]) && bytes[pos] != b'/' && bytes[pos] != b'>' {
                pos += 1;
            }
            attrs.push(Attribute::new(name, decode_text(&input[value_start..pos])));
            continue;
        }

        pos += 1; // Skip opening quote
        let value_start = pos;
        while pos < bytes.len() && bytes[pos] != quote {
            pos += 1;
        }

        attrs.push(Attribute::new(name, decode_text(&input[value_start..pos])));

        if pos < bytes.len() {
            pos += 1; // Skip closing quote
        }
    }

    attrs
}

/// Check if byte is a valid XML NameStartChar (non-ASCII bytes are accepted as UTF-8 letters)
#[inline]
fn is_name_start_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':') || b >= 0x80
}

/// Check if byte is whitespace
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Check if byte is valid in XML name
#[inline]
fn is_name_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b':') || b >= 0x80
}
