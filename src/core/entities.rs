//! XML Entity Decoding
//!
//! Handles decoding of XML entities in character data and attribute values:
//! - Built-in entities: &lt; &gt; &amp; &quot; &apos;
//! - Numeric character references: &#123; &#x7B;
//!
//! Decoding is lenient. Unknown names, references without a terminating `;`
//! and code points that are not valid XML characters stay in the output
//! verbatim. Uses Cow for zero-copy when no entities are present.

use memchr::memchr;
use std::borrow::Cow;

/// Longest reference body between `&` and `;` (`#x10FFFF`)
const MAX_ENTITY_LEN: usize = 8;

/// Decode text content, handling entity references
///
/// Returns Borrowed if no entities present (zero-copy),
/// returns Owned if entities were decoded.
#[inline]
pub fn decode_text(input: &str) -> Cow<'_, str> {
    // Fast path: check if there are any entities using SIMD
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(decode_entities(input))
}

/// Decode all entity references in the input
fn decode_entities(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < input.len() {
        let Some(amp_offset) = memchr(b'&', &bytes[pos..]) else {
            result.push_str(&input[pos..]);
            break;
        };
        result.push_str(&input[pos..pos + amp_offset]);
        pos += amp_offset;

        // Bounded so a lone `&` never scans the rest of the input
        let window_end = (pos + MAX_ENTITY_LEN + 2).min(bytes.len());
        match memchr(b';', &bytes[pos..window_end]) {
            Some(semi_offset) => {
                let entity = &input[pos + 1..pos + semi_offset];
                match decode_entity(entity) {
                    Some(ch) => {
                        result.push(ch);
                        pos += semi_offset + 1;
                    }
                    None => {
                        result.push('&');
                        pos += 1;
                    }
                }
            }
            None => {
                result.push('&');
                pos += 1;
            }
        }
    }

    result
}

/// Decode a single entity (without & and ;)
fn decode_entity(entity: &str) -> Option<char> {
    if let Some(numeric) = entity.strip_prefix('#') {
        return decode_numeric_entity(numeric);
    }

    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}

/// Decode a numeric character reference
fn decode_numeric_entity(entity: &str) -> Option<char> {
    let codepoint = match entity.strip_prefix(|c: char| c == 'x' || c == 'X') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => entity.parse::<u32>().ok()?,
    };

    if !is_valid_xml_char(codepoint) {
        return None;
    }
    char::from_u32(codepoint)
}

/// Check if a code point is a valid XML 1.0 Char
/// Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
#[inline]
pub fn is_valid_xml_char(codepoint: u32) -> bool {
    matches!(codepoint,
        0x9 | 0xA | 0xD |
        0x20..=0xD7FF |
        0xE000..=0xFFFD |
        0x10000..=0x10FFFF
    )
}
