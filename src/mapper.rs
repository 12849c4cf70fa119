//! Attribute Mapping
//!
//! Turns an element's attributes into row values keyed by prefixed local
//! name. Pure: no cursor interaction.

use crate::core::attributes::Attribute;
use crate::core::scanner::is_xml_whitespace;
use crate::options::Options;
use log::debug;
use std::collections::HashMap;

/// Map attributes to `prefix + local name -> value`.
///
/// Returns an empty map when attributes are excluded. With
/// `treat_empty_values_as_nulls`, values that are empty or hold only XML
/// whitespace (space, tab, LF, CR) map to `None`; other Unicode spaces are
/// kept as content.
///
/// Keys can collide through duplicate attribute names or through prefixes
/// that differ only in namespace (`a:id` and `b:id`). Attributes are folded
/// in document order, so the last one wins.
pub fn convert_attributes_to_values_map(
    attributes: &[Attribute<'_>],
    options: &Options,
) -> HashMap<String, Option<String>> {
    if options.exclude_attribute() {
        return HashMap::new();
    }

    let mut values = HashMap::with_capacity(attributes.len());
    for attr in attributes {
        let key = format!("{}{}", options.attribute_prefix(), attr.local_name());
        let value = if options.treat_empty_values_as_nulls() && is_xml_whitespace(&attr.value) {
            None
        } else {
            Some(attr.value.to_string())
        };
        if let Some(previous) = values.insert(key, value) {
            debug!("attribute {} replaced earlier value {:?}", attr.name, previous);
        }
    }
    values
}
