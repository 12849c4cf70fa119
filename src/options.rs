//! Attribute Mapping Options
//!
//! Immutable once built. The upstream engine usually deserializes these from
//! its own configuration; missing keys fall back to the defaults.

use serde::Deserialize;

/// Policy for turning element attributes into row values
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    attribute_prefix: String,
    #[serde(alias = "excludeAttributeFlag")]
    exclude_attribute: bool,
    treat_empty_values_as_nulls: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            attribute_prefix: "_".to_string(),
            exclude_attribute: false,
            treat_empty_values_as_nulls: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix prepended to attribute-derived keys. Defaults to `_`.
    pub fn with_attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attribute_prefix = prefix.into();
        self
    }

    /// Drop all attributes. Defaults to `false`.
    pub fn with_exclude_attribute(mut self, exclude: bool) -> Self {
        self.exclude_attribute = exclude;
        self
    }

    /// Map blank attribute values to null. Defaults to `false`.
    pub fn with_treat_empty_values_as_nulls(mut self, treat: bool) -> Self {
        self.treat_empty_values_as_nulls = treat;
        self
    }

    pub fn attribute_prefix(&self) -> &str {
        &self.attribute_prefix
    }

    pub fn exclude_attribute(&self) -> bool {
        self.exclude_attribute
    }

    pub fn treat_empty_values_as_nulls(&self) -> bool {
        self.treat_empty_values_as_nulls
    }
}
