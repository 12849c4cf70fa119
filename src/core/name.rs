//! Qualified Names
//!
//! Element and attribute names as they appear in the document. Namespace
//! prefixes are never resolved; comparisons that decide structure use the
//! local part only.

use memchr::memchr;
use std::borrow::Cow;
use std::fmt;

/// A raw qualified name (`prefix:local` or `local`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    raw: Cow<'a, str>,
    /// Byte offset of the local part inside `raw`
    local_start: usize,
}

impl<'a> QName<'a> {
    /// Create a name borrowing from the input
    pub fn new(raw: &'a str) -> Self {
        QName {
            local_start: local_start(raw),
            raw: Cow::Borrowed(raw),
        }
    }

    /// Create a name from an owned string
    pub fn owned(raw: String) -> QName<'static> {
        QName {
            local_start: local_start(&raw),
            raw: Cow::Owned(raw),
        }
    }

    /// The full name as written, prefix included
    pub fn qualified(&self) -> &str {
        &self.raw
    }

    /// The local part (after the first colon)
    pub fn local(&self) -> &str {
        &self.raw[self.local_start..]
    }

    /// The prefix (before the first colon), if any
    pub fn prefix(&self) -> Option<&str> {
        if self.local_start == 0 {
            None
        } else {
            Some(&self.raw[..self.local_start - 1])
        }
    }

    /// Whether two names refer to the same element, ignoring prefixes
    #[inline]
    pub fn same_local(&self, other: &QName<'_>) -> bool {
        self.local() == other.local()
    }

    /// Detach the name from the input buffer
    pub fn into_owned(self) -> QName<'static> {
        QName {
            raw: Cow::Owned(self.raw.into_owned()),
            local_start: self.local_start,
        }
    }
}

impl fmt::Display for QName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Local part of a raw name given as a plain string
pub fn local_part(name: &str) -> &str {
    &name[local_start(name)..]
}

fn local_start(name: &str) -> usize {
    memchr(b':', name.as_bytes()).map_or(0, |pos| pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let name = QName::new("div");
        assert_eq!(name.qualified(), "div");
        assert_eq!(name.local(), "div");
        assert!(name.prefix().is_none());
    }

    #[test]
    fn test_prefixed_name() {
        let name = QName::new("svg:rect");
        assert_eq!(name.qualified(), "svg:rect");
        assert_eq!(name.local(), "rect");
        assert_eq!(name.prefix(), Some("svg"));
    }

    #[test]
    fn test_same_local_ignores_prefix() {
        assert!(QName::new("a:item").same_local(&QName::new("item")));
        assert!(!QName::new("a:item").same_local(&QName::new("a:other")));
    }

    #[test]
    fn test_owned_keeps_split() {
        let name = QName::new("x:y").into_owned();
        assert_eq!(name.local(), "y");
        assert_eq!(QName::owned("p:q".to_string()).prefix(), Some("p"));
        assert_eq!(local_part("ns:field"), "field");
    }
}
