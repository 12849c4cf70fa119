//! XML Event Types
//!
//! Raw event types produced by the pull reader. This is the full vocabulary
//! of the tokenizer, including markup the cursor later filters out.

use crate::core::attributes::Attribute;
use crate::core::name::QName;
use std::borrow::Cow;

/// Raw XML parsing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent<'a> {
    /// Start of an element: <name attrs...>
    StartElement(StartElement<'a>),
    /// End of an element: </name>
    EndElement(EndElement<'a>),
    /// Empty element: <name attrs.../>
    EmptyElement(StartElement<'a>),
    /// Text content between tags (entities decoded)
    Text(Cow<'a, str>),
    /// CDATA section content
    CData(&'a str),
    /// Comment content
    Comment(&'a str),
    /// Processing instruction: <?target data?>
    ProcessingInstruction { target: &'a str, data: &'a str },
    /// XML declaration: <?xml version="1.0"?>
    XmlDeclaration(&'a str),
    /// DOCTYPE declaration
    DocType(&'a str),
    /// End of document
    EndDocument,
}

/// Start element event data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartElement<'a> {
    /// Element name (prefix kept, never resolved)
    pub name: QName<'a>,
    /// Element attributes in document order
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> StartElement<'a> {
    /// Create a new start element from a byte slice
    pub fn new(name: &'a str, attributes: Vec<Attribute<'a>>) -> Self {
        StartElement {
            name: QName::new(name),
            attributes,
        }
    }

    /// Get an attribute value by its qualified name
    pub fn get_attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.qualified() == name)
            .map(|a| a.value.as_ref())
    }

    /// Detach the element from the input buffer
    pub fn into_owned(self) -> StartElement<'static> {
        StartElement {
            name: self.name.into_owned(),
            attributes: self.attributes.into_iter().map(Attribute::into_owned).collect(),
        }
    }
}

/// End element event data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndElement<'a> {
    /// Element name (prefix kept, never resolved)
    pub name: QName<'a>,
}

impl<'a> EndElement<'a> {
    /// Create a new end element from a byte slice
    pub fn new(name: &'a str) -> Self {
        EndElement {
            name: QName::new(name),
        }
    }

    /// Detach the element from the input buffer
    pub fn into_owned(self) -> EndElement<'static> {
        EndElement {
            name: self.name.into_owned(),
        }
    }
}

impl<'a> XmlEvent<'a> {
    /// Check if this is a start element event
    pub fn is_start_element(&self) -> bool {
        matches!(self, XmlEvent::StartElement(_) | XmlEvent::EmptyElement(_))
    }

    /// Check if this is an end element event
    pub fn is_end_element(&self) -> bool {
        matches!(self, XmlEvent::EndElement(_))
    }

    /// Check if this is character data (text or CDATA)
    pub fn is_character_data(&self) -> bool {
        matches!(self, XmlEvent::Text(_) | XmlEvent::CData(_))
    }

    /// Markup that carries no document content
    pub fn is_ignorable(&self) -> bool {
        matches!(
            self,
            XmlEvent::Comment(_)
                | XmlEvent::ProcessingInstruction { .. }
                | XmlEvent::XmlDeclaration(_)
                | XmlEvent::DocType(_)
        )
    }

    /// Get text content if applicable
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlEvent::Text(t) => Some(t.as_ref()),
            XmlEvent::CData(t) => Some(t),
            _ => None,
        }
    }
}
