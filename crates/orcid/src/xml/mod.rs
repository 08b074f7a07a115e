//! Namespaced XML codec.
//!
//! Encoding goes model → [`Element`] tree → [`schema::arrange`] → writer. Decoding goes
//! reader → [`Element`] tree → root check → model. The namespace table ([`Namespace`]) and the
//! child-sequence table ([`schema`]) are plain data and are tested on their own.

mod compare;
mod element;
mod mapping;
mod namespace;
mod reader;
pub mod schema;
mod writer;

pub use compare::{semantic_diff, semantically_equal};
pub use element::{Attribute, Element};
pub use namespace::{Namespace, XSI_NAMESPACE};

use crate::{OrcidError, OrcidResult};

/// Declaration prepended to XML response bodies.
pub const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A model type with an ORCID XML representation.
pub trait XmlDocument: Sized {
    /// Namespace and local name of the document element.
    const ROOT: (Namespace, &'static str);

    /// Value of `xsi:schemaLocation` on the document element.
    const SCHEMA_LOCATION: &'static str;

    fn to_element(&self) -> Element;

    fn from_element(element: &Element) -> OrcidResult<Self>;
}

/// Encode a document without an XML declaration.
///
/// # Errors
///
/// Returns [`OrcidError::Encode`] if the element tree violates the child-sequence table or the
/// writer fails. Neither happens for values built from the model types.
pub fn to_string<D: XmlDocument>(doc: &D) -> OrcidResult<String> {
    let mut root = doc.to_element();
    schema::arrange(&mut root)?;
    writer::write_document(&root, D::SCHEMA_LOCATION)
}

/// Encode a document with the XML declaration and a trailing newline after it.
pub fn to_document<D: XmlDocument>(doc: &D) -> OrcidResult<String> {
    Ok(format!("{XML_PROLOG}\n{}", to_string(doc)?))
}

/// Parse any well-formed document into an element tree, without mapping it to a model type.
pub fn parse(input: &str) -> OrcidResult<Element> {
    reader::parse_document(input)
}

/// Decode a document; the XML declaration is optional.
///
/// # Errors
///
/// Returns a decode error if the input is malformed or truncated, uses a namespace outside the
/// table, has the wrong root element, or lacks a required child or attribute.
pub fn from_str<D: XmlDocument>(input: &str) -> OrcidResult<D> {
    let root = reader::parse_document(input)?;
    let (namespace, name) = D::ROOT;
    if !root.is(namespace, name) {
        return Err(OrcidError::UnexpectedRoot {
            expected: format!("{}:{}", namespace.prefix(), name),
            found: root.qualified(),
        });
    }
    D::from_element(&root)
}
