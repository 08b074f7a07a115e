//! Namespace-aware parse of an XML document into an [`Element`] tree.
//!
//! Elements are resolved by namespace URI, so any prefix spelling (or a default namespace)
//! is accepted. Comments, processing instructions, the doctype and whitespace-only text
//! between elements are skipped.

use super::element::{Attribute, Element};
use super::namespace::Namespace;
use crate::{OrcidError, OrcidResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

/// Where an element or attribute name resolved to, detached from the reader's borrow.
enum Resolved {
    Unqualified,
    Uri(String),
    UndeclaredPrefix(String),
}

impl Resolved {
    fn from_result(result: &ResolveResult) -> Self {
        match result {
            ResolveResult::Unbound => Resolved::Unqualified,
            ResolveResult::Bound(ns) => Resolved::Uri(String::from_utf8_lossy(ns.0).into_owned()),
            ResolveResult::Unknown(prefix) => {
                Resolved::UndeclaredPrefix(String::from_utf8_lossy(prefix).into_owned())
            }
        }
    }
}

/// Partially built element on the open-element stack.
struct Open {
    element: Element,
    text: String,
}

pub(crate) fn parse_document(input: &str) -> OrcidResult<Element> {
    let mut reader = NsReader::from_reader(input.as_bytes());
    let mut buf = Vec::new();
    let mut stack: Vec<Open> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = match reader.read_resolved_event_into(&mut buf) {
            Ok((result, event)) => (Resolved::from_result(&result), event),
            Err(quick_xml::Error::Syntax(e)) => return Err(OrcidError::Truncated(e.to_string())),
            Err(e) => return Err(OrcidError::Xml(e.to_string())),
        };

        match event {
            Event::Start(start) => {
                let element = open_element(&reader, resolved, &start)?;
                if root.is_some() {
                    return Err(OrcidError::Xml(format!(
                        "content after the root element: '{}'",
                        element.qualified()
                    )));
                }
                stack.push(Open {
                    element,
                    text: String::new(),
                });
            }
            Event::Empty(start) => {
                let element = open_element(&reader, resolved, &start)?;
                close(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let Some(open) = stack.pop() else {
                    return Err(OrcidError::Xml("unexpected closing tag".into()));
                };
                let element = finish(open)?;
                close(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| OrcidError::Xml(e.to_string()))?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data).map_err(|e| OrcidError::Xml(e.to_string()))?;
                append_text(&mut stack, text)?;
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions and doctype carry no model data.
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(OrcidError::Truncated(format!(
            "element '{}' is never closed",
            open.element.qualified()
        )));
    }
    root.ok_or_else(|| OrcidError::Xml("document has no root element".into()))
}

fn open_element<R>(
    reader: &NsReader<R>,
    resolved: Resolved,
    start: &BytesStart<'_>,
) -> OrcidResult<Element> {
    let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let namespace = match resolved {
        Resolved::Uri(uri) => {
            Namespace::from_uri(&uri).ok_or_else(|| OrcidError::UnknownNamespace {
                element: local.clone(),
                namespace: uri,
            })?
        }
        Resolved::Unqualified => {
            return Err(OrcidError::UnknownNamespace {
                element: local,
                namespace: String::new(),
            })
        }
        Resolved::UndeclaredPrefix(prefix) => {
            return Err(OrcidError::Xml(format!(
                "undeclared namespace prefix '{prefix}' on element '{local}'"
            )))
        }
    };

    let mut element = Element::new(namespace, &local);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| OrcidError::Xml(e.to_string()))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (attr_ns, attr_local) = reader.resolve_attribute(attr.key);
        // Model attributes are unqualified; `xsi:schemaLocation` and friends are skipped.
        if !matches!(Resolved::from_result(&attr_ns), Resolved::Unqualified) {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|e| OrcidError::Xml(e.to_string()))?;
        element.attributes.push(Attribute {
            name: String::from_utf8_lossy(attr_local.as_ref()).into_owned(),
            value: value.into_owned(),
        });
    }
    Ok(element)
}

fn append_text(stack: &mut [Open], text: &str) -> OrcidResult<()> {
    match stack.last_mut() {
        Some(open) => {
            open.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(OrcidError::Xml("text outside the root element".into())),
    }
}

/// Text of a leaf is kept verbatim; a container may only hold whitespace between children.
fn finish(open: Open) -> OrcidResult<Element> {
    let Open { mut element, text } = open;
    if element.children.is_empty() {
        element.text = text;
    } else if !text.trim().is_empty() {
        return Err(OrcidError::InvalidValue {
            field: element.qualified(),
            reason: "text mixed with child elements".into(),
        });
    }
    Ok(element)
}

fn close(stack: &mut [Open], root: &mut Option<Element>, element: Element) -> OrcidResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.element.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(OrcidError::Xml(format!(
            "multiple root elements: '{}'",
            element.qualified()
        ))),
    }
}
