//! Serialise an arranged [`Element`] tree with canonical prefixes.

use super::element::Element;
use super::namespace::{Namespace, XSI_NAMESPACE};
use crate::{OrcidError, OrcidResult};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::collections::BTreeSet;

fn encode_err(e: impl std::fmt::Display) -> OrcidError {
    OrcidError::Encode(e.to_string())
}

/// Namespaces used anywhere in the subtree, in table order.
fn used_namespaces(root: &Element) -> Vec<Namespace> {
    let mut used = BTreeSet::new();
    root.walk(&mut |e| {
        used.insert(e.namespace);
    });
    Namespace::ALL
        .into_iter()
        .filter(|ns| used.contains(ns))
        .collect()
}

/// Write `root` as an indented document without an XML declaration.
///
/// The root declares every prefix its subtree uses plus `xsi`, and carries
/// `xsi:schemaLocation`.
pub(crate) fn write_document(root: &Element, schema_location: &str) -> OrcidResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut declarations: Vec<(String, &str)> = used_namespaces(root)
        .into_iter()
        .map(|ns| (format!("xmlns:{}", ns.prefix()), ns.uri()))
        .collect();
    declarations.push(("xmlns:xsi".to_owned(), XSI_NAMESPACE));
    declarations.push(("xsi:schemaLocation".to_owned(), schema_location));

    write_element(&mut writer, root, &declarations)?;

    String::from_utf8(writer.into_inner()).map_err(encode_err)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    extra: &[(String, &str)],
) -> OrcidResult<()> {
    let qualified = element.qualified();
    let mut start = BytesStart::new(qualified.as_str());
    for (name, value) in extra {
        start.push_attribute((name.as_str(), *value));
    }
    for attr in &element.attributes {
        start.push_attribute((attr.name.as_str(), attr.value.as_str()));
    }

    if element.children.is_empty() && element.text.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(encode_err);
    }

    writer.write_event(Event::Start(start)).map_err(encode_err)?;
    if element.children.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&element.text)))
            .map_err(encode_err)?;
    } else {
        for child in &element.children {
            write_element(writer, child, &[])?;
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(qualified.as_str())))
        .map_err(encode_err)
}
