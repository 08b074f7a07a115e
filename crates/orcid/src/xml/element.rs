//! Owned element tree shared by the XML reader, writer and entity mappings.
//!
//! Elements either hold child elements or text, never both; that is all the ORCID vocabulary
//! needs. Attributes are unqualified (`visibility`, `put-code`, ...).

use super::namespace::Namespace;
use crate::{OrcidError, OrcidResult};
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub namespace: Namespace,
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    pub fn new(namespace: Namespace, name: &str) -> Self {
        Self {
            namespace,
            name: name.to_owned(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Text-only element.
    pub fn leaf(namespace: Namespace, name: &str, text: impl Into<String>) -> Self {
        let mut element = Self::new(namespace, name);
        element.text = text.into();
        element
    }

    pub fn attr(mut self, name: &str, value: impl Display) -> Self {
        self.attributes.push(Attribute {
            name: name.to_owned(),
            value: value.to_string(),
        });
        self
    }

    pub fn opt_attr<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn opt_child(mut self, child: Option<Element>) -> Self {
        self.children.extend(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Canonical `prefix:local` spelling, used in error messages and on output.
    pub fn qualified(&self) -> String {
        format!("{}:{}", self.namespace.prefix(), self.name)
    }

    pub fn is(&self, namespace: Namespace, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }

    pub fn find(&self, namespace: Namespace, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(namespace, name))
    }

    pub fn find_all<'a>(
        &'a self,
        namespace: Namespace,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.is(namespace, name))
    }

    /// Required child lookup.
    pub fn require(&self, namespace: Namespace, name: &str) -> OrcidResult<&Element> {
        self.find(namespace, name)
            .ok_or_else(|| OrcidError::MissingElement {
                parent: self.qualified(),
                child: format!("{}:{}", namespace.prefix(), name),
            })
    }

    /// Text of an optional child leaf.
    pub fn find_text(&self, namespace: Namespace, name: &str) -> Option<String> {
        self.find(namespace, name).map(|c| c.text.clone())
    }

    /// Text of a required child leaf.
    pub fn require_text(&self, namespace: Namespace, name: &str) -> OrcidResult<String> {
        self.require(namespace, name).map(|c| c.text.clone())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn require_attribute(&self, name: &str) -> OrcidResult<&str> {
        self.attribute(name)
            .ok_or_else(|| OrcidError::MissingAttribute {
                element: self.qualified(),
                attribute: name.to_owned(),
            })
    }

    /// Depth-first visit of this element and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new(Namespace::Person, "name")
            .attr("visibility", "public")
            .child(Element::leaf(Namespace::PersonalDetails, "given-names", "Sofia"))
            .opt_child(None)
            .child(Element::leaf(Namespace::PersonalDetails, "family-name", "Garcia"))
    }

    #[test]
    fn lookup_by_namespace_and_name() {
        let el = sample();
        assert_eq!(
            el.find_text(Namespace::PersonalDetails, "family-name").as_deref(),
            Some("Garcia")
        );
        assert!(el.find(Namespace::Common, "family-name").is_none());
        assert_eq!(el.attribute("visibility"), Some("public"));
        assert_eq!(el.children.len(), 2);
    }

    #[test]
    fn missing_child_names_parent_and_child() {
        let err = sample()
            .require(Namespace::PersonalDetails, "credit-name")
            .expect_err("should be missing");
        match err {
            OrcidError::MissingElement { parent, child } => {
                assert_eq!(parent, "person:name");
                assert_eq!(child, "personal-details:credit-name");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_attribute_is_reported() {
        let err = sample().require_attribute("put-code").expect_err("absent");
        assert!(matches!(err, OrcidError::MissingAttribute { .. }));
    }

    #[test]
    fn walk_visits_every_element() {
        let mut names = Vec::new();
        sample().walk(&mut |e| names.push(e.name.clone()));
        assert_eq!(names, vec!["name", "given-names", "family-name"]);
    }
}
