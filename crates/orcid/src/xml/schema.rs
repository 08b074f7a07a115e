//! Child-sequence table.
//!
//! Each container element lists the children it may hold, in document order. The encoder
//! arranges children by this table before writing, so the order in which mapping code builds
//! a subtree never leaks into the output.

use super::element::Element;
use super::namespace::Namespace;
use crate::{OrcidError, OrcidResult};

type QName = (Namespace, &'static str);

use super::namespace::Namespace::{
    Activities as A, Address as AD, Common as C, Email as E, Employment as EM,
    ExternalIdentifier as X, Keyword as K, OtherName as ON, Person as P, PersonalDetails as PD,
    Record as R, ResearcherUrl as RU, Search as S, Work as W,
};

static SEQUENCES: &[(QName, &[QName])] = &[
    (
        (R, "record"),
        &[(C, "orcid-identifier"), (P, "person"), (A, "activities-summary")],
    ),
    ((C, "orcid-identifier"), &[(C, "uri"), (C, "path"), (C, "host")]),
    (
        (P, "person"),
        &[
            (C, "last-modified-date"),
            (P, "name"),
            (ON, "other-names"),
            (P, "biography"),
            (RU, "researcher-urls"),
            (E, "emails"),
            (AD, "addresses"),
            (K, "keywords"),
            (X, "external-identifiers"),
        ],
    ),
    (
        (P, "name"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (PD, "given-names"),
            (PD, "family-name"),
            (PD, "credit-name"),
        ],
    ),
    (
        (ON, "other-names"),
        &[(C, "last-modified-date"), (ON, "other-name")],
    ),
    (
        (ON, "other-name"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (C, "source"),
            (ON, "content"),
        ],
    ),
    (
        (P, "biography"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (PD, "content"),
        ],
    ),
    (
        (RU, "researcher-urls"),
        &[(C, "last-modified-date"), (RU, "researcher-url")],
    ),
    (
        (RU, "researcher-url"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (C, "source"),
            (RU, "url-name"),
            (RU, "url"),
        ],
    ),
    ((E, "emails"), &[(E, "email")]),
    (
        (E, "email"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (C, "source"),
            (E, "email"),
        ],
    ),
    ((AD, "addresses"), &[(AD, "address")]),
    (
        (AD, "address"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (C, "source"),
            (AD, "country"),
        ],
    ),
    ((K, "keywords"), &[(K, "keyword")]),
    (
        (K, "keyword"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (C, "source"),
            (K, "content"),
        ],
    ),
    ((X, "external-identifiers"), &[(X, "external-identifier")]),
    (
        (X, "external-identifier"),
        &[
            (C, "created-date"),
            (C, "last-modified-date"),
            (C, "source"),
            (C, "external-id-type"),
            (C, "external-id-value"),
            (C, "external-id-url"),
        ],
    ),
    ((C, "source"), &[(C, "source-orcid"), (C, "source-name")]),
    ((C, "source-orcid"), &[(C, "uri"), (C, "path"), (C, "host")]),
    (
        (A, "activities-summary"),
        &[(A, "employments"), (A, "works")],
    ),
    ((A, "employments"), &[(A, "affiliation-group")]),
    ((A, "affiliation-group"), &[(EM, "employment-summary")]),
    (
        (EM, "employment-summary"),
        &[
            (C, "department-name"),
            (C, "role-title"),
            (C, "organization"),
        ],
    ),
    ((C, "organization"), &[(C, "name")]),
    ((A, "works"), &[(A, "group")]),
    ((A, "group"), &[(W, "work-summary")]),
    (
        (W, "work-summary"),
        &[(C, "last-modified-date"), (W, "title"), (W, "type")],
    ),
    ((W, "title"), &[(C, "title")]),
    ((S, "search"), &[(S, "result")]),
    ((S, "result"), &[(C, "orcid-identifier")]),
    (
        (W, "work"),
        &[(W, "title"), (W, "type"), (C, "publication-date")],
    ),
    ((C, "publication-date"), &[(C, "year")]),
    (
        (EM, "employment"),
        &[
            (C, "department-name"),
            (C, "role-title"),
            (C, "start-date"),
            (C, "organization"),
        ],
    ),
    ((C, "start-date"), &[(C, "year")]),
    ((C, "response"), &[(C, "status")]),
];

/// Permitted children of `namespace:name`, in document order.
pub fn sequence_for(namespace: Namespace, name: &str) -> Option<&'static [QName]> {
    SEQUENCES
        .iter()
        .find(|((ns, local), _)| *ns == namespace && *local == name)
        .map(|(_, seq)| *seq)
}

fn position(sequence: &[QName], parent: &Element, child: &Element) -> OrcidResult<usize> {
    sequence
        .iter()
        .position(|(ns, local)| child.is(*ns, local))
        .ok_or_else(|| {
            OrcidError::Encode(format!(
                "'{}' is not a permitted child of '{}'",
                child.qualified(),
                parent.qualified()
            ))
        })
}

fn sequence_of(element: &Element) -> OrcidResult<&'static [QName]> {
    sequence_for(element.namespace, &element.name).ok_or_else(|| {
        OrcidError::Encode(format!(
            "'{}' has children but no child sequence",
            element.qualified()
        ))
    })
}

/// Reorder every container in the tree to its table sequence.
///
/// Repeated children keep their relative order (stable sort).
pub fn arrange(element: &mut Element) -> OrcidResult<()> {
    if element.children.is_empty() {
        return Ok(());
    }
    let sequence = sequence_of(element)?;
    let mut keyed = Vec::with_capacity(element.children.len());
    for child in std::mem::take(&mut element.children) {
        let key = position(sequence, element, &child)?;
        keyed.push((key, child));
    }
    keyed.sort_by_key(|(key, _)| *key);
    element.children = keyed.into_iter().map(|(_, child)| child).collect();
    for child in element.children.iter_mut() {
        arrange(child)?;
    }
    Ok(())
}

/// Verify that every container's children already follow the table, without reordering.
///
/// Decoding accepts any order; this is for callers that want to know whether a document
/// is in canonical order.
pub fn check_sequence(element: &Element) -> OrcidResult<()> {
    if element.children.is_empty() {
        return Ok(());
    }
    let sequence = sequence_of(element)?;
    let mut last = 0;
    for child in &element.children {
        let index = position(sequence, element, child)?;
        if index < last {
            return Err(OrcidError::Encode(format!(
                "'{}' appears out of order in '{}'",
                child.qualified(),
                element.qualified()
            )));
        }
        last = index;
        check_sequence(child)?;
    }
    Ok(())
}
