//! JSON wire models and translation helpers.
//!
//! Responsibilities:
//! - Define strict wire structs mirroring the upstream kebab-case JSON vocabulary
//! - Translate between the record model and the wire structs
//! - Encode to bytes / decode from bytes with path-aware error reporting
//!
//! Notes:
//! - Absent optionals are omitted from the object, never written as `null`
//! - Value-wrapped scalars become `{"value": ...}`

use crate::model::*;
use crate::{OrcidError, OrcidResult};
use orcid_types::{PutCode, Visibility};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A model type with a JSON wire representation.
pub trait JsonDocument: Sized {
    type Wire: Serialize + DeserializeOwned;

    fn to_wire(&self) -> Self::Wire;

    fn from_wire(wire: Self::Wire) -> OrcidResult<Self>;
}

/// Encode a document as compact JSON bytes.
///
/// # Errors
///
/// Returns [`OrcidError::Encode`] if serde_json fails, which does not happen for model values.
pub fn to_vec<D: JsonDocument>(doc: &D) -> OrcidResult<Vec<u8>> {
    serde_json::to_vec(&doc.to_wire()).map_err(|e| OrcidError::Encode(e.to_string()))
}

/// Encode a document as a JSON value tree.
pub fn to_value<D: JsonDocument>(doc: &D) -> OrcidResult<serde_json::Value> {
    serde_json::to_value(doc.to_wire()).map_err(|e| OrcidError::Encode(e.to_string()))
}

/// Decode a document from JSON bytes.
///
/// This uses `serde_path_to_error` to surface the path (e.g. `person.emails.email[0].verified`)
/// of the failing field when the JSON does not match the wire schema.
///
/// # Errors
///
/// Returns [`OrcidError::Json`] if:
/// - the input is not valid JSON,
/// - any field has an unexpected type or is missing,
/// - any unknown keys are present (due to `#[serde(deny_unknown_fields)]`).
pub fn from_slice<D: JsonDocument>(bytes: &[u8]) -> OrcidResult<D> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let wire = match serde_path_to_error::deserialize::<_, D::Wire>(&mut deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>".to_owned()
            } else {
                path
            };
            return Err(OrcidError::Json {
                path,
                message: source.to_string(),
            });
        }
    };
    deserializer.end().map_err(|e| OrcidError::Json {
        path: "<root>".into(),
        message: e.to_string(),
    })?;
    D::from_wire(wire)
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ValueWire {
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OrcidIdentifierWire {
    pub uri: String,
    pub path: String,
    pub host: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SourceWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_orcid: Option<OrcidIdentifierWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<ValueWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct NameWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_name: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OtherNameWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceWire>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OtherNamesWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(default)]
    pub other_name: Vec<OtherNameWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BiographyWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct EmailWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceWire>,
    pub email: String,
    pub verified: bool,
    pub primary: bool,
    pub visibility: Visibility,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EmailsWire {
    #[serde(default)]
    pub email: Vec<EmailWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ResearcherUrlWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
    pub url_name: String,
    pub url: ValueWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ResearcherUrlsWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(default)]
    pub researcher_url: Vec<ResearcherUrlWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AddressWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceWire>,
    pub country: ValueWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AddressesWire {
    #[serde(default)]
    pub address: Vec<AddressWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct KeywordWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceWire>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeywordsWire {
    #[serde(default)]
    pub keyword: Vec<KeywordWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ExternalIdentifierWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceWire>,
    pub external_id_type: String,
    pub external_id_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id_url: Option<ValueWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_code: Option<PutCode>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ExternalIdentifiersWire {
    #[serde(default)]
    pub external_identifier: Vec<ExternalIdentifierWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PersonWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<ValueWire>,
    pub name: NameWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_names: Option<OtherNamesWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<BiographyWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub researcher_urls: Option<ResearcherUrlsWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<EmailsWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<AddressesWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordsWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifiers: Option<ExternalIdentifiersWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TitleWire {
    pub title: ValueWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LastModifiedDateWire {
    pub value: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct WorkSummaryWire {
    pub put_code: PutCode,
    pub title: TitleWire,
    #[serde(rename = "type")]
    pub work_type: String,
    pub last_modified_date: LastModifiedDateWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct WorkGroupWire {
    #[serde(default)]
    pub work_summary: Vec<WorkSummaryWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WorksWire {
    #[serde(default)]
    pub group: Vec<WorkGroupWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OrganizationWire {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct EmploymentSummaryWire {
    pub put_code: PutCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    pub organization: OrganizationWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AffiliationGroupWire {
    #[serde(default)]
    pub employment_summary: Vec<EmploymentSummaryWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct EmploymentsWire {
    #[serde(default)]
    pub affiliation_group: Vec<AffiliationGroupWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ActivitiesSummaryWire {
    pub works: WorksWire,
    pub employments: EmploymentsWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RecordWire {
    pub orcid_identifier: OrcidIdentifierWire,
    pub person: PersonWire,
    pub activities_summary: ActivitiesSummaryWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SearchResultWire {
    pub orcid_identifier: OrcidIdentifierWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SearchWire {
    #[serde(default)]
    pub result: Vec<SearchResultWire>,
    pub num_found: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FuzzyDateWire {
    pub year: ValueWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct WorkWire {
    #[serde(rename = "type")]
    pub work_type: String,
    pub put_code: PutCode,
    pub title: TitleWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<FuzzyDateWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct EmploymentWire {
    pub put_code: PutCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_title: Option<String>,
    pub organization: OrganizationWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FuzzyDateWire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PutCodeEchoWire {
    pub put_code: PutCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ============================================================================
// Translation helpers
// ============================================================================

fn value_to_wire(v: &Value) -> ValueWire {
    ValueWire {
        value: v.value.clone(),
    }
}

fn value_from_wire(w: ValueWire) -> Value {
    Value { value: w.value }
}

fn identifier_to_wire(id: &OrcidIdentifier) -> OrcidIdentifierWire {
    OrcidIdentifierWire {
        uri: id.uri.clone(),
        path: id.path.clone(),
        host: id.host.clone(),
    }
}

fn identifier_from_wire(w: OrcidIdentifierWire) -> OrcidIdentifier {
    OrcidIdentifier {
        uri: w.uri,
        path: w.path,
        host: w.host,
    }
}

fn title_to_wire(t: &Title) -> TitleWire {
    TitleWire {
        title: value_to_wire(&t.title),
    }
}

fn title_from_wire(w: TitleWire) -> Title {
    Title {
        title: value_from_wire(w.title),
    }
}

fn fuzzy_date_to_wire(d: &FuzzyDate) -> FuzzyDateWire {
    FuzzyDateWire {
        year: value_to_wire(&d.year),
    }
}

fn fuzzy_date_from_wire(w: FuzzyDateWire) -> FuzzyDate {
    FuzzyDate {
        year: value_from_wire(w.year),
    }
}

fn opt_value_to_wire(v: &Option<Value>) -> Option<ValueWire> {
    v.as_ref().map(value_to_wire)
}

fn source_to_wire(s: &Source) -> SourceWire {
    SourceWire {
        source_orcid: s.source_orcid.as_ref().map(identifier_to_wire),
        source_name: opt_value_to_wire(&s.source_name),
    }
}

fn source_from_wire(w: SourceWire) -> Source {
    Source {
        source_orcid: w.source_orcid.map(identifier_from_wire),
        source_name: w.source_name.map(value_from_wire),
    }
}

fn person_to_wire(p: &Person) -> PersonWire {
    PersonWire {
        last_modified_date: opt_value_to_wire(&p.last_modified_date),
        name: NameWire {
            created_date: opt_value_to_wire(&p.name.created_date),
            last_modified_date: opt_value_to_wire(&p.name.last_modified_date),
            given_names: opt_value_to_wire(&p.name.given_names),
            family_name: opt_value_to_wire(&p.name.family_name),
            credit_name: opt_value_to_wire(&p.name.credit_name),
            visibility: p.name.visibility,
        },
        other_names: p.other_names.as_ref().map(|o| OtherNamesWire {
            last_modified_date: opt_value_to_wire(&o.last_modified_date),
            other_name: o
                .other_name
                .iter()
                .map(|n| OtherNameWire {
                    created_date: opt_value_to_wire(&n.created_date),
                    last_modified_date: opt_value_to_wire(&n.last_modified_date),
                    source: n.source.as_ref().map(source_to_wire),
                    content: n.content.clone(),
                    visibility: n.visibility,
                    put_code: n.put_code,
                })
                .collect(),
        }),
        biography: p.biography.as_ref().map(|b| BiographyWire {
            created_date: opt_value_to_wire(&b.created_date),
            last_modified_date: opt_value_to_wire(&b.last_modified_date),
            content: b.content.clone(),
            visibility: b.visibility,
        }),
        researcher_urls: p.researcher_urls.as_ref().map(|r| ResearcherUrlsWire {
            last_modified_date: opt_value_to_wire(&r.last_modified_date),
            researcher_url: r
                .researcher_url
                .iter()
                .map(|u| ResearcherUrlWire {
                    created_date: opt_value_to_wire(&u.created_date),
                    last_modified_date: opt_value_to_wire(&u.last_modified_date),
                    source: u.source.as_ref().map(source_to_wire),
                    put_code: u.put_code,
                    url_name: u.url_name.clone(),
                    url: value_to_wire(&u.url),
                    visibility: u.visibility,
                })
                .collect(),
        }),
        emails: p.emails.as_ref().map(|e| EmailsWire {
            email: e
                .email
                .iter()
                .map(|m| EmailWire {
                    created_date: opt_value_to_wire(&m.created_date),
                    last_modified_date: opt_value_to_wire(&m.last_modified_date),
                    source: m.source.as_ref().map(source_to_wire),
                    email: m.email.clone(),
                    verified: m.verified,
                    primary: m.primary,
                    visibility: m.visibility,
                })
                .collect(),
        }),
        addresses: p.addresses.as_ref().map(|a| AddressesWire {
            address: a
                .address
                .iter()
                .map(|a| AddressWire {
                    created_date: opt_value_to_wire(&a.created_date),
                    last_modified_date: opt_value_to_wire(&a.last_modified_date),
                    source: a.source.as_ref().map(source_to_wire),
                    country: ValueWire {
                        value: a.country.clone(),
                    },
                    visibility: a.visibility,
                    put_code: a.put_code,
                })
                .collect(),
        }),
        keywords: p.keywords.as_ref().map(|k| KeywordsWire {
            keyword: k
                .keyword
                .iter()
                .map(|k| KeywordWire {
                    created_date: opt_value_to_wire(&k.created_date),
                    last_modified_date: opt_value_to_wire(&k.last_modified_date),
                    source: k.source.as_ref().map(source_to_wire),
                    content: k.content.clone(),
                    visibility: k.visibility,
                    put_code: k.put_code,
                })
                .collect(),
        }),
        external_identifiers: p.external_identifiers.as_ref().map(|x| ExternalIdentifiersWire {
            external_identifier: x
                .external_identifier
                .iter()
                .map(|x| ExternalIdentifierWire {
                    created_date: opt_value_to_wire(&x.created_date),
                    last_modified_date: opt_value_to_wire(&x.last_modified_date),
                    source: x.source.as_ref().map(source_to_wire),
                    external_id_type: x.external_id_type.clone(),
                    external_id_value: x.external_id_value.clone(),
                    external_id_url: opt_value_to_wire(&x.external_id_url),
                    visibility: x.visibility,
                    put_code: x.put_code,
                })
                .collect(),
        }),
        path: p.path.clone(),
    }
}

fn person_from_wire(w: PersonWire) -> Person {
    Person {
        path: w.path,
        last_modified_date: w.last_modified_date.map(value_from_wire),
        name: Name {
            visibility: w.name.visibility,
            created_date: w.name.created_date.map(value_from_wire),
            last_modified_date: w.name.last_modified_date.map(value_from_wire),
            given_names: w.name.given_names.map(value_from_wire),
            family_name: w.name.family_name.map(value_from_wire),
            credit_name: w.name.credit_name.map(value_from_wire),
        },
        other_names: w.other_names.map(|o| OtherNames {
            last_modified_date: o.last_modified_date.map(value_from_wire),
            other_name: o
                .other_name
                .into_iter()
                .map(|n| OtherName {
                    put_code: n.put_code,
                    visibility: n.visibility,
                    created_date: n.created_date.map(value_from_wire),
                    last_modified_date: n.last_modified_date.map(value_from_wire),
                    source: n.source.map(source_from_wire),
                    content: n.content,
                })
                .collect(),
        }),
        biography: w.biography.map(|b| Biography {
            visibility: b.visibility,
            created_date: b.created_date.map(value_from_wire),
            last_modified_date: b.last_modified_date.map(value_from_wire),
            content: b.content,
        }),
        researcher_urls: w.researcher_urls.map(|r| ResearcherUrls {
            last_modified_date: r.last_modified_date.map(value_from_wire),
            researcher_url: r
                .researcher_url
                .into_iter()
                .map(|u| ResearcherUrl {
                    put_code: u.put_code,
                    visibility: u.visibility,
                    created_date: u.created_date.map(value_from_wire),
                    last_modified_date: u.last_modified_date.map(value_from_wire),
                    source: u.source.map(source_from_wire),
                    url_name: u.url_name,
                    url: value_from_wire(u.url),
                })
                .collect(),
        }),
        emails: w.emails.map(|e| Emails {
            email: e
                .email
                .into_iter()
                .map(|m| Email {
                    email: m.email,
                    verified: m.verified,
                    primary: m.primary,
                    visibility: m.visibility,
                    created_date: m.created_date.map(value_from_wire),
                    last_modified_date: m.last_modified_date.map(value_from_wire),
                    source: m.source.map(source_from_wire),
                })
                .collect(),
        }),
        addresses: w.addresses.map(|a| Addresses {
            address: a
                .address
                .into_iter()
                .map(|a| Address {
                    put_code: a.put_code,
                    visibility: a.visibility,
                    created_date: a.created_date.map(value_from_wire),
                    last_modified_date: a.last_modified_date.map(value_from_wire),
                    source: a.source.map(source_from_wire),
                    country: a.country.value,
                })
                .collect(),
        }),
        keywords: w.keywords.map(|k| Keywords {
            keyword: k
                .keyword
                .into_iter()
                .map(|k| Keyword {
                    put_code: k.put_code,
                    visibility: k.visibility,
                    created_date: k.created_date.map(value_from_wire),
                    last_modified_date: k.last_modified_date.map(value_from_wire),
                    source: k.source.map(source_from_wire),
                    content: k.content,
                })
                .collect(),
        }),
        external_identifiers: w.external_identifiers.map(|x| ExternalIdentifiers {
            external_identifier: x
                .external_identifier
                .into_iter()
                .map(|x| ExternalIdentifier {
                    put_code: x.put_code,
                    visibility: x.visibility,
                    created_date: x.created_date.map(value_from_wire),
                    last_modified_date: x.last_modified_date.map(value_from_wire),
                    source: x.source.map(source_from_wire),
                    external_id_type: x.external_id_type,
                    external_id_value: x.external_id_value,
                    external_id_url: x.external_id_url.map(value_from_wire),
                })
                .collect(),
        }),
    }
}

fn activities_to_wire(a: &ActivitiesSummary) -> ActivitiesSummaryWire {
    ActivitiesSummaryWire {
        works: WorksWire {
            group: a
                .works
                .group
                .iter()
                .map(|g| WorkGroupWire {
                    work_summary: g
                        .work_summary
                        .iter()
                        .map(|s| WorkSummaryWire {
                            put_code: s.put_code,
                            title: title_to_wire(&s.title),
                            work_type: s.work_type.clone(),
                            last_modified_date: LastModifiedDateWire {
                                value: s.last_modified_date.value,
                            },
                            visibility: s.visibility,
                        })
                        .collect(),
                })
                .collect(),
        },
        employments: EmploymentsWire {
            affiliation_group: a
                .employments
                .affiliation_group
                .iter()
                .map(|g| AffiliationGroupWire {
                    employment_summary: g
                        .employment_summary
                        .iter()
                        .map(|s| EmploymentSummaryWire {
                            put_code: s.put_code,
                            department_name: s.department_name.clone(),
                            role_title: s.role_title.clone(),
                            organization: OrganizationWire {
                                name: s.organization.name.clone(),
                            },
                            visibility: s.visibility,
                        })
                        .collect(),
                })
                .collect(),
        },
    }
}

fn activities_from_wire(w: ActivitiesSummaryWire) -> ActivitiesSummary {
    ActivitiesSummary {
        works: Works {
            group: w
                .works
                .group
                .into_iter()
                .map(|g| WorkGroup {
                    work_summary: g
                        .work_summary
                        .into_iter()
                        .map(|s| WorkSummary {
                            put_code: s.put_code,
                            visibility: s.visibility,
                            title: title_from_wire(s.title),
                            work_type: s.work_type,
                            last_modified_date: LastModifiedDate {
                                value: s.last_modified_date.value,
                            },
                        })
                        .collect(),
                })
                .collect(),
        },
        employments: Employments {
            affiliation_group: w
                .employments
                .affiliation_group
                .into_iter()
                .map(|g| AffiliationGroup {
                    employment_summary: g
                        .employment_summary
                        .into_iter()
                        .map(|s| EmploymentSummary {
                            put_code: s.put_code,
                            visibility: s.visibility,
                            department_name: s.department_name,
                            role_title: s.role_title,
                            organization: Organization {
                                name: s.organization.name,
                            },
                        })
                        .collect(),
                })
                .collect(),
        },
    }
}

// ============================================================================
// Document impls
// ============================================================================

impl JsonDocument for Record {
    type Wire = RecordWire;

    fn to_wire(&self) -> RecordWire {
        RecordWire {
            orcid_identifier: identifier_to_wire(&self.orcid_identifier),
            person: person_to_wire(&self.person),
            activities_summary: activities_to_wire(&self.activities_summary),
        }
    }

    fn from_wire(wire: RecordWire) -> OrcidResult<Self> {
        Ok(Record {
            orcid_identifier: identifier_from_wire(wire.orcid_identifier),
            person: person_from_wire(wire.person),
            activities_summary: activities_from_wire(wire.activities_summary),
        })
    }
}

impl JsonDocument for Person {
    type Wire = PersonWire;

    fn to_wire(&self) -> PersonWire {
        person_to_wire(self)
    }

    fn from_wire(wire: PersonWire) -> OrcidResult<Self> {
        Ok(person_from_wire(wire))
    }
}

impl JsonDocument for Search {
    type Wire = SearchWire;

    fn to_wire(&self) -> SearchWire {
        SearchWire {
            result: self
                .result
                .iter()
                .map(|r| SearchResultWire {
                    orcid_identifier: identifier_to_wire(&r.orcid_identifier),
                })
                .collect(),
            num_found: self.num_found,
        }
    }

    fn from_wire(wire: SearchWire) -> OrcidResult<Self> {
        Ok(Search {
            result: wire
                .result
                .into_iter()
                .map(|r| SearchResult {
                    orcid_identifier: identifier_from_wire(r.orcid_identifier),
                })
                .collect(),
            num_found: wire.num_found,
        })
    }
}

impl JsonDocument for Work {
    type Wire = WorkWire;

    fn to_wire(&self) -> WorkWire {
        WorkWire {
            work_type: self.work_type.clone(),
            put_code: self.put_code,
            title: title_to_wire(&self.title),
            publication_date: self.publication_date.as_ref().map(fuzzy_date_to_wire),
            visibility: self.visibility,
        }
    }

    fn from_wire(wire: WorkWire) -> OrcidResult<Self> {
        Ok(Work {
            put_code: wire.put_code,
            visibility: wire.visibility,
            title: title_from_wire(wire.title),
            work_type: wire.work_type,
            publication_date: wire.publication_date.map(fuzzy_date_from_wire),
        })
    }
}

impl JsonDocument for Employment {
    type Wire = EmploymentWire;

    fn to_wire(&self) -> EmploymentWire {
        EmploymentWire {
            put_code: self.put_code,
            department_name: self.department_name.clone(),
            role_title: self.role_title.clone(),
            organization: OrganizationWire {
                name: self.organization.name.clone(),
            },
            start_date: self.start_date.as_ref().map(fuzzy_date_to_wire),
            visibility: self.visibility,
        }
    }

    fn from_wire(wire: EmploymentWire) -> OrcidResult<Self> {
        Ok(Employment {
            put_code: wire.put_code,
            visibility: wire.visibility,
            department_name: wire.department_name,
            role_title: wire.role_title,
            start_date: wire.start_date.map(fuzzy_date_from_wire),
            organization: Organization {
                name: wire.organization.name,
            },
        })
    }
}

impl JsonDocument for PutCodeEcho {
    type Wire = PutCodeEchoWire;

    fn to_wire(&self) -> PutCodeEchoWire {
        PutCodeEchoWire {
            put_code: self.put_code,
            status: self.status.clone(),
        }
    }

    fn from_wire(wire: PutCodeEchoWire) -> OrcidResult<Self> {
        Ok(PutCodeEcho {
            put_code: wire.put_code,
            status: wire.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_record, sparse_record};
    use serde_json::json;

    #[test]
    fn record_uses_kebab_case_vocabulary() {
        let value = to_value(&sample_record()).expect("encode");
        assert_eq!(value["orcid-identifier"]["path"], "0000-0001-2345-6789");
        assert_eq!(value["person"]["name"]["given-names"]["value"], "Sofia");
        assert_eq!(value["person"]["name"]["credit-name"]["value"], "S. Garcia");
        assert_eq!(
            value["person"]["researcher-urls"]["researcher-url"][0]["url"]["value"],
            "https://sofia.garcia.mock"
        );
        assert_eq!(
            value["activities-summary"]["works"]["group"][0]["work-summary"][0]["put-code"],
            123456
        );
        assert_eq!(
            value["activities-summary"]["employments"]["affiliation-group"][0]
                ["employment-summary"][0]["organization"]["name"],
            "Mock University"
        );
    }

    #[test]
    fn record_round_trips_through_json() {
        for record in [sample_record(), sparse_record()] {
            let bytes = to_vec(&record).expect("encode");
            let decoded: Record = from_slice(&bytes).expect("decode");
            assert_eq!(decoded, record);
        }
    }

    #[test]
    fn absent_optionals_are_omitted_not_null() {
        let value = to_value(&sparse_record()).expect("encode");
        let person = value["person"].as_object().expect("person object");
        assert!(!person.contains_key("biography"));
        assert!(!person.contains_key("emails"));
        assert!(!person.contains_key("researcher-urls"));
        assert!(!person.contains_key("other-names"));
        assert!(!person.contains_key("path"));
        let name = value["person"]["name"].as_object().expect("name object");
        assert!(!name.contains_key("credit-name"));
        assert!(!name.contains_key("visibility"));
    }

    #[test]
    fn empty_biography_is_emitted_and_absent_one_is_not() {
        let mut person = sample_record().person;
        person.biography = Some(Biography {
            content: String::new(),
            ..Biography::default()
        });
        let value = to_value(&person).expect("encode");
        assert_eq!(value["biography"], json!({"content": ""}));
        let bytes = to_vec(&person).expect("encode");
        let text = std::str::from_utf8(&bytes).expect("utf-8");
        assert!(text.contains(r#""biography":{"content":""}"#));
        let decoded: Person = from_slice(&bytes).expect("decode");
        assert_eq!(decoded.biography, person.biography);

        person.biography = None;
        let value = to_value(&person).expect("encode");
        assert!(!value.as_object().expect("person object").contains_key("biography"));
    }

    #[test]
    fn email_order_is_preserved() {
        let record = sample_record();
        let value = to_value(&record).expect("encode");
        let emails: Vec<&str> = value["person"]["emails"]["email"]
            .as_array()
            .expect("email array")
            .iter()
            .map(|e| e["email"].as_str().expect("email string"))
            .collect();
        assert_eq!(emails, vec!["sofia.garcia@mock.edu", "s.garcia@alt.mock.edu"]);
    }

    #[test]
    fn echo_omits_missing_status() {
        let created = PutCodeEcho {
            put_code: PutCode::new(100001),
            status: None,
        };
        assert_eq!(to_value(&created).expect("encode"), json!({"put-code": 100001}));

        let updated = PutCodeEcho {
            put_code: PutCode::new(7),
            status: Some("updated".into()),
        };
        assert_eq!(
            to_value(&updated).expect("encode"),
            json!({"put-code": 7, "status": "updated"})
        );
    }

    #[test]
    fn decode_reports_failing_path() {
        let input = br#"{"put-code": "not-a-number"}"#;
        let err = from_slice::<PutCodeEcho>(input).expect_err("should reject");
        match err {
            OrcidError::Json { path, .. } => assert_eq!(path, "put-code"),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_unknown_keys() {
        let input = br#"{"put-code": 1, "unexpected_key": true}"#;
        let err = from_slice::<PutCodeEcho>(input).expect_err("should reject");
        match err {
            OrcidError::Json { message, .. } => assert!(message.contains("unexpected_key")),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_unknown_visibility() {
        let input = br#"{"content": "bio", "visibility": "PUBLIC"}"#;
        let err = from_slice::<Person>(
            format!(r#"{{"name": {{}}, "biography": {}}}"#, std::str::from_utf8(input).unwrap())
                .as_bytes(),
        )
        .expect_err("should reject");
        match err {
            OrcidError::Json { path, .. } => assert_eq!(path, "biography.visibility"),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn work_payload_shape() {
        let work = Work {
            put_code: PutCode::new(123),
            visibility: None,
            title: Title::new("Retrieved Mock Work"),
            work_type: "journal-article".into(),
            publication_date: Some(FuzzyDate::year("2023")),
        };
        assert_eq!(
            to_value(&work).expect("encode"),
            json!({
                "type": "journal-article",
                "put-code": 123,
                "title": {"title": {"value": "Retrieved Mock Work"}},
                "publication-date": {"year": {"value": "2023"}}
            })
        );
    }
}
