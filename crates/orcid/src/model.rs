//! Format-independent ORCID record model.
//!
//! Every HTTP payload served by the mock is built from these types. They carry no
//! serialisation concerns: the JSON shape lives in [`crate::json`] and the namespaced XML
//! shape in [`crate::xml`].
//!
//! Optional sub-structures are `Option<T>` so both codecs can tell "absent" (omitted) from
//! "present but empty" (emitted).

use orcid_types::{PutCode, Visibility};

/// Scalar the upstream API wraps in a `value` container (name parts, URLs, titles, years).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Value {
    pub value: String,
}

impl Value {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A registry identifier: canonical URI, bare path and host.
///
/// Values are echoed exactly as stored; the `dddd-dddd-dddd-dddX` path format is not
/// validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrcidIdentifier {
    pub uri: String,
    pub path: String,
    pub host: String,
}

impl OrcidIdentifier {
    /// Build an identifier for `path` on `host`, deriving the canonical URI.
    pub fn new(path: &str, host: &str) -> Self {
        Self {
            uri: format!("https://{host}/{path}"),
            path: path.to_owned(),
            host: host.to_owned(),
        }
    }
}

/// Who asserted an item: the client's identifier and display name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Source {
    pub source_orcid: Option<OrcidIdentifier>,
    pub source_name: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Name {
    pub visibility: Option<Visibility>,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub given_names: Option<Value>,
    pub family_name: Option<Value>,
    pub credit_name: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtherName {
    pub put_code: Option<PutCode>,
    pub visibility: Option<Visibility>,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub source: Option<Source>,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtherNames {
    pub last_modified_date: Option<Value>,
    pub other_name: Vec<OtherName>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Biography {
    pub visibility: Option<Visibility>,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    pub email: String,
    pub verified: bool,
    pub primary: bool,
    pub visibility: Visibility,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub source: Option<Source>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Emails {
    pub email: Vec<Email>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResearcherUrl {
    pub put_code: Option<PutCode>,
    pub visibility: Option<Visibility>,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub source: Option<Source>,
    pub url_name: String,
    pub url: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResearcherUrls {
    pub last_modified_date: Option<Value>,
    pub researcher_url: Vec<ResearcherUrl>,
}

/// Country of residence, as an ISO 3166 alpha-2 code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Address {
    pub put_code: Option<PutCode>,
    pub visibility: Option<Visibility>,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub source: Option<Source>,
    pub country: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Addresses {
    pub address: Vec<Address>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyword {
    pub put_code: Option<PutCode>,
    pub visibility: Option<Visibility>,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub source: Option<Source>,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keywords {
    pub keyword: Vec<Keyword>,
}

/// Person identifier held in another system (Scopus Author ID, ResearcherID, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExternalIdentifier {
    pub put_code: Option<PutCode>,
    pub visibility: Option<Visibility>,
    pub created_date: Option<Value>,
    pub last_modified_date: Option<Value>,
    pub source: Option<Source>,
    pub external_id_type: String,
    pub external_id_value: String,
    pub external_id_url: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExternalIdentifiers {
    pub external_identifier: Vec<ExternalIdentifier>,
}

/// Biographical section of a record.
///
/// Creation and modification dates are carried as the upstream lexical form
/// (`2023-01-01T00:00:00.000Z`) and echoed unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    /// Relative path of the section, e.g. `/0000-0001-2345-6789/person`.
    pub path: Option<String>,
    pub last_modified_date: Option<Value>,
    pub name: Name,
    pub other_names: Option<OtherNames>,
    pub biography: Option<Biography>,
    pub researcher_urls: Option<ResearcherUrls>,
    pub emails: Option<Emails>,
    pub addresses: Option<Addresses>,
    pub keywords: Option<Keywords>,
    pub external_identifiers: Option<ExternalIdentifiers>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Title {
    pub title: Value,
}

impl Title {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Value::new(title),
        }
    }
}

/// Last modification time in Unix epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastModifiedDate {
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkSummary {
    pub put_code: PutCode,
    pub visibility: Option<Visibility>,
    pub title: Title,
    pub work_type: String,
    pub last_modified_date: LastModifiedDate,
}

/// Works sharing the same external identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkGroup {
    pub work_summary: Vec<WorkSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Works {
    pub group: Vec<WorkGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmploymentSummary {
    pub put_code: PutCode,
    pub visibility: Option<Visibility>,
    pub department_name: Option<String>,
    pub role_title: Option<String>,
    pub organization: Organization,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AffiliationGroup {
    pub employment_summary: Vec<EmploymentSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Employments {
    pub affiliation_group: Vec<AffiliationGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitiesSummary {
    pub works: Works,
    pub employments: Employments,
}

/// Full profile: identifier, person and activities summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub orcid_identifier: OrcidIdentifier,
    pub person: Person,
    pub activities_summary: ActivitiesSummary,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub orcid_identifier: OrcidIdentifier,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Search {
    pub result: Vec<SearchResult>,
    pub num_found: u64,
}

/// Partial date; only the year is modelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuzzyDate {
    pub year: Value,
}

impl FuzzyDate {
    pub fn year(year: impl Into<String>) -> Self {
        Self {
            year: Value::new(year),
        }
    }
}

/// Single work as returned by `GET /{id}/work/{put-code}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Work {
    pub put_code: PutCode,
    pub visibility: Option<Visibility>,
    pub title: Title,
    pub work_type: String,
    pub publication_date: Option<FuzzyDate>,
}

/// Single employment as returned by `GET /{id}/employment/{put-code}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employment {
    pub put_code: PutCode,
    pub visibility: Option<Visibility>,
    pub department_name: Option<String>,
    pub role_title: Option<String>,
    pub start_date: Option<FuzzyDate>,
    pub organization: Organization,
}

/// Acknowledgement returned after a create or update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PutCodeEcho {
    pub put_code: PutCode,
    pub status: Option<String>,
}
