//! Per-entity translation between the record model and the element tree.
//!
//! Encoders may build children in any order; [`super::schema::arrange`] fixes the document
//! order afterwards. Decoders look children up by qualified name.

use super::element::Element;
use super::namespace::Namespace::{
    self, Activities, Address as AddressNs, Common, Email as EmailNs, Employment as EmploymentNs,
    ExternalIdentifier as ExternalIdentifierNs, Keyword as KeywordNs, OtherName as OtherNameNs,
    Person as PersonNs, PersonalDetails, Record as RecordNs, ResearcherUrl as ResearcherUrlNs,
    Search as SearchNs, Work as WorkNs,
};
use super::XmlDocument;
use crate::model::*;
use crate::{OrcidError, OrcidResult};
use orcid_types::{PutCode, Visibility};
use std::fmt::Display;
use std::str::FromStr;

// ============================================================================
// Scalar helpers
// ============================================================================

fn invalid(element: &Element, attribute: &str, reason: impl Into<String>) -> OrcidError {
    OrcidError::InvalidValue {
        field: format!("{}@{}", element.qualified(), attribute),
        reason: reason.into(),
    }
}

fn scalar_attr<T>(element: &Element, name: &str) -> OrcidResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    element
        .attribute(name)
        .map(|raw| raw.parse::<T>().map_err(|e| invalid(element, name, e.to_string())))
        .transpose()
}

fn required_scalar_attr<T>(element: &Element, name: &str) -> OrcidResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = element.require_attribute(name)?;
    raw.parse::<T>()
        .map_err(|e| invalid(element, name, e.to_string()))
}

fn visibility_attr(element: &Element) -> OrcidResult<Option<Visibility>> {
    scalar_attr(element, "visibility")
}

fn put_code_attr(element: &Element) -> OrcidResult<Option<PutCode>> {
    scalar_attr(element, "put-code")
}

fn required_put_code(element: &Element) -> OrcidResult<PutCode> {
    required_scalar_attr(element, "put-code")
}

/// `xs:boolean` lexical space.
fn bool_attr(element: &Element, name: &str) -> OrcidResult<bool> {
    match element.require_attribute(name)?.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(invalid(element, name, format!("'{other}' is not a boolean"))),
    }
}

fn value_leaf(namespace: Namespace, name: &str, value: &Value) -> Element {
    Element::leaf(namespace, name, value.value.clone())
}

fn find_value(parent: &Element, namespace: Namespace, name: &str) -> Option<Value> {
    parent.find_text(namespace, name).map(Value::new)
}

// ============================================================================
// Shared fragments
// ============================================================================

fn identifier_to_element(id: &OrcidIdentifier) -> Element {
    Element::new(Common, "orcid-identifier")
        .child(Element::leaf(Common, "uri", id.uri.clone()))
        .child(Element::leaf(Common, "path", id.path.clone()))
        .child(Element::leaf(Common, "host", id.host.clone()))
}

fn identifier_from_element(element: &Element) -> OrcidResult<OrcidIdentifier> {
    Ok(OrcidIdentifier {
        uri: element.require_text(Common, "uri")?,
        path: element.require_text(Common, "path")?,
        host: element.require_text(Common, "host")?,
    })
}

fn source_to_element(source: &Source) -> Element {
    Element::new(Common, "source")
        .opt_child(source.source_orcid.as_ref().map(|id| {
            Element::new(Common, "source-orcid")
                .child(Element::leaf(Common, "uri", id.uri.clone()))
                .child(Element::leaf(Common, "path", id.path.clone()))
                .child(Element::leaf(Common, "host", id.host.clone()))
        }))
        .opt_child(
            source
                .source_name
                .as_ref()
                .map(|n| value_leaf(Common, "source-name", n)),
        )
}

fn source_from_element(parent: &Element) -> OrcidResult<Option<Source>> {
    parent
        .find(Common, "source")
        .map(|source| {
            Ok(Source {
                source_orcid: source
                    .find(Common, "source-orcid")
                    .map(identifier_from_element)
                    .transpose()?,
                source_name: find_value(source, Common, "source-name"),
            })
        })
        .transpose()
}

/// Append the optional `common:created-date` and `common:last-modified-date` leaves.
fn with_dates(element: Element, created: &Option<Value>, modified: &Option<Value>) -> Element {
    element
        .opt_child(created.as_ref().map(|v| value_leaf(Common, "created-date", v)))
        .opt_child(
            modified
                .as_ref()
                .map(|v| value_leaf(Common, "last-modified-date", v)),
        )
}

fn created_date(element: &Element) -> Option<Value> {
    find_value(element, Common, "created-date")
}

fn last_modified_date(element: &Element) -> Option<Value> {
    find_value(element, Common, "last-modified-date")
}

fn organization_to_element(org: &Organization) -> Element {
    Element::new(Common, "organization").child(Element::leaf(Common, "name", org.name.clone()))
}

fn organization_from_element(parent: &Element) -> OrcidResult<Organization> {
    let org = parent.require(Common, "organization")?;
    Ok(Organization {
        name: org.require_text(Common, "name")?,
    })
}

fn fuzzy_date_to_element(name: &str, date: &FuzzyDate) -> Element {
    Element::new(Common, name).child(value_leaf(Common, "year", &date.year))
}

fn fuzzy_date_from_element(parent: &Element, name: &str) -> OrcidResult<Option<FuzzyDate>> {
    parent
        .find(Common, name)
        .map(|date| {
            Ok(FuzzyDate {
                year: Value::new(date.require_text(Common, "year")?),
            })
        })
        .transpose()
}

fn title_to_element(title: &Title) -> Element {
    Element::new(WorkNs, "title").child(value_leaf(Common, "title", &title.title))
}

fn title_from_element(parent: &Element) -> OrcidResult<Title> {
    let title = parent.require(WorkNs, "title")?;
    Ok(Title {
        title: Value::new(title.require_text(Common, "title")?),
    })
}

// ============================================================================
// Person
// ============================================================================

fn name_to_element(name: &Name) -> Element {
    with_dates(
        Element::new(PersonNs, "name"),
        &name.created_date,
        &name.last_modified_date,
    )
    .opt_attr("visibility", name.visibility)
    .opt_child(
        name.given_names
            .as_ref()
            .map(|v| value_leaf(PersonalDetails, "given-names", v)),
    )
    .opt_child(
        name.family_name
            .as_ref()
            .map(|v| value_leaf(PersonalDetails, "family-name", v)),
    )
    .opt_child(
        name.credit_name
            .as_ref()
            .map(|v| value_leaf(PersonalDetails, "credit-name", v)),
    )
}

fn name_from_element(element: &Element) -> OrcidResult<Name> {
    Ok(Name {
        visibility: visibility_attr(element)?,
        created_date: created_date(element),
        last_modified_date: last_modified_date(element),
        given_names: find_value(element, PersonalDetails, "given-names"),
        family_name: find_value(element, PersonalDetails, "family-name"),
        credit_name: find_value(element, PersonalDetails, "credit-name"),
    })
}

fn other_names_to_element(names: &OtherNames) -> Element {
    with_dates(
        Element::new(OtherNameNs, "other-names"),
        &None,
        &names.last_modified_date,
    )
    .children(names.other_name.iter().map(|n| {
        with_dates(
            Element::new(OtherNameNs, "other-name"),
            &n.created_date,
            &n.last_modified_date,
        )
        .opt_attr("put-code", n.put_code)
        .opt_attr("visibility", n.visibility)
        .opt_child(n.source.as_ref().map(source_to_element))
        .child(Element::leaf(OtherNameNs, "content", n.content.clone()))
    }))
}

fn other_names_from_element(element: &Element) -> OrcidResult<OtherNames> {
    let other_name = element
        .find_all(OtherNameNs, "other-name")
        .map(|n| {
            Ok(OtherName {
                put_code: put_code_attr(n)?,
                visibility: visibility_attr(n)?,
                created_date: created_date(n),
                last_modified_date: last_modified_date(n),
                source: source_from_element(n)?,
                content: n.require_text(OtherNameNs, "content")?,
            })
        })
        .collect::<OrcidResult<Vec<_>>>()?;
    Ok(OtherNames {
        last_modified_date: last_modified_date(element),
        other_name,
    })
}

fn biography_to_element(bio: &Biography) -> Element {
    with_dates(
        Element::new(PersonNs, "biography"),
        &bio.created_date,
        &bio.last_modified_date,
    )
    .opt_attr("visibility", bio.visibility)
    .child(Element::leaf(PersonalDetails, "content", bio.content.clone()))
}

fn biography_from_element(element: &Element) -> OrcidResult<Biography> {
    Ok(Biography {
        visibility: visibility_attr(element)?,
        created_date: created_date(element),
        last_modified_date: last_modified_date(element),
        content: element.require_text(PersonalDetails, "content")?,
    })
}

fn researcher_urls_to_element(urls: &ResearcherUrls) -> Element {
    with_dates(
        Element::new(ResearcherUrlNs, "researcher-urls"),
        &None,
        &urls.last_modified_date,
    )
    .children(urls.researcher_url.iter().map(|u| {
        with_dates(
            Element::new(ResearcherUrlNs, "researcher-url"),
            &u.created_date,
            &u.last_modified_date,
        )
        .opt_attr("put-code", u.put_code)
        .opt_attr("visibility", u.visibility)
        .opt_child(u.source.as_ref().map(source_to_element))
        .child(Element::leaf(ResearcherUrlNs, "url-name", u.url_name.clone()))
        .child(value_leaf(ResearcherUrlNs, "url", &u.url))
    }))
}

fn researcher_urls_from_element(element: &Element) -> OrcidResult<ResearcherUrls> {
    let researcher_url = element
        .find_all(ResearcherUrlNs, "researcher-url")
        .map(|u| {
            Ok(ResearcherUrl {
                put_code: put_code_attr(u)?,
                visibility: visibility_attr(u)?,
                created_date: created_date(u),
                last_modified_date: last_modified_date(u),
                source: source_from_element(u)?,
                url_name: u.require_text(ResearcherUrlNs, "url-name")?,
                url: Value::new(u.require_text(ResearcherUrlNs, "url")?),
            })
        })
        .collect::<OrcidResult<Vec<_>>>()?;
    Ok(ResearcherUrls {
        last_modified_date: last_modified_date(element),
        researcher_url,
    })
}

fn emails_to_element(emails: &Emails) -> Element {
    Element::new(EmailNs, "emails").children(emails.email.iter().map(|e| {
        with_dates(
            Element::new(EmailNs, "email"),
            &e.created_date,
            &e.last_modified_date,
        )
        .attr("visibility", e.visibility)
        .attr("verified", e.verified)
        .attr("primary", e.primary)
        .opt_child(e.source.as_ref().map(source_to_element))
        .child(Element::leaf(EmailNs, "email", e.email.clone()))
    }))
}

fn emails_from_element(element: &Element) -> OrcidResult<Emails> {
    let email = element
        .find_all(EmailNs, "email")
        .map(|e| {
            Ok(Email {
                email: e.require_text(EmailNs, "email")?,
                verified: bool_attr(e, "verified")?,
                primary: bool_attr(e, "primary")?,
                visibility: required_scalar_attr(e, "visibility")?,
                created_date: created_date(e),
                last_modified_date: last_modified_date(e),
                source: source_from_element(e)?,
            })
        })
        .collect::<OrcidResult<Vec<_>>>()?;
    Ok(Emails { email })
}

fn addresses_to_element(addresses: &Addresses) -> Element {
    Element::new(AddressNs, "addresses").children(addresses.address.iter().map(|a| {
        with_dates(
            Element::new(AddressNs, "address"),
            &a.created_date,
            &a.last_modified_date,
        )
        .opt_attr("put-code", a.put_code)
        .opt_attr("visibility", a.visibility)
        .opt_child(a.source.as_ref().map(source_to_element))
        .child(Element::leaf(AddressNs, "country", a.country.clone()))
    }))
}

fn addresses_from_element(element: &Element) -> OrcidResult<Addresses> {
    let address = element
        .find_all(AddressNs, "address")
        .map(|a| {
            Ok(Address {
                put_code: put_code_attr(a)?,
                visibility: visibility_attr(a)?,
                created_date: created_date(a),
                last_modified_date: last_modified_date(a),
                source: source_from_element(a)?,
                country: a.require_text(AddressNs, "country")?,
            })
        })
        .collect::<OrcidResult<Vec<_>>>()?;
    Ok(Addresses { address })
}

fn keywords_to_element(keywords: &Keywords) -> Element {
    Element::new(KeywordNs, "keywords").children(keywords.keyword.iter().map(|k| {
        with_dates(
            Element::new(KeywordNs, "keyword"),
            &k.created_date,
            &k.last_modified_date,
        )
        .opt_attr("put-code", k.put_code)
        .opt_attr("visibility", k.visibility)
        .opt_child(k.source.as_ref().map(source_to_element))
        .child(Element::leaf(KeywordNs, "content", k.content.clone()))
    }))
}

fn keywords_from_element(element: &Element) -> OrcidResult<Keywords> {
    let keyword = element
        .find_all(KeywordNs, "keyword")
        .map(|k| {
            Ok(Keyword {
                put_code: put_code_attr(k)?,
                visibility: visibility_attr(k)?,
                created_date: created_date(k),
                last_modified_date: last_modified_date(k),
                source: source_from_element(k)?,
                content: k.require_text(KeywordNs, "content")?,
            })
        })
        .collect::<OrcidResult<Vec<_>>>()?;
    Ok(Keywords { keyword })
}

fn external_identifiers_to_element(ids: &ExternalIdentifiers) -> Element {
    Element::new(ExternalIdentifierNs, "external-identifiers").children(
        ids.external_identifier.iter().map(|x| {
            with_dates(
                Element::new(ExternalIdentifierNs, "external-identifier"),
                &x.created_date,
                &x.last_modified_date,
            )
            .opt_attr("put-code", x.put_code)
            .opt_attr("visibility", x.visibility)
            .opt_child(x.source.as_ref().map(source_to_element))
            .child(Element::leaf(Common, "external-id-type", x.external_id_type.clone()))
            .child(Element::leaf(Common, "external-id-value", x.external_id_value.clone()))
            .opt_child(
                x.external_id_url
                    .as_ref()
                    .map(|u| value_leaf(Common, "external-id-url", u)),
            )
        }),
    )
}

fn external_identifiers_from_element(element: &Element) -> OrcidResult<ExternalIdentifiers> {
    let external_identifier = element
        .find_all(ExternalIdentifierNs, "external-identifier")
        .map(|x| {
            Ok(ExternalIdentifier {
                put_code: put_code_attr(x)?,
                visibility: visibility_attr(x)?,
                created_date: created_date(x),
                last_modified_date: last_modified_date(x),
                source: source_from_element(x)?,
                external_id_type: x.require_text(Common, "external-id-type")?,
                external_id_value: x.require_text(Common, "external-id-value")?,
                external_id_url: find_value(x, Common, "external-id-url"),
            })
        })
        .collect::<OrcidResult<Vec<_>>>()?;
    Ok(ExternalIdentifiers {
        external_identifier,
    })
}

fn person_to_element(person: &Person) -> Element {
    with_dates(
        Element::new(PersonNs, "person"),
        &None,
        &person.last_modified_date,
    )
    .opt_attr("path", person.path.as_deref())
    .child(name_to_element(&person.name))
    .opt_child(person.other_names.as_ref().map(other_names_to_element))
    .opt_child(person.biography.as_ref().map(biography_to_element))
    .opt_child(person.researcher_urls.as_ref().map(researcher_urls_to_element))
    .opt_child(person.emails.as_ref().map(emails_to_element))
    .opt_child(person.addresses.as_ref().map(addresses_to_element))
    .opt_child(person.keywords.as_ref().map(keywords_to_element))
    .opt_child(
        person
            .external_identifiers
            .as_ref()
            .map(external_identifiers_to_element),
    )
}

fn person_from_element(element: &Element) -> OrcidResult<Person> {
    Ok(Person {
        path: element.attribute("path").map(str::to_owned),
        last_modified_date: last_modified_date(element),
        name: name_from_element(element.require(PersonNs, "name")?)?,
        other_names: element
            .find(OtherNameNs, "other-names")
            .map(other_names_from_element)
            .transpose()?,
        biography: element
            .find(PersonNs, "biography")
            .map(biography_from_element)
            .transpose()?,
        researcher_urls: element
            .find(ResearcherUrlNs, "researcher-urls")
            .map(researcher_urls_from_element)
            .transpose()?,
        emails: element
            .find(EmailNs, "emails")
            .map(emails_from_element)
            .transpose()?,
        addresses: element
            .find(AddressNs, "addresses")
            .map(addresses_from_element)
            .transpose()?,
        keywords: element
            .find(KeywordNs, "keywords")
            .map(keywords_from_element)
            .transpose()?,
        external_identifiers: element
            .find(ExternalIdentifierNs, "external-identifiers")
            .map(external_identifiers_from_element)
            .transpose()?,
    })
}

// ============================================================================
// Activities
// ============================================================================

fn work_summary_to_element(summary: &WorkSummary) -> Element {
    Element::new(WorkNs, "work-summary")
        .attr("put-code", summary.put_code)
        .opt_attr("visibility", summary.visibility)
        .child(title_to_element(&summary.title))
        .child(Element::leaf(WorkNs, "type", summary.work_type.clone()))
        .child(Element::leaf(
            Common,
            "last-modified-date",
            summary.last_modified_date.value.to_string(),
        ))
}

fn work_summary_from_element(element: &Element) -> OrcidResult<WorkSummary> {
    let modified = element.require_text(Common, "last-modified-date")?;
    let modified = modified
        .trim()
        .parse::<i64>()
        .map_err(|_| OrcidError::InvalidValue {
            field: "common:last-modified-date".into(),
            reason: format!("'{modified}' is not an integer timestamp"),
        })?;
    Ok(WorkSummary {
        put_code: required_put_code(element)?,
        visibility: visibility_attr(element)?,
        title: title_from_element(element)?,
        work_type: element.require_text(WorkNs, "type")?,
        last_modified_date: LastModifiedDate { value: modified },
    })
}

fn employment_summary_to_element(summary: &EmploymentSummary) -> Element {
    Element::new(EmploymentNs, "employment-summary")
        .attr("put-code", summary.put_code)
        .opt_attr("visibility", summary.visibility)
        .opt_child(
            summary
                .department_name
                .as_ref()
                .map(|d| Element::leaf(Common, "department-name", d.clone())),
        )
        .opt_child(
            summary
                .role_title
                .as_ref()
                .map(|r| Element::leaf(Common, "role-title", r.clone())),
        )
        .child(organization_to_element(&summary.organization))
}

fn employment_summary_from_element(element: &Element) -> OrcidResult<EmploymentSummary> {
    Ok(EmploymentSummary {
        put_code: required_put_code(element)?,
        visibility: visibility_attr(element)?,
        department_name: element.find_text(Common, "department-name"),
        role_title: element.find_text(Common, "role-title"),
        organization: organization_from_element(element)?,
    })
}

fn activities_to_element(activities: &ActivitiesSummary) -> Element {
    let works = Element::new(Activities, "works").children(activities.works.group.iter().map(|g| {
        Element::new(Activities, "group")
            .children(g.work_summary.iter().map(work_summary_to_element))
    }));
    let employments = Element::new(Activities, "employments").children(
        activities.employments.affiliation_group.iter().map(|g| {
            Element::new(Activities, "affiliation-group")
                .children(g.employment_summary.iter().map(employment_summary_to_element))
        }),
    );
    Element::new(Activities, "activities-summary")
        .child(works)
        .child(employments)
}

fn activities_from_element(element: &Element) -> OrcidResult<ActivitiesSummary> {
    let works = element.require(Activities, "works")?;
    let employments = element.require(Activities, "employments")?;

    let group = works
        .find_all(Activities, "group")
        .map(|g| {
            let work_summary = g
                .find_all(WorkNs, "work-summary")
                .map(work_summary_from_element)
                .collect::<OrcidResult<Vec<_>>>()?;
            Ok(WorkGroup { work_summary })
        })
        .collect::<OrcidResult<Vec<_>>>()?;

    let affiliation_group = employments
        .find_all(Activities, "affiliation-group")
        .map(|g| {
            let employment_summary = g
                .find_all(EmploymentNs, "employment-summary")
                .map(employment_summary_from_element)
                .collect::<OrcidResult<Vec<_>>>()?;
            Ok(AffiliationGroup { employment_summary })
        })
        .collect::<OrcidResult<Vec<_>>>()?;

    Ok(ActivitiesSummary {
        works: Works { group },
        employments: Employments { affiliation_group },
    })
}

// ============================================================================
// Document roots
// ============================================================================

impl XmlDocument for Record {
    const ROOT: (Namespace, &'static str) = (RecordNs, "record");
    const SCHEMA_LOCATION: &'static str = "http://www.orcid.org/ns/record ../record-3.0.xsd";

    fn to_element(&self) -> Element {
        Element::new(RecordNs, "record")
            .child(identifier_to_element(&self.orcid_identifier))
            .child(person_to_element(&self.person))
            .child(activities_to_element(&self.activities_summary))
    }

    fn from_element(element: &Element) -> OrcidResult<Self> {
        Ok(Record {
            orcid_identifier: identifier_from_element(element.require(Common, "orcid-identifier")?)?,
            person: person_from_element(element.require(PersonNs, "person")?)?,
            activities_summary: activities_from_element(
                element.require(Activities, "activities-summary")?,
            )?,
        })
    }
}

impl XmlDocument for Person {
    const ROOT: (Namespace, &'static str) = (PersonNs, "person");
    const SCHEMA_LOCATION: &'static str = "http://www.orcid.org/ns/person ../person-3.0.xsd";

    fn to_element(&self) -> Element {
        person_to_element(self)
    }

    fn from_element(element: &Element) -> OrcidResult<Self> {
        person_from_element(element)
    }
}

impl XmlDocument for Search {
    const ROOT: (Namespace, &'static str) = (SearchNs, "search");
    const SCHEMA_LOCATION: &'static str = "http://www.orcid.org/ns/search ../search-3.0.xsd";

    fn to_element(&self) -> Element {
        Element::new(SearchNs, "search")
            .attr("num-found", self.num_found)
            .children(self.result.iter().map(|r| {
                Element::new(SearchNs, "result").child(identifier_to_element(&r.orcid_identifier))
            }))
    }

    fn from_element(element: &Element) -> OrcidResult<Self> {
        let num_found: u64 = required_scalar_attr(element, "num-found")?;
        let result = element
            .find_all(SearchNs, "result")
            .map(|r| {
                Ok(SearchResult {
                    orcid_identifier: identifier_from_element(r.require(Common, "orcid-identifier")?)?,
                })
            })
            .collect::<OrcidResult<Vec<_>>>()?;
        Ok(Search { result, num_found })
    }
}

impl XmlDocument for Work {
    const ROOT: (Namespace, &'static str) = (WorkNs, "work");
    const SCHEMA_LOCATION: &'static str = "http://www.orcid.org/ns/work ../work-3.0.xsd";

    fn to_element(&self) -> Element {
        Element::new(WorkNs, "work")
            .attr("put-code", self.put_code)
            .opt_attr("visibility", self.visibility)
            .child(title_to_element(&self.title))
            .child(Element::leaf(WorkNs, "type", self.work_type.clone()))
            .opt_child(
                self.publication_date
                    .as_ref()
                    .map(|d| fuzzy_date_to_element("publication-date", d)),
            )
    }

    fn from_element(element: &Element) -> OrcidResult<Self> {
        Ok(Work {
            put_code: required_put_code(element)?,
            visibility: visibility_attr(element)?,
            title: title_from_element(element)?,
            work_type: element.require_text(WorkNs, "type")?,
            publication_date: fuzzy_date_from_element(element, "publication-date")?,
        })
    }
}

impl XmlDocument for Employment {
    const ROOT: (Namespace, &'static str) = (EmploymentNs, "employment");
    const SCHEMA_LOCATION: &'static str =
        "http://www.orcid.org/ns/employment ../employment-3.0.xsd";

    fn to_element(&self) -> Element {
        Element::new(EmploymentNs, "employment")
            .attr("put-code", self.put_code)
            .opt_attr("visibility", self.visibility)
            .opt_child(
                self.department_name
                    .as_ref()
                    .map(|d| Element::leaf(Common, "department-name", d.clone())),
            )
            .opt_child(
                self.role_title
                    .as_ref()
                    .map(|r| Element::leaf(Common, "role-title", r.clone())),
            )
            .opt_child(
                self.start_date
                    .as_ref()
                    .map(|d| fuzzy_date_to_element("start-date", d)),
            )
            .child(organization_to_element(&self.organization))
    }

    fn from_element(element: &Element) -> OrcidResult<Self> {
        Ok(Employment {
            put_code: required_put_code(element)?,
            visibility: visibility_attr(element)?,
            department_name: element.find_text(Common, "department-name"),
            role_title: element.find_text(Common, "role-title"),
            start_date: fuzzy_date_from_element(element, "start-date")?,
            organization: organization_from_element(element)?,
        })
    }
}

impl XmlDocument for PutCodeEcho {
    const ROOT: (Namespace, &'static str) = (Common, "response");
    const SCHEMA_LOCATION: &'static str = "http://www.orcid.org/ns/common ../common-3.0.xsd";

    fn to_element(&self) -> Element {
        Element::new(Common, "response")
            .attr("put-code", self.put_code)
            .opt_child(
                self.status
                    .as_ref()
                    .map(|s| Element::leaf(Common, "status", s.clone())),
            )
    }

    fn from_element(element: &Element) -> OrcidResult<Self> {
        Ok(PutCodeEcho {
            put_code: required_put_code(element)?,
            status: element.find_text(Common, "status"),
        })
    }
}
