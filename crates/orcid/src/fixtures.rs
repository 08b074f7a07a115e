//! Hand-built model values shared by the codec tests.

use crate::model::*;
use orcid_types::{PutCode, Visibility};

pub(crate) const SAMPLE_ID: &str = "0000-0001-2345-6789";

pub(crate) fn sample_record() -> Record {
    Record {
        orcid_identifier: OrcidIdentifier::new(SAMPLE_ID, "orcid.org"),
        person: Person {
            name: Name {
                visibility: Some(Visibility::Public),
                given_names: Some(Value::new("Sofia")),
                family_name: Some(Value::new("Garcia")),
                credit_name: Some(Value::new("S. Garcia")),
                ..Name::default()
            },
            biography: Some(Biography {
                visibility: Some(Visibility::Public),
                content: "Researcher in computational linguistics & NLP.".into(),
                ..Biography::default()
            }),
            researcher_urls: Some(ResearcherUrls {
                researcher_url: vec![ResearcherUrl {
                    put_code: Some(PutCode::new(4411)),
                    visibility: Some(Visibility::Public),
                    url_name: "Personal Website".into(),
                    url: Value::new("https://sofia.garcia.mock"),
                    ..ResearcherUrl::default()
                }],
                ..ResearcherUrls::default()
            }),
            emails: Some(Emails {
                email: vec![
                    Email {
                        email: "sofia.garcia@mock.edu".into(),
                        verified: true,
                        primary: true,
                        visibility: Visibility::Public,
                        created_date: None,
                        last_modified_date: None,
                        source: None,
                    },
                    Email {
                        email: "s.garcia@alt.mock.edu".into(),
                        verified: false,
                        primary: false,
                        visibility: Visibility::Limited,
                        created_date: None,
                        last_modified_date: None,
                        source: None,
                    },
                ],
            }),
            ..Person::default()
        },
        activities_summary: ActivitiesSummary {
            works: Works {
                group: vec![WorkGroup {
                    work_summary: vec![WorkSummary {
                        put_code: PutCode::new(123456),
                        visibility: Some(Visibility::Public),
                        title: Title::new("Mock Paper Title"),
                        work_type: "journal-article".into(),
                        last_modified_date: LastModifiedDate {
                            value: 1_700_000_000_000,
                        },
                    }],
                }],
            },
            employments: Employments {
                affiliation_group: vec![AffiliationGroup {
                    employment_summary: vec![EmploymentSummary {
                        put_code: PutCode::new(789012),
                        visibility: Some(Visibility::RegisteredOnly),
                        department_name: Some("Mock Department".into()),
                        role_title: Some("Mock Researcher".into()),
                        organization: Organization {
                            name: "Mock University".into(),
                        },
                    }],
                }],
            },
        },
    }
}

/// Only the required parts: no biography, emails, researcher URLs or activities.
pub(crate) fn sparse_record() -> Record {
    Record {
        orcid_identifier: OrcidIdentifier::new("0000-0002-0000-000X", "sandbox.orcid.org"),
        person: Person {
            name: Name {
                given_names: Some(Value::new("Ada")),
                family_name: Some(Value::new("")),
                ..Name::default()
            },
            ..Person::default()
        },
        activities_summary: ActivitiesSummary::default(),
    }
}

fn stamp(date: &str) -> Option<Value> {
    Some(Value::new(date))
}

fn client_source() -> Option<Source> {
    Some(Source {
        source_orcid: Some(OrcidIdentifier::new(SAMPLE_ID, "orcid.org")),
        source_name: Some(Value::new("Sofia Garcia")),
    })
}

/// Every person section populated, including the optional provenance fields.
pub(crate) fn full_person() -> Person {
    const CREATED: &str = "2023-01-10T09:30:00.000Z";
    const MODIFIED: &str = "2024-02-20T16:45:12.345Z";
    Person {
        path: Some(format!("/{SAMPLE_ID}/person")),
        last_modified_date: stamp(MODIFIED),
        name: Name {
            visibility: Some(Visibility::Public),
            created_date: stamp(CREATED),
            last_modified_date: stamp(MODIFIED),
            given_names: Some(Value::new("Sofia")),
            family_name: Some(Value::new("Garcia")),
            credit_name: Some(Value::new("S. Garcia")),
        },
        other_names: Some(OtherNames {
            last_modified_date: stamp(MODIFIED),
            other_name: vec![OtherName {
                put_code: Some(PutCode::new(5501)),
                visibility: Some(Visibility::Public),
                created_date: stamp(CREATED),
                last_modified_date: stamp(MODIFIED),
                source: client_source(),
                content: "Sofía García Ruiz".into(),
            }],
        }),
        biography: Some(Biography {
            visibility: Some(Visibility::Public),
            created_date: stamp(CREATED),
            last_modified_date: stamp(MODIFIED),
            content: "Researcher in computational linguistics & NLP.".into(),
        }),
        researcher_urls: Some(ResearcherUrls {
            last_modified_date: stamp(MODIFIED),
            researcher_url: vec![ResearcherUrl {
                put_code: Some(PutCode::new(4411)),
                visibility: Some(Visibility::Public),
                created_date: stamp(CREATED),
                last_modified_date: stamp(MODIFIED),
                source: client_source(),
                url_name: "Personal Website".into(),
                url: Value::new("https://sofia.garcia.mock"),
            }],
        }),
        emails: Some(Emails {
            email: vec![Email {
                email: "sofia.garcia@mock.edu".into(),
                verified: true,
                primary: true,
                visibility: Visibility::Public,
                created_date: stamp(CREATED),
                last_modified_date: stamp(MODIFIED),
                source: client_source(),
            }],
        }),
        addresses: Some(Addresses {
            address: vec![Address {
                put_code: Some(PutCode::new(6601)),
                visibility: Some(Visibility::Public),
                created_date: stamp(CREATED),
                last_modified_date: stamp(MODIFIED),
                source: client_source(),
                country: "ES".into(),
            }],
        }),
        keywords: Some(Keywords {
            keyword: vec![
                Keyword {
                    put_code: Some(PutCode::new(7701)),
                    visibility: Some(Visibility::Public),
                    content: "computational linguistics".into(),
                    ..Keyword::default()
                },
                Keyword {
                    put_code: Some(PutCode::new(7702)),
                    visibility: Some(Visibility::Limited),
                    source: client_source(),
                    content: "NLP".into(),
                    ..Keyword::default()
                },
            ],
        }),
        external_identifiers: Some(ExternalIdentifiers {
            external_identifier: vec![ExternalIdentifier {
                put_code: Some(PutCode::new(8801)),
                visibility: Some(Visibility::Public),
                created_date: stamp(CREATED),
                last_modified_date: stamp(MODIFIED),
                source: client_source(),
                external_id_type: "Scopus Author ID".into(),
                external_id_value: "57190000000".into(),
                external_id_url: Some(Value::new(
                    "https://www.scopus.com/authid/detail.uri?authorId=57190000000",
                )),
            }],
        }),
    }
}
