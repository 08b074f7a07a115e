//! Demo population served by the mock.
//!
//! Six researchers, each with a biography, one verified primary email, one researcher URL,
//! one work summary and one employment summary.

use crate::constants::{REGISTRY_HOST, SEEDED_EMPLOYMENT_PUT_CODE, SEEDED_WORK_PUT_CODE};
use orcid::{
    ActivitiesSummary, AffiliationGroup, Biography, Email, Emails, EmploymentSummary,
    Employments, LastModifiedDate, Name, OrcidIdentifier, Organization, Person, Record,
    ResearcherUrl, ResearcherUrls, Title, Value, Visibility, WorkGroup, WorkSummary, Works,
};
use orcid_types::PutCode;

/// One entry of the demo population.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoPerson {
    pub orcid: &'static str,
    pub given: &'static str,
    pub family: &'static str,
    pub bio: &'static str,
}

pub const DEMO_PEOPLE: [DemoPerson; 6] = [
    DemoPerson {
        orcid: "0000-0001-2345-6789",
        given: "Sofia",
        family: "Garcia",
        bio: "Sofia Garcia is a researcher in the field of Computer Science.",
    },
    DemoPerson {
        orcid: "0000-0002-1001-2002",
        given: "John",
        family: "Smith",
        bio: "John Smith studies Physics.",
    },
    DemoPerson {
        orcid: "0000-0003-3003-4004",
        given: "Wei",
        family: "Chen",
        bio: "Wei Chen is a Biologist.",
    },
    DemoPerson {
        orcid: "0000-0004-5005-6006",
        given: "Priya",
        family: "Patel",
        bio: "Priya Patel works in Chemistry.",
    },
    DemoPerson {
        orcid: "0000-0005-7007-8008",
        given: "Ahmed",
        family: "Al-Fayed",
        bio: "Ahmed Al-Fayed is a Mathematician.",
    },
    DemoPerson {
        orcid: "0000-0006-9009-0000",
        given: "Elena",
        family: "Popov",
        bio: "Elena Popov researches History.",
    },
];

impl DemoPerson {
    /// `"<initial>. <family>"`.
    pub fn credit_name(&self) -> String {
        let initial: String = self.given.chars().take(1).collect();
        format!("{initial}. {}", self.family)
    }

    fn slug(&self) -> String {
        format!(
            "{}.{}",
            self.given.to_lowercase(),
            self.family.to_lowercase()
        )
    }

    pub fn email(&self) -> String {
        format!("{}@mock.edu", self.slug())
    }

    pub fn website(&self) -> String {
        format!("https://{}.mock", self.slug())
    }

    /// Build the full record; `last_modified_ms` stamps the work summary.
    pub fn record(&self, last_modified_ms: i64) -> Record {
        Record {
            orcid_identifier: OrcidIdentifier::new(self.orcid, REGISTRY_HOST),
            person: Person {
                name: Name {
                    visibility: None,
                    given_names: Some(Value::new(self.given)),
                    family_name: Some(Value::new(self.family)),
                    credit_name: Some(Value::new(self.credit_name())),
                    ..Name::default()
                },
                biography: Some(Biography {
                    visibility: None,
                    content: self.bio.to_owned(),
                    ..Biography::default()
                }),
                researcher_urls: Some(ResearcherUrls {
                    researcher_url: vec![ResearcherUrl {
                        put_code: None,
                        visibility: None,
                        url_name: "Personal Website".to_owned(),
                        url: Value::new(self.website()),
                        ..ResearcherUrl::default()
                    }],
                    ..ResearcherUrls::default()
                }),
                emails: Some(Emails {
                    email: vec![Email {
                        email: self.email(),
                        verified: true,
                        primary: true,
                        visibility: Visibility::Public,
                        created_date: None,
                        last_modified_date: None,
                        source: None,
                    }],
                }),
                ..Person::default()
            },
            activities_summary: ActivitiesSummary {
                works: Works {
                    group: vec![WorkGroup {
                        work_summary: vec![WorkSummary {
                            put_code: PutCode::new(SEEDED_WORK_PUT_CODE),
                            visibility: None,
                            title: Title::new("Mock Paper Title"),
                            work_type: "journal-article".to_owned(),
                            last_modified_date: LastModifiedDate {
                                value: last_modified_ms,
                            },
                        }],
                    }],
                },
                employments: Employments {
                    affiliation_group: vec![AffiliationGroup {
                        employment_summary: vec![EmploymentSummary {
                            put_code: PutCode::new(SEEDED_EMPLOYMENT_PUT_CODE),
                            visibility: None,
                            department_name: Some("Mock Department".to_owned()),
                            role_title: Some("Mock Researcher".to_owned()),
                            organization: Organization {
                                name: "Mock University".to_owned(),
                            },
                        }],
                    }],
                },
            },
        }
    }
}

/// Records for the whole demo population, stamped with the current time.
pub fn demo_records() -> Vec<Record> {
    let now = chrono::Utc::now().timestamp_millis();
    DEMO_PEOPLE.iter().map(|p| p.record(now)).collect()
}

/// Look up a demo person by identifier.
pub fn demo_person(orcid: &str) -> Option<&'static DemoPerson> {
    DEMO_PEOPLE.iter().find(|p| p.orcid == orcid)
}
