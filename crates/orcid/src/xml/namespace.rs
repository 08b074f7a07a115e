//! Fixed namespace table for the ORCID XML vocabulary.
//!
//! Every element the codec emits or accepts lives in one of these namespaces. Prefixes are only
//! the canonical spelling used on output; decoding resolves by URI.

/// Namespace of the `xsi:schemaLocation` attribute carried by document roots.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Record,
    Person,
    PersonalDetails,
    Common,
    Email,
    ResearcherUrl,
    OtherName,
    Address,
    Keyword,
    ExternalIdentifier,
    Activities,
    Work,
    Employment,
    Search,
}

impl Namespace {
    /// Table order; root elements declare prefixes in this order.
    pub const ALL: [Namespace; 14] = [
        Namespace::Record,
        Namespace::Person,
        Namespace::PersonalDetails,
        Namespace::Common,
        Namespace::Email,
        Namespace::ResearcherUrl,
        Namespace::OtherName,
        Namespace::Address,
        Namespace::Keyword,
        Namespace::ExternalIdentifier,
        Namespace::Activities,
        Namespace::Work,
        Namespace::Employment,
        Namespace::Search,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Record => "record",
            Namespace::Person => "person",
            Namespace::PersonalDetails => "personal-details",
            Namespace::Common => "common",
            Namespace::Email => "email",
            Namespace::ResearcherUrl => "researcher-url",
            Namespace::OtherName => "other-name",
            Namespace::Address => "address",
            Namespace::Keyword => "keyword",
            Namespace::ExternalIdentifier => "external-identifier",
            Namespace::Activities => "activities",
            Namespace::Work => "work",
            Namespace::Employment => "employment",
            Namespace::Search => "search",
        }
    }

    pub fn uri(self) -> &'static str {
        match self {
            Namespace::Record => "http://www.orcid.org/ns/record",
            Namespace::Person => "http://www.orcid.org/ns/person",
            Namespace::PersonalDetails => "http://www.orcid.org/ns/personal-details",
            Namespace::Common => "http://www.orcid.org/ns/common",
            Namespace::Email => "http://www.orcid.org/ns/email",
            Namespace::ResearcherUrl => "http://www.orcid.org/ns/researcher-url",
            Namespace::OtherName => "http://www.orcid.org/ns/other-name",
            Namespace::Address => "http://www.orcid.org/ns/address",
            Namespace::Keyword => "http://www.orcid.org/ns/keyword",
            Namespace::ExternalIdentifier => "http://www.orcid.org/ns/external-identifier",
            Namespace::Activities => "http://www.orcid.org/ns/activities",
            Namespace::Work => "http://www.orcid.org/ns/work",
            Namespace::Employment => "http://www.orcid.org/ns/employment",
            Namespace::Search => "http://www.orcid.org/ns/search",
        }
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Namespace::ALL.into_iter().find(|ns| ns.uri() == uri)
    }
}
