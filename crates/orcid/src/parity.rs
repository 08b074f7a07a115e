//! Cross-format checks: both codecs must carry the same scalar content, and decoding
//! hand-written XML must agree with what the encoder produces.

use crate::fixtures::{full_person, sample_record, SAMPLE_ID};
use crate::model::*;
use crate::{json, xml, OrcidError};
use serde_json::Value as Json;

/// Non-empty scalar leaves of a JSON value, stringified and sorted.
fn json_leaves(value: &Json) -> Vec<String> {
    fn walk(value: &Json, out: &mut Vec<String>) {
        match value {
            Json::Object(map) => map.values().for_each(|v| walk(v, out)),
            Json::Array(items) => items.iter().for_each(|v| walk(v, out)),
            Json::String(s) => out.push(s.clone()),
            Json::Number(n) => out.push(n.to_string()),
            Json::Bool(b) => out.push(b.to_string()),
            Json::Null => {}
        }
    }
    let mut out = Vec::new();
    walk(value, &mut out);
    out.retain(|s| !s.is_empty());
    out.sort();
    out
}

/// Non-empty attribute values and leaf texts of an XML document, sorted.
fn xml_leaves(document: &str) -> Vec<String> {
    let tree = xml::parse(document).expect("parse");
    let mut out = Vec::new();
    tree.walk(&mut |element| {
        out.extend(element.attributes.iter().map(|a| a.value.clone()));
        if element.children.is_empty() {
            out.push(element.text.clone());
        }
    });
    out.retain(|s| !s.is_empty());
    out.sort();
    out
}

#[test]
fn record_scalars_match_across_formats() {
    let record = sample_record();
    let from_json = json_leaves(&json::to_value(&record).expect("json"));
    let from_xml = xml_leaves(&xml::to_string(&record).expect("xml"));
    assert_eq!(from_json, from_xml);
}

#[test]
fn person_scalars_match_across_formats() {
    let person = sample_record().person;
    let from_json = json_leaves(&json::to_value(&person).expect("json"));
    let from_xml = xml_leaves(&xml::to_string(&person).expect("xml"));
    assert_eq!(from_json, from_xml);
}

#[test]
fn full_person_scalars_match_across_formats() {
    let person = full_person();
    let from_json = json_leaves(&json::to_value(&person).expect("json"));
    let from_xml = xml_leaves(&xml::to_string(&person).expect("xml"));
    assert_eq!(from_json, from_xml);
}

#[test]
fn json_and_xml_decode_to_the_same_model() {
    let record = sample_record();
    let via_json: Record = json::from_slice(&json::to_vec(&record).expect("json")).expect("json");
    let via_xml: Record = xml::from_str(&xml::to_string(&record).expect("xml")).expect("xml");
    assert_eq!(via_json, via_xml);
}

/// Person document with unusual prefixes, a default namespace, shuffled children and
/// attributes, comments and extra whitespace.
const HAND_WRITTEN_PERSON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported by a client -->
<person xmlns="http://www.orcid.org/ns/person"
   xmlns:pd="http://www.orcid.org/ns/personal-details"
   xmlns:mail="http://www.orcid.org/ns/email"
   xmlns:ru="http://www.orcid.org/ns/researcher-url"
   xmlns:q="http://www.orcid.org/ns/person">
  <mail:emails>
    <mail:email primary="true" verified="true" visibility="public">
      <mail:email>sofia.garcia@mock.edu</mail:email>
    </mail:email>
    <mail:email primary="false" visibility="limited" verified="false">
      <mail:email>s.garcia@alt.mock.edu</mail:email>
    </mail:email>
  </mail:emails>
  <q:biography visibility="public"><pd:content>Researcher in computational linguistics &amp; NLP.</pd:content></q:biography>
  <ru:researcher-urls>
    <ru:researcher-url visibility="public" put-code="4411">
      <ru:url>https://sofia.garcia.mock</ru:url>
      <ru:url-name>Personal Website</ru:url-name>
    </ru:researcher-url>
  </ru:researcher-urls>
  <name visibility="public">
    <!-- name parts -->
    <pd:credit-name>S. Garcia</pd:credit-name>
    <pd:family-name>Garcia</pd:family-name>
    <pd:given-names>Sofia</pd:given-names>
  </name>
</person>"#;

#[test]
fn hand_written_person_decodes_to_sample() {
    let decoded: Person = xml::from_str(HAND_WRITTEN_PERSON).expect("decode");
    assert_eq!(decoded, sample_record().person);
}

#[test]
fn re_encoding_a_hand_written_document_is_semantically_stable() {
    let decoded: Person = xml::from_str(HAND_WRITTEN_PERSON).expect("decode");
    let canonical = xml::to_string(&sample_record().person).expect("encode");
    let re_encoded = xml::to_string(&decoded).expect("encode");
    assert!(xml::semantically_equal(&canonical, &re_encoded).expect("compare"));
}

/// Person document using the full upstream vocabulary: provenance dates, sources, other
/// names, addresses, keywords and external identifiers.
const UPSTREAM_PERSON: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<person:person path="/0000-0001-2345-6789/person"
    xmlns:common="http://www.orcid.org/ns/common"
    xmlns:person="http://www.orcid.org/ns/person"
    xmlns:personal-details="http://www.orcid.org/ns/personal-details"
    xmlns:other-name="http://www.orcid.org/ns/other-name"
    xmlns:researcher-url="http://www.orcid.org/ns/researcher-url"
    xmlns:email="http://www.orcid.org/ns/email"
    xmlns:address="http://www.orcid.org/ns/address"
    xmlns:keyword="http://www.orcid.org/ns/keyword"
    xmlns:external-identifier="http://www.orcid.org/ns/external-identifier"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://www.orcid.org/ns/person ../person-3.0.xsd">
    <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
    <person:name visibility="public">
        <common:created-date>2023-01-10T09:30:00.000Z</common:created-date>
        <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
        <personal-details:given-names>Sofia</personal-details:given-names>
        <personal-details:family-name>Garcia</personal-details:family-name>
        <personal-details:credit-name>S. Garcia</personal-details:credit-name>
    </person:name>
    <other-name:other-names>
        <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
        <other-name:other-name visibility="public" put-code="5501">
            <common:created-date>2023-01-10T09:30:00.000Z</common:created-date>
            <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
            <common:source>
                <common:source-orcid>
                    <common:uri>https://orcid.org/0000-0001-2345-6789</common:uri>
                    <common:path>0000-0001-2345-6789</common:path>
                    <common:host>orcid.org</common:host>
                </common:source-orcid>
                <common:source-name>Sofia Garcia</common:source-name>
            </common:source>
            <other-name:content>Sofía García Ruiz</other-name:content>
        </other-name:other-name>
    </other-name:other-names>
    <person:biography visibility="public">
        <common:created-date>2023-01-10T09:30:00.000Z</common:created-date>
        <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
        <personal-details:content>Researcher in computational linguistics &amp; NLP.</personal-details:content>
    </person:biography>
    <researcher-url:researcher-urls>
        <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
        <researcher-url:researcher-url put-code="4411" visibility="public">
            <common:created-date>2023-01-10T09:30:00.000Z</common:created-date>
            <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
            <common:source>
                <common:source-orcid>
                    <common:uri>https://orcid.org/0000-0001-2345-6789</common:uri>
                    <common:path>0000-0001-2345-6789</common:path>
                    <common:host>orcid.org</common:host>
                </common:source-orcid>
                <common:source-name>Sofia Garcia</common:source-name>
            </common:source>
            <researcher-url:url-name>Personal Website</researcher-url:url-name>
            <researcher-url:url>https://sofia.garcia.mock</researcher-url:url>
        </researcher-url:researcher-url>
    </researcher-url:researcher-urls>
    <email:emails>
        <email:email visibility="public" verified="true" primary="true">
            <common:created-date>2023-01-10T09:30:00.000Z</common:created-date>
            <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
            <common:source>
                <common:source-orcid>
                    <common:uri>https://orcid.org/0000-0001-2345-6789</common:uri>
                    <common:path>0000-0001-2345-6789</common:path>
                    <common:host>orcid.org</common:host>
                </common:source-orcid>
                <common:source-name>Sofia Garcia</common:source-name>
            </common:source>
            <email:email>sofia.garcia@mock.edu</email:email>
        </email:email>
    </email:emails>
    <address:addresses>
        <address:address visibility="public" put-code="6601">
            <common:created-date>2023-01-10T09:30:00.000Z</common:created-date>
            <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
            <common:source>
                <common:source-orcid>
                    <common:uri>https://orcid.org/0000-0001-2345-6789</common:uri>
                    <common:path>0000-0001-2345-6789</common:path>
                    <common:host>orcid.org</common:host>
                </common:source-orcid>
                <common:source-name>Sofia Garcia</common:source-name>
            </common:source>
            <address:country>ES</address:country>
        </address:address>
    </address:addresses>
    <keyword:keywords>
        <keyword:keyword visibility="public" put-code="7701">
            <keyword:content>computational linguistics</keyword:content>
        </keyword:keyword>
        <keyword:keyword visibility="limited" put-code="7702">
            <common:source>
                <common:source-orcid>
                    <common:uri>https://orcid.org/0000-0001-2345-6789</common:uri>
                    <common:path>0000-0001-2345-6789</common:path>
                    <common:host>orcid.org</common:host>
                </common:source-orcid>
                <common:source-name>Sofia Garcia</common:source-name>
            </common:source>
            <keyword:content>NLP</keyword:content>
        </keyword:keyword>
    </keyword:keywords>
    <external-identifier:external-identifiers>
        <external-identifier:external-identifier visibility="public" put-code="8801">
            <common:created-date>2023-01-10T09:30:00.000Z</common:created-date>
            <common:last-modified-date>2024-02-20T16:45:12.345Z</common:last-modified-date>
            <common:source>
                <common:source-orcid>
                    <common:uri>https://orcid.org/0000-0001-2345-6789</common:uri>
                    <common:path>0000-0001-2345-6789</common:path>
                    <common:host>orcid.org</common:host>
                </common:source-orcid>
                <common:source-name>Sofia Garcia</common:source-name>
            </common:source>
            <common:external-id-type>Scopus Author ID</common:external-id-type>
            <common:external-id-value>57190000000</common:external-id-value>
            <common:external-id-url>https://www.scopus.com/authid/detail.uri?authorId=57190000000</common:external-id-url>
        </external-identifier:external-identifier>
    </external-identifier:external-identifiers>
</person:person>
"#;

#[test]
fn upstream_person_document_decodes_every_section() {
    let decoded: Person = xml::from_str(UPSTREAM_PERSON).expect("decode");
    assert_eq!(decoded, full_person());
}

#[test]
fn upstream_person_document_round_trips_semantically() {
    let decoded: Person = xml::from_str(UPSTREAM_PERSON).expect("decode");
    let re_encoded = xml::to_string(&decoded).expect("encode");
    if let Some(diff) = xml::semantic_diff(UPSTREAM_PERSON, &re_encoded).expect("compare") {
        panic!("re-encoded person differs at {diff}\n{re_encoded}");
    }
    let root = xml::parse(UPSTREAM_PERSON).expect("parse");
    assert!(xml::schema::check_sequence(&root).is_ok());
}

#[test]
fn full_person_round_trips_through_json() {
    let person = full_person();
    let value = json::to_value(&person).expect("encode");
    assert_eq!(value["path"], "/0000-0001-2345-6789/person");
    assert_eq!(value["addresses"]["address"][0]["country"]["value"], "ES");
    assert_eq!(
        value["other-names"]["other-name"][0]["source"]["source-name"]["value"],
        "Sofia Garcia"
    );
    assert_eq!(
        value["external-identifiers"]["external-identifier"][0]["external-id-type"],
        "Scopus Author ID"
    );
    assert_eq!(value["name"]["created-date"]["value"], "2023-01-10T09:30:00.000Z");
    let decoded: Person = json::from_slice(&json::to_vec(&person).expect("encode")).expect("decode");
    assert_eq!(decoded, person);
}

#[test]
fn invalid_visibility_is_rejected() {
    let doc = xml::to_string(&sample_record().person)
        .expect("encode")
        .replace(r#"visibility="limited""#, r#"visibility="LIMITED""#);
    match xml::from_str::<Person>(&doc) {
        Err(OrcidError::InvalidValue { field, .. }) => assert_eq!(field, "email:email@visibility"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn invalid_boolean_is_rejected() {
    let doc = xml::to_string(&sample_record().person)
        .expect("encode")
        .replace(r#"verified="false""#, r#"verified="maybe""#);
    assert!(matches!(
        xml::from_str::<Person>(&doc),
        Err(OrcidError::InvalidValue { .. })
    ));
}

#[test]
fn missing_required_child_is_rejected() {
    let doc = xml::to_string(&sample_record())
        .expect("encode")
        .replace("<common:host>orcid.org</common:host>", "");
    match xml::from_str::<Record>(&doc) {
        Err(OrcidError::MissingElement { parent, child }) => {
            assert_eq!(parent, "common:orcid-identifier");
            assert_eq!(child, "common:host");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn missing_required_attribute_is_rejected() {
    let doc = xml::to_string(&sample_record())
        .expect("encode")
        .replace(r#" put-code="123456""#, "");
    assert!(matches!(
        xml::from_str::<Record>(&doc),
        Err(OrcidError::MissingAttribute { .. })
    ));
}

#[test]
fn non_numeric_timestamp_is_rejected() {
    let doc = xml::to_string(&sample_record())
        .expect("encode")
        .replace("1700000000000", "yesterday");
    assert!(matches!(
        xml::from_str::<Record>(&doc),
        Err(OrcidError::InvalidValue { .. })
    ));
}

#[test]
fn identifier_path_is_echoed_verbatim() {
    let xml = xml::to_string(&sample_record()).expect("encode");
    assert!(xml.contains(&format!("<common:path>{SAMPLE_ID}</common:path>")));
    assert!(xml.contains(&format!("<common:uri>https://orcid.org/{SAMPLE_ID}</common:uri>")));
}
