//! Semantic XML equality.
//!
//! Two documents are equal when their token streams match after:
//! - resolving element and attribute names to `(namespace URI, local name)`
//! - dropping namespace declarations and sorting the remaining attributes
//! - trimming surrounding whitespace from text and dropping text that is then empty
//! - dropping comments, processing instructions and the declaration
//!
//! This comparison is independent of the ORCID namespace table, so it also works on documents
//! the codec would reject.

use crate::{OrcidError, OrcidResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Start {
        name: (String, String),
        attributes: Vec<((String, String), String)>,
    },
    Text(String),
    End,
}

fn resolved_uri(result: &ResolveResult) -> String {
    match result {
        ResolveResult::Bound(ns) => String::from_utf8_lossy(ns.0).into_owned(),
        ResolveResult::Unbound => String::new(),
        ResolveResult::Unknown(prefix) => format!("undeclared:{}", String::from_utf8_lossy(prefix)),
    }
}

fn start_token<R>(reader: &NsReader<R>, uri: String, start: &BytesStart<'_>) -> OrcidResult<Token> {
    let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| OrcidError::Xml(e.to_string()))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (ns, attr_local) = reader.resolve_attribute(attr.key);
        let value = attr
            .unescape_value()
            .map_err(|e| OrcidError::Xml(e.to_string()))?;
        attributes.push((
            (
                resolved_uri(&ns),
                String::from_utf8_lossy(attr_local.as_ref()).into_owned(),
            ),
            value.into_owned(),
        ));
    }
    attributes.sort();
    Ok(Token::Start {
        name: (uri, local),
        attributes,
    })
}

fn tokenize(input: &str) -> OrcidResult<Vec<Token>> {
    let mut reader = NsReader::from_reader(input.as_bytes());
    let mut buf = Vec::new();
    let mut tokens = Vec::new();
    let mut pending = String::new();
    let mut depth = 0usize;

    fn flush(pending: &mut String, tokens: &mut Vec<Token>) {
        let text = pending.trim();
        if !text.is_empty() {
            tokens.push(Token::Text(text.to_owned()));
        }
        pending.clear();
    }

    loop {
        let (uri, event) = match reader.read_resolved_event_into(&mut buf) {
            Ok((result, event)) => (resolved_uri(&result), event),
            Err(quick_xml::Error::Syntax(e)) => return Err(OrcidError::Truncated(e.to_string())),
            Err(e) => return Err(OrcidError::Xml(e.to_string())),
        };
        match event {
            Event::Start(start) => {
                flush(&mut pending, &mut tokens);
                tokens.push(start_token(&reader, uri, &start)?);
                depth += 1;
            }
            Event::Empty(start) => {
                flush(&mut pending, &mut tokens);
                tokens.push(start_token(&reader, uri, &start)?);
                tokens.push(Token::End);
            }
            Event::End(_) => {
                flush(&mut pending, &mut tokens);
                tokens.push(Token::End);
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| OrcidError::Xml(e.to_string()))?;
                pending.push_str(&text);
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data).map_err(|e| OrcidError::Xml(e.to_string()))?;
                pending.push_str(text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    if depth > 0 {
        return Err(OrcidError::Truncated(format!("{depth} element(s) never closed")));
    }
    flush(&mut pending, &mut tokens);
    Ok(tokens)
}

fn describe(token: Option<&Token>) -> String {
    match token {
        None => "end of document".into(),
        Some(Token::Start { name, attributes }) => {
            let attrs: Vec<String> = attributes
                .iter()
                .map(|((ns, local), value)| {
                    if ns.is_empty() {
                        format!("{local}=\"{value}\"")
                    } else {
                        format!("{{{ns}}}{local}=\"{value}\"")
                    }
                })
                .collect();
            format!("<{{{}}}{} {}>", name.0, name.1, attrs.join(" "))
        }
        Some(Token::Text(text)) => format!("text {text:?}"),
        Some(Token::End) => "end tag".into(),
    }
}

/// First semantic difference between two documents, or `None` when they are equal.
///
/// # Errors
///
/// Returns a decode error if either input is not well-formed XML.
pub fn semantic_diff(left: &str, right: &str) -> OrcidResult<Option<String>> {
    let left = tokenize(left)?;
    let right = tokenize(right)?;
    let len = left.len().max(right.len());
    for index in 0..len {
        let (a, b) = (left.get(index), right.get(index));
        if a != b {
            return Ok(Some(format!(
                "token {index}: {} != {}",
                describe(a),
                describe(b)
            )));
        }
    }
    Ok(None)
}

pub fn semantically_equal(left: &str, right: &str) -> OrcidResult<bool> {
    Ok(semantic_diff(left, right)?.is_none())
}
