//! ORCID v3.0 record model and wire codecs.
//!
//! This crate provides the **record model** served by the mock registry and two independent
//! codecs over it:
//! - [`json`]: kebab-case JSON via strict serde wire structs
//! - [`xml`]: namespaced XML with visibility/put-code attributes, a fixed namespace table and a
//!   per-element child-sequence table
//!
//! Both codecs translate between domain types ([`model`]) and their own wire shape; the model
//! itself carries no format annotations. The XML codec round-trips under semantic XML equality
//! (see [`xml::semantic_diff`]).

pub mod json;
pub mod model;
pub mod xml;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod parity;

pub use model::*;
pub use orcid_types::{PutCode, TypeError, Visibility};

/// A payload that can be rendered in either wire format.
pub trait Document: json::JsonDocument + xml::XmlDocument {}

impl<T: json::JsonDocument + xml::XmlDocument> Document for T {}

/// Errors returned by the `orcid` codec crate.
///
/// All variants except [`OrcidError::Encode`] are decode errors. Encoding a model value is
/// total; `Encode` exists so writer failures have somewhere to go.
#[derive(Debug, thiserror::Error)]
pub enum OrcidError {
    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("truncated XML document: {0}")]
    Truncated(String),

    #[error("element '{element}' is in unknown namespace '{namespace}'")]
    UnknownNamespace { element: String, namespace: String },

    #[error("expected root element '{expected}', found '{found}'")]
    UnexpectedRoot { expected: String, found: String },

    #[error("'{parent}' is missing required element '{child}'")]
    MissingElement { parent: String, child: String },

    #[error("'{element}' is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("JSON schema mismatch at {path}: {message}")]
    Json { path: String, message: String },

    #[error("encode error: {0}")]
    Encode(String),
}

/// Type alias for Results that can fail with an [`OrcidError`].
pub type OrcidResult<T> = Result<T, OrcidError>;
