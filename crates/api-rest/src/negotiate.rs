//! Content negotiation for registry responses.
//!
//! Registry paths (`/v3.0/...`) answer in XML unless the client asks for JSON; everything else
//! answers in JSON.

use axum::extract::FromRequestParts;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moat_core::constants::REGISTRY_PATH_PREFIX;
use orcid::Document;
use serde::Serialize;
use std::convert::Infallible;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    /// Decide the response format from the request path and `Accept` value.
    ///
    /// A missing `Accept` header is treated like one that does not mention JSON.
    pub fn negotiate(path: &str, accept: Option<&str>) -> Self {
        if !path.starts_with(REGISTRY_PATH_PREFIX) {
            return Format::Json;
        }
        if accept.is_some_and(|accept| accept.contains("application/json")) {
            Format::Json
        } else {
            Format::Xml
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Format::Json => JSON_CONTENT_TYPE,
            Format::Xml => XML_CONTENT_TYPE,
        }
    }
}

/// Extractor carrying the negotiated [`Format`] of the current request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Negotiator(pub Format);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Negotiator
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let values: Vec<&str> = parts
            .headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        let accept = (!values.is_empty()).then(|| values.join(", "));
        Ok(Self(Format::negotiate(parts.uri.path(), accept.as_deref())))
    }
}

impl Negotiator {
    pub fn format(self) -> Format {
        self.0
    }

    pub fn render<D: Document>(self, status: StatusCode, doc: &D) -> Response {
        render(self.0, status, doc)
    }
}

/// Encode `doc` in `format` and wrap it in a response.
///
/// An encoding failure is logged and produces an empty body with the original status.
pub fn render<D: Document>(format: Format, status: StatusCode, doc: &D) -> Response {
    let encoded = match format {
        Format::Json => orcid::json::to_vec(doc),
        Format::Xml => orcid::xml::to_document(doc).map(String::into_bytes),
    };
    let body = encoded.unwrap_or_else(|e| {
        tracing::error!(error = %e, ?format, "failed to encode response body");
        Vec::new()
    });
    (status, [(CONTENT_TYPE, format.content_type())], body).into_response()
}

/// JSON response for plain serde values, such as the token payload.
pub fn render_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    let body = serde_json::to_vec(value).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to encode JSON response body");
        Vec::new()
    });
    (status, [(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
}
