//! OAuth token issuance and the authorization redirect.
//!
//! Both endpoints are canned: the token always authenticates the same identity and the
//! authorization step always grants the same code.

use crate::constants::{
    MOCK_ACCESS_TOKEN, MOCK_AUTHENTICATED_NAME, MOCK_AUTHENTICATED_ORCID, MOCK_AUTH_CODE,
    MOCK_EXPIRES_IN, MOCK_REFRESH_TOKEN, MOCK_SCOPE, MOCK_TOKEN_TYPE,
};
use crate::{MoatError, MoatResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful `/oauth/token` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    pub expires_in: u64,
    pub scope: String,
    pub name: String,
    pub orcid: String,
}

impl TokenResponse {
    pub fn fixed() -> Self {
        Self {
            access_token: MOCK_ACCESS_TOKEN.to_owned(),
            token_type: MOCK_TOKEN_TYPE.to_owned(),
            refresh_token: MOCK_REFRESH_TOKEN.to_owned(),
            expires_in: MOCK_EXPIRES_IN,
            scope: MOCK_SCOPE.to_owned(),
            name: MOCK_AUTHENTICATED_NAME.to_owned(),
            orcid: MOCK_AUTHENTICATED_ORCID.to_owned(),
        }
    }
}

/// Form fields submitted to `/oauth/token`, in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRequest {
    pub fields: Vec<(String, String)>,
}

impl TokenRequest {
    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns `MoatError::InvalidInput` if the body is not UTF-8, contains a `%` that does not
    /// start a two-digit hex escape, or is otherwise not form data.
    pub fn parse(body: &[u8]) -> MoatResult<Self> {
        std::str::from_utf8(body)
            .map_err(|e| MoatError::InvalidInput(format!("token request body: {e}")))?;
        check_percent_escapes(body)?;
        let fields: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| MoatError::InvalidInput(format!("token request body: {e}")))?;
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn grant_type(&self) -> Option<&str> {
        self.get("grant_type")
    }

    pub fn client_id(&self) -> Option<&str> {
        self.get("client_id")
    }
}

/// `serde_urlencoded` passes malformed escapes through literally; reject them instead.
fn check_percent_escapes(body: &[u8]) -> MoatResult<()> {
    let mut rest = body;
    let mut offset = 0;
    while let Some(pos) = rest.iter().position(|&b| b == b'%') {
        let escape = rest.get(pos + 1..pos + 3);
        if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(MoatError::InvalidInput(format!(
                "token request body: invalid percent-escape at byte {}",
                offset + pos
            )));
        }
        offset += pos + 3;
        rest = &rest[pos + 3..];
    }
    Ok(())
}

/// Query parameters of `/oauth/authorize`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthorizeParams {
    pub redirect_uri: Option<String>,
    pub state: Option<String>,
}

/// Build the redirect target for an authorization request.
///
/// The code (and the state, if non-empty) are appended to `redirect_uri`, using `&` when it
/// already has a query string.
///
/// # Errors
///
/// Returns `MoatError::InvalidInput` if `redirect_uri` is missing or blank.
pub fn authorize_redirect(redirect_uri: Option<&str>, state: Option<&str>) -> MoatResult<String> {
    let redirect_uri = redirect_uri
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .ok_or_else(|| MoatError::InvalidInput("redirect_uri is required".into()))?;

    let mut pairs = vec![("code", MOCK_AUTH_CODE)];
    if let Some(state) = state.filter(|s| !s.is_empty()) {
        pairs.push(("state", state));
    }
    let query = serde_urlencoded::to_string(&pairs)
        .map_err(|e| MoatError::InvalidInput(format!("authorize query: {e}")))?;

    let separator = if redirect_uri.contains('?') { '&' } else { '?' };
    Ok(format!("{redirect_uri}{separator}{query}"))
}
