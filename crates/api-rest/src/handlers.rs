//! HTTP handlers for the OAuth and registry endpoints.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use moat_core::activity::{self, ActivityKind};
use moat_core::token::{authorize_redirect, AuthorizeParams};
use moat_core::{MoatError, TokenRequest, TokenResponse};
use serde::Deserialize;

use crate::negotiate::{render_json, Negotiator};
use crate::{ApiError, AppState};

type ApiResult = Result<Response, ApiError>;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

fn with_location(mut response: Response, location: String) -> ApiResult {
    let value = HeaderValue::try_from(location)
        .map_err(|e| MoatError::InvalidInput(format!("location header: {e}")))?;
    response.headers_mut().insert(LOCATION, value);
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/oauth/token",
    request_body(content = String, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Fixed access token", body = TokenResponse),
        (status = 400, description = "Body is not form data")
    )
)]
/// Issue the mock access token.
///
/// The form body is parsed and logged but otherwise ignored; the response always names the
/// same authenticated researcher and is always JSON.
#[axum::debug_handler]
pub async fn issue_token(body: Bytes) -> ApiResult {
    let request = TokenRequest::parse(&body)?;
    tracing::debug!(
        grant_type = request.grant_type(),
        client_id = request.client_id(),
        fields = request.fields.len(),
        "token requested"
    );
    Ok(render_json(StatusCode::OK, &TokenResponse::fixed()))
}

#[utoipa::path(
    get,
    path = "/oauth/authorize",
    params(
        ("redirect_uri" = String, Query, description = "Where to send the authorization code"),
        ("state" = Option<String>, Query, description = "Opaque value echoed back to the client")
    ),
    responses(
        (status = 302, description = "Redirect carrying the authorization code"),
        (status = 400, description = "Missing redirect_uri")
    )
)]
#[axum::debug_handler]
pub async fn authorize(Query(params): Query<AuthorizeParams>) -> ApiResult {
    let target = authorize_redirect(params.redirect_uri.as_deref(), params.state.as_deref())?;
    with_location(StatusCode::FOUND.into_response(), target)
}

#[utoipa::path(
    get,
    path = "/v3.0/{id}/record",
    params(("id" = String, Path, description = "ORCID iD")),
    responses(
        (status = 200, description = "Full record, XML unless JSON is requested"),
        (status = 404, description = "Record not found")
    )
)]
#[axum::debug_handler]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    negotiator: Negotiator,
) -> ApiResult {
    let record = state.store.require_record(&id)?;
    Ok(negotiator.render(StatusCode::OK, &record))
}

#[utoipa::path(
    get,
    path = "/v3.0/{id}/person",
    params(("id" = String, Path, description = "ORCID iD")),
    responses(
        (status = 200, description = "Person section, XML unless JSON is requested"),
        (status = 404, description = "Person not found")
    )
)]
#[axum::debug_handler]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    negotiator: Negotiator,
) -> ApiResult {
    let person = state.store.require_person(&id)?;
    Ok(negotiator.render(StatusCode::OK, &person))
}

fn read_activity(negotiator: Negotiator, kind: ActivityKind, raw_put_code: &str) -> ApiResult {
    let put_code = activity::put_code_from_segment(raw_put_code);
    Ok(match kind {
        ActivityKind::Work => {
            negotiator.render(StatusCode::OK, &activity::generic_work(put_code))
        }
        ActivityKind::Employment => {
            negotiator.render(StatusCode::OK, &activity::generic_employment(put_code))
        }
    })
}

fn create_activity(state: &AppState, negotiator: Negotiator, id: &str, kind: ActivityKind) -> ApiResult {
    let put_code = state.put_codes.next_put_code();
    tracing::debug!(orcid = id, %kind, %put_code, "activity created");
    let location = activity::location(&state.cfg, id, kind, put_code);
    with_location(
        negotiator.render(StatusCode::CREATED, &activity::created_echo(put_code)),
        location,
    )
}

fn update_activity(
    state: &AppState,
    negotiator: Negotiator,
    id: &str,
    kind: ActivityKind,
    raw_put_code: &str,
) -> ApiResult {
    let put_code = activity::put_code_from_segment(raw_put_code);
    tracing::debug!(orcid = id, %kind, %put_code, "activity updated");
    let location = activity::location(&state.cfg, id, kind, put_code);
    with_location(
        negotiator.render(StatusCode::OK, &activity::updated_echo(put_code)),
        location,
    )
}

#[utoipa::path(
    get,
    path = "/v3.0/{id}/work/{put_code}",
    params(
        ("id" = String, Path, description = "ORCID iD"),
        ("put_code" = String, Path, description = "Work put-code; non-integers read as 0")
    ),
    responses((status = 200, description = "Generic work echoing the put-code"))
)]
#[axum::debug_handler]
pub async fn get_work(
    Path((_id, put_code)): Path<(String, String)>,
    negotiator: Negotiator,
) -> ApiResult {
    read_activity(negotiator, ActivityKind::Work, &put_code)
}

#[utoipa::path(
    post,
    path = "/v3.0/{id}/work",
    params(("id" = String, Path, description = "ORCID iD")),
    responses((status = 201, description = "Work created; Location names the new put-code"))
)]
/// Accept a new work. The body is not inspected.
#[axum::debug_handler]
pub async fn create_work(
    State(state): State<AppState>,
    Path(id): Path<String>,
    negotiator: Negotiator,
) -> ApiResult {
    create_activity(&state, negotiator, &id, ActivityKind::Work)
}

#[utoipa::path(
    put,
    path = "/v3.0/{id}/work/{put_code}",
    params(
        ("id" = String, Path, description = "ORCID iD"),
        ("put_code" = String, Path, description = "Work put-code; non-integers read as 0")
    ),
    responses((status = 200, description = "Work updated"))
)]
#[axum::debug_handler]
pub async fn update_work(
    State(state): State<AppState>,
    Path((id, put_code)): Path<(String, String)>,
    negotiator: Negotiator,
) -> ApiResult {
    update_activity(&state, negotiator, &id, ActivityKind::Work, &put_code)
}

#[utoipa::path(
    get,
    path = "/v3.0/{id}/employment/{put_code}",
    params(
        ("id" = String, Path, description = "ORCID iD"),
        ("put_code" = String, Path, description = "Employment put-code; non-integers read as 0")
    ),
    responses((status = 200, description = "Generic employment echoing the put-code"))
)]
#[axum::debug_handler]
pub async fn get_employment(
    Path((_id, put_code)): Path<(String, String)>,
    negotiator: Negotiator,
) -> ApiResult {
    read_activity(negotiator, ActivityKind::Employment, &put_code)
}

#[utoipa::path(
    post,
    path = "/v3.0/{id}/employment",
    params(("id" = String, Path, description = "ORCID iD")),
    responses((status = 201, description = "Employment created; Location names the new put-code"))
)]
#[axum::debug_handler]
pub async fn create_employment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    negotiator: Negotiator,
) -> ApiResult {
    create_activity(&state, negotiator, &id, ActivityKind::Employment)
}

#[utoipa::path(
    put,
    path = "/v3.0/{id}/employment/{put_code}",
    params(
        ("id" = String, Path, description = "ORCID iD"),
        ("put_code" = String, Path, description = "Employment put-code; non-integers read as 0")
    ),
    responses((status = 200, description = "Employment updated"))
)]
#[axum::debug_handler]
pub async fn update_employment(
    State(state): State<AppState>,
    Path((id, put_code)): Path<(String, String)>,
    negotiator: Negotiator,
) -> ApiResult {
    update_activity(&state, negotiator, &id, ActivityKind::Employment, &put_code)
}

#[utoipa::path(
    get,
    path = "/v3.0/search",
    params(("q" = Option<String>, Query, description = "Search query")),
    responses(
        (status = 200, description = "Search results"),
        (status = 500, description = "Search failed")
    )
)]
#[axum::debug_handler]
pub async fn search(Query(params): Query<SearchParams>, negotiator: Negotiator) -> ApiResult {
    let results = moat_core::search::search(params.q.as_deref())?;
    Ok(negotiator.render(StatusCode::OK, &results))
}
