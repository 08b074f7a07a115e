use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moat_core::MoatError;

/// Handler error, rendered as a plain-text body regardless of negotiation.
#[derive(Debug)]
pub struct ApiError(pub MoatError);

impl From<MoatError> for ApiError {
    fn from(err: MoatError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            MoatError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            MoatError::NotFound { .. } => StatusCode::NOT_FOUND,
            MoatError::SimulatedUpstream(_) | MoatError::LockPoisoned | MoatError::Orcid(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            MoatError::InvalidInput(msg) => msg.clone(),
            MoatError::NotFound { kind, .. } => format!("{kind} not found"),
            MoatError::SimulatedUpstream(msg) => msg.clone(),
            MoatError::LockPoisoned | MoatError::Orcid(_) => "Internal error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }
        (
            status,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_status_codes() {
        let cases = [
            (MoatError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (
                MoatError::NotFound {
                    kind: "Record",
                    id: "x".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                MoatError::SimulatedUpstream("Search failed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (MoatError::LockPoisoned, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }

    #[test]
    fn not_found_body_names_the_kind_only() {
        let err = ApiError(MoatError::NotFound {
            kind: "Person",
            id: "0000-0000-0000-0000".into(),
        });
        assert_eq!(err.message(), "Person not found");
    }
}
