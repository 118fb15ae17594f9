//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hapgate_domain::error::HubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HubError`] and request-body rejections to an HTTP response with
/// appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    Hub(HubError),
    /// The body is not JSON, lacks the JSON content type, or doesn't match
    /// the request shape.
    Body(JsonRejection),
}

impl From<HubError> for ApiError {
    fn from(err: HubError) -> Self {
        Self::Hub(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Hub(err) => err,
            Self::Body(rejection) => {
                let message = rejection.body_text();
                tracing::debug!(error.kind = "invalid_body", error = %message, "rejected request");
                return (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response();
            }
        };

        let (status, message) = match &err {
            HubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HubError::NotFound(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HubError::Coercion(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HubError::AccessDenied(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HubError::Upstream(err) => {
                tracing::error!(error = %err, "accessory client error");
                (
                    StatusCode::BAD_GATEWAY,
                    "accessory client error".to_string(),
                )
            }
        };

        if err.is_caller_error() {
            tracing::debug!(error.kind = err.kind(), error = %message, "rejected request");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hapgate_domain::characteristic::CharacteristicFormat;
    use hapgate_domain::error::{AccessDeniedError, CoercionError, NotFoundError};

    #[test]
    fn should_map_caller_errors_to_bad_request() {
        let errors: Vec<HubError> = vec![
            NotFoundError::MissingField("value").into(),
            CoercionError::InvalidType {
                format: CharacteristicFormat::Bool,
                value: "1".to_string(),
            }
            .into(),
            AccessDeniedError.into(),
        ];

        for err in errors {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn should_map_upstream_errors_to_bad_gateway() {
        let response = ApiError::from(HubError::Upstream("offline".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
