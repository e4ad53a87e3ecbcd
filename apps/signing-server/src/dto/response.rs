use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;
use signing_core::provider::artifact_storage::ArtifactStorageError;
use signing_core::provider::signing_service::error::SigningServiceError;
use signing_core::service::error::{ErrorCode, ServiceError};
use utoipa::ToSchema;

use super::error::{Cause, ErrorResponseRestDTO};
use crate::router::AppState;

#[derive(Debug, utoipa::IntoResponses)]
pub(crate) enum ErrorResponse {
    #[response(status = 400, description = "Bad Request")]
    BadRequest(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 404, description = "Entity Not Found")]
    NotFound(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 500, description = "Internal error")]
    ServerError(#[to_schema] ErrorResponseRestDTO),
    #[response(status = 502, description = "Signing service failure")]
    BadGateway(#[to_schema] ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic(panic_msg: String) -> Self {
        Self::ServerError(ErrorResponseRestDTO {
            code: ErrorCode::BR_0000.into(),
            message: panic_msg,
            cause: Some(Cause {
                message: "Panic".to_string(),
            }),
        })
    }

    pub fn from_service_error(error: ServiceError, hide_cause: bool) -> Self {
        let response = ErrorResponseRestDTO::from(&error).hide_cause(hide_cause);
        match error {
            ServiceError::EntityNotFound(_) => Self::NotFound(response),
            ServiceError::InvalidToken
            | ServiceError::Validation(_)
            | ServiceError::ArtifactStorage(ArtifactStorageError::InvalidId(_)) => {
                Self::BadRequest(response)
            }
            ServiceError::SigningService(SigningServiceError::Configuration(_)) => {
                Self::ServerError(response)
            }
            ServiceError::SigningService(_) => Self::BadGateway(response),
            _ => Self::ServerError(response),
        }
    }

    #[track_caller]
    pub fn from_service_error_with_trace(
        error: ServiceError,
        state: &AppState,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        tracing::error!(%error, %location, "Error while {action_description}");
        Self::from_service_error(error, state.config.hide_error_response_cause)
    }

    pub fn into_parts(self) -> (StatusCode, ErrorResponseRestDTO) {
        match self {
            Self::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, error),
            Self::ServerError(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
            Self::BadGateway(error) => (StatusCode::BAD_GATEWAY, error),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = self.into_parts();
        (status, Json(error)).into_response()
    }
}

impl From<ErrorResponseRestDTO> for ErrorResponse {
    fn from(value: ErrorResponseRestDTO) -> Self {
        Self::BadRequest(value)
    }
}

fn with_error_responses<SuccessResponse: utoipa::IntoResponses>()
-> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
    use utoipa::IntoResponses;
    let mut responses = SuccessResponse::responses();
    responses.append(&mut ErrorResponse::responses());
    responses
}

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, ServiceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_service_error_with_trace(
                error,
                &state,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}

impl<T: ToSchema> utoipa::IntoResponses for OkOrErrorResponse<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        #[derive(utoipa::IntoResponses)]
        #[response(status = 200, description = "OK")]
        struct SuccessResponse<T: ToSchema>(#[to_schema] T);

        with_error_responses::<SuccessResponse<T>>()
    }
}

impl<T> From<ErrorResponse> for OkOrErrorResponse<T> {
    fn from(value: ErrorResponse) -> Self {
        Self::Error(value)
    }
}

/// Prevents the browser from replaying a page or response carrying a single-use token
pub(crate) struct NoCache<T>(pub T);

impl<T: IntoResponse> IntoResponse for NoCache<T> {
    fn into_response(self) -> axum::response::Response {
        let mut response = self.0.into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("private, no-store, max-age=0, no-cache, must-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
        response
    }
}

impl<T: utoipa::IntoResponses> utoipa::IntoResponses for NoCache<T> {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::Response>> {
        T::responses()
    }
}
