use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::WithRejection;
use signing_core::model::artifact::ArtifactId;
use signing_core::service::error::{ServiceError, ValidationError};

use super::dto::UploadDocumentRequestRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::ErrorResponse;
use crate::router::AppState;
use crate::view::{self, PageResponse};

const UPLOAD_FIELD: &str = "userfile";

#[utoipa::path(
    get,
    path = "/upload",
    responses(
        (status = 200, description = "Upload form", content_type = "text/html", body = String),
    ),
    tag = "document",
    summary = "Upload page",
)]
pub(crate) async fn get_upload_page() -> Html<String> {
    view::upload_page()
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadDocumentRequestRestDTO, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Redirect to the signature page of the uploaded document"),
        (status = 400, description = "Missing, empty, oversized or non-PDF document", content_type = "text/html", body = String),
    ),
    tag = "document",
    summary = "Upload document",
    description = "Stores the uploaded PDF in the temporary folder and starts its signature.",
)]
pub(crate) async fn post_upload(
    state: State<AppState>,
    WithRejection(multipart, _): WithRejection<Multipart, ErrorResponseRestDTO>,
) -> Response {
    let max_upload_size = state.core.config.storage.max_upload_size;
    let result = match read_upload(multipart, max_upload_size).await {
        Ok(content) => state.core.document_service.upload(content).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(id) => Redirect::to(&format!("/pades-signature?userfile={id}")).into_response(),
        Err(error) => PageResponse::Error(ErrorResponse::from_service_error_with_trace(
            error,
            &state,
            "uploading document",
        ))
        .into_response(),
    }
}

async fn read_upload(mut multipart: Multipart, max: usize) -> Result<Vec<u8>, ServiceError> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|error| multipart_error(error, max))?;

        let Some(field) = field else {
            return Err(ValidationError::MissingValue(UPLOAD_FIELD).into());
        };

        if field.name() == Some(UPLOAD_FIELD) {
            let content = field
                .bytes()
                .await
                .map_err(|error| multipart_error(error, max))?;
            return Ok(content.to_vec());
        }
    }
}

// the body limit surfaces while streaming the multipart fields
fn multipart_error(error: MultipartError, max: usize) -> ServiceError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ValidationError::UploadTooLarge { max }.into();
    }

    ServiceError::MappingError(error.body_text())
}

#[utoipa::path(
    get,
    path = "/download/{id}",
    params(
        ("id" = String, Path, description = "Artifact identifier, `<uuid>.<extension>`")
    ),
    responses(
        (status = 200, description = "Stored document", content_type = "application/pdf", body = Vec<u8>),
        (status = 400, description = "Malformed identifier", body = ErrorResponseRestDTO),
        (status = 404, description = "Document not found", body = ErrorResponseRestDTO),
    ),
    tag = "document",
    summary = "Download document",
)]
pub(crate) async fn download(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ErrorResponseRestDTO>,
) -> Response {
    let result = state.core.document_service.download(&id).await;

    match result {
        Ok(document) => (
            [
                (header::CONTENT_TYPE, document.content_type.to_string()),
                (header::CONTENT_DISPOSITION, attachment(&document.id)),
            ],
            document.content,
        )
            .into_response(),
        Err(error) => {
            ErrorResponse::from_service_error_with_trace(error, &state, "downloading document")
                .into_response()
        }
    }
}

fn attachment(id: &ArtifactId) -> String {
    format!("attachment; filename=\"{id}\"")
}
