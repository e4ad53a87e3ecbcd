use std::future;

use axum::Json;
use axum::handler::Handler;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde_json::{Value, json};
use signing_core::SigningCore;

use crate::metrics::encode_metrics;
use crate::view;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Sample index", content_type = "text/html", body = String)
    ),
    tag = "other",
    summary = "Index page",
)]
pub(crate) async fn get_index_page() -> Html<String> {
    view::index_page()
}

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "Ok")
    ),
    tag = "other",
    summary = "Retrieve version",
    description = "Returns version information of the signing server.",
)]
pub(crate) async fn get_build_info() -> Json<Value> {
    let version = SigningCore::version();
    Json::from(json!({
        "version": version.version,
        "commit": version.commit,
        "pipelineId": version.pipeline_id,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Internal error")
    ),
    tag = "other",
    summary = "Retrieve metrics",
    description = "Returns system metrics.",
)]
pub(crate) async fn get_metrics() -> Response {
    match encode_metrics() {
        Ok(result) => (StatusCode::OK, result).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Metrics encoding error: {error:?}"),
        )
            .into_response(),
    }
}

pub(crate) fn get_openapi_json<S>(openapi: &utoipa::openapi::OpenApi) -> impl Handler<((),), S> {
    let json = openapi.to_json().map_err(|error| error.to_string());
    move || {
        future::ready(match &json {
            Ok(json) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                json.clone(),
            )
                .into_response(),
            Err(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("OpenAPI encoding error: {error}"),
            )
                .into_response(),
        })
    }
}
