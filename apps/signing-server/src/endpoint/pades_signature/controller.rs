use axum::extract::{Form, Json, Query, State};
use axum_extra::extract::WithRejection;
use signing_core::model::token::SignatureToken;
use signing_core::service::error::ServiceError;

use super::dto::{
    FinishSignatureRequestRestDTO, FinishSignatureResponseRestDTO, SignatureTokenResponseRestDTO,
    StartSignatureQueryParams,
};
use super::mapper::{non_empty, start_signature_request};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{NoCache, OkOrErrorResponse};
use crate::metrics;
use crate::router::AppState;
use crate::view::{self, PageResponse};

const FLOW: &str = "pades_signature";

async fn start(state: &AppState, userfile: Option<&str>) -> Result<SignatureToken, ServiceError> {
    let request = start_signature_request(state, userfile)?;
    state.core.pades_signature_service.start(request).await
}

#[utoipa::path(
    get,
    path = "/pades-signature",
    params(StartSignatureQueryParams),
    responses(
        (status = 200, description = "Signature page carrying a fresh token", content_type = "text/html", body = String),
        (status = 400, description = "Invalid document identifier", content_type = "text/html", body = String),
        (status = 404, description = "Uploaded document not found", content_type = "text/html", body = String),
        (status = 502, description = "Signing service failure", content_type = "text/html", body = String),
    ),
    tag = "pades_signature",
    summary = "Signature page",
    description = indoc::formatdoc! {"
        Starts a PAdES signature of the uploaded document, or of the sample
        document when `userfile` is omitted, and renders the page handing the
        token to the certificate component.

        The token is single-use, the page is served with no-cache headers.
    "},
)]
pub(crate) async fn get_signature_page(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<
        Query<StartSignatureQueryParams>,
        ErrorResponseRestDTO,
    >,
) -> NoCache<PageResponse> {
    let userfile = non_empty(query.userfile);
    let result = start(&state, userfile.as_deref()).await;

    NoCache(PageResponse::from_result(
        result,
        &state,
        "starting PAdES signature",
        |token| view::signature_page(&token, userfile.as_deref()),
    ))
}

#[utoipa::path(
    post,
    path = "/pades-signature",
    request_body(content = FinishSignatureRequestRestDTO, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Signed document and signer information", content_type = "text/html", body = String),
        (status = 400, description = "Token invalid, expired or already used", content_type = "text/html", body = String),
        (status = 502, description = "Signing service failure", content_type = "text/html", body = String),
    ),
    tag = "pades_signature",
    summary = "Finish signature",
    description = "Finishes the signature identified by the submitted token and stores the signed document.",
)]
pub(crate) async fn post_signature_page(
    state: State<AppState>,
    WithRejection(Form(request), _): WithRejection<
        Form<FinishSignatureRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> PageResponse {
    let result = state
        .core
        .pades_signature_service
        .finish(&request.token)
        .await;
    metrics::track_flow_outcome(FLOW, result.is_ok());

    PageResponse::from_result(result, &state, "finishing PAdES signature", |signed| {
        view::signature_info_page(&signed.artifact_id, &signed.signer)
    })
}

#[utoipa::path(
    get,
    path = "/api/pades-signature/v1",
    params(StartSignatureQueryParams),
    responses(OkOrErrorResponse<SignatureTokenResponseRestDTO>),
    tag = "pades_signature",
    summary = "Start signature",
    description = "Starts a PAdES signature and returns the single-use token for the certificate component.",
)]
pub(crate) async fn start_signature(
    state: State<AppState>,
    WithRejection(Query(query), _): WithRejection<
        Query<StartSignatureQueryParams>,
        ErrorResponseRestDTO,
    >,
) -> NoCache<OkOrErrorResponse<SignatureTokenResponseRestDTO>> {
    let userfile = non_empty(query.userfile);
    let result = start(&state, userfile.as_deref()).await;

    NoCache(OkOrErrorResponse::from_result(
        result,
        state,
        "starting PAdES signature",
    ))
}

#[utoipa::path(
    post,
    path = "/api/pades-signature/v1",
    request_body = FinishSignatureRequestRestDTO,
    responses(OkOrErrorResponse<FinishSignatureResponseRestDTO>),
    tag = "pades_signature",
    summary = "Finish signature",
    description = indoc::formatdoc! {"
        Finishes the signature identified by the token once the certificate
        component has signed. Returns the identifier of the stored signed
        document and the signer certificate.
    "},
)]
pub(crate) async fn finish_signature(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<FinishSignatureRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<FinishSignatureResponseRestDTO> {
    let result = state
        .core
        .pades_signature_service
        .finish(&request.token)
        .await;
    metrics::track_flow_outcome(FLOW, result.is_ok());

    OkOrErrorResponse::from_result(result, state, "finishing PAdES signature")
}
