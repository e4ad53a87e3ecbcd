use axum::extract::{Json, State};
use axum_extra::extract::WithRejection;
use signing_core::service::authentication::dto::CompleteAuthenticationRequestDTO;

use super::dto::{
    AuthenticationOutcomeRestDTO, CompleteAuthenticationRequestRestDTO, NonceResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, NoCache, OkOrErrorResponse};
use crate::metrics;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/authentication/v1",
    responses(OkOrErrorResponse<NonceResponseRestDTO>),
    tag = "authentication",
    summary = "Start authentication",
    description = "Returns a fresh single-use nonce for the certificate component to sign.",
)]
pub(crate) async fn start_authentication(
    state: State<AppState>,
) -> NoCache<OkOrErrorResponse<NonceResponseRestDTO>> {
    let result = state.core.authentication_service.start().await;

    NoCache(OkOrErrorResponse::from_result(
        result,
        state,
        "starting authentication",
    ))
}

#[utoipa::path(
    post,
    path = "/api/authentication/v1",
    request_body = CompleteAuthenticationRequestRestDTO,
    responses(OkOrErrorResponse<AuthenticationOutcomeRestDTO>),
    tag = "authentication",
    summary = "Complete authentication",
    description = indoc::formatdoc! {"
        Validates the signed nonce and the signer certificate.

        A certificate or signature that is not accepted yields `success: false`
        with the validation results. A nonce that is unknown or already used is
        rejected with `BR_0002`.
    "},
)]
pub(crate) async fn complete_authentication(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<CompleteAuthenticationRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<AuthenticationOutcomeRestDTO> {
    let request = match CompleteAuthenticationRequestDTO::try_from(request) {
        Ok(request) => request,
        Err(error) => {
            let error = error.hide_cause(state.config.hide_error_response_cause);
            return ErrorResponse::BadRequest(error).into();
        }
    };

    let result = state.core.authentication_service.complete(request).await;
    metrics::track_flow_outcome(
        "authentication",
        result.as_ref().is_ok_and(|outcome| outcome.success),
    );

    OkOrErrorResponse::from_result(result, state, "completing authentication")
}
