use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use signing_core::SigningCore;
use signing_core::config::core_config::AppConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, authentication, document, misc, pades_signature};
use crate::init::{Resources, initialize_core, load_resources};
use crate::middleware::get_http_request_context;

// room for the multipart envelope around the uploaded file
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub(crate) struct InternalAppState {
    pub core: SigningCore,
    pub config: Arc<ServerConfig>,
    pub resources: Resources,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener non-blocking");

    let max_upload_size = config.core.storage.max_upload_size;
    let core = initialize_core(config.core).expect("Failed to initialize core");
    let resources = load_resources(&config.app)
        .await
        .expect("Failed to load resources");

    let state: AppState = Arc::new(InternalAppState {
        core,
        config: Arc::new(config.app),
        resources,
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, max_upload_size);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, max_upload_size: usize) -> Router {
    let openapi_documentation = gen_openapi_documentation();

    let pages = Router::new()
        .route("/", get(misc::get_index_page))
        .route(
            "/pades-signature",
            get(pades_signature::controller::get_signature_page)
                .post(pades_signature::controller::post_signature_page),
        )
        .route(
            "/upload",
            get(document::controller::get_upload_page)
                .post(document::controller::post_upload)
                .layer(DefaultBodyLimit::max(max_upload_size + MULTIPART_OVERHEAD)),
        )
        .route("/download/{id}", get(document::controller::download));

    let api = Router::new()
        .route(
            "/api/pades-signature/v1",
            get(pades_signature::controller::start_signature)
                .post(pades_signature::controller::finish_signature),
        )
        .route(
            "/api/authentication/v1",
            get(authentication::controller::start_authentication)
                .post(authentication::controller::complete_authentication),
        );

    let technical_endpoints = Router::new()
        .route("/build-info", get(misc::get_build_info))
        .route("/health", get(misc::health_check))
        .route("/metrics", get(misc::get_metrics))
        .route(
            "/api-docs/openapi.json",
            get(misc::get_openapi_json(&openapi_documentation)),
        );

    Router::new()
        .merge(pages)
        .merge(api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "signing-server",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::sentry_layer))
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

pub fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::pades_signature::controller::get_signature_page,
            endpoint::pades_signature::controller::post_signature_page,
            endpoint::pades_signature::controller::start_signature,
            endpoint::pades_signature::controller::finish_signature,

            endpoint::authentication::controller::start_authentication,
            endpoint::authentication::controller::complete_authentication,

            endpoint::document::controller::get_upload_page,
            endpoint::document::controller::post_upload,
            endpoint::document::controller::download,

            endpoint::misc::get_index_page,
            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::pades_signature::dto::SignatureTokenResponseRestDTO,
                endpoint::pades_signature::dto::FinishSignatureRequestRestDTO,
                endpoint::pades_signature::dto::FinishSignatureResponseRestDTO,

                endpoint::authentication::dto::NonceResponseRestDTO,
                endpoint::authentication::dto::CompleteAuthenticationRequestRestDTO,
                endpoint::authentication::dto::AuthenticationOutcomeRestDTO,

                endpoint::document::dto::UploadDocumentRequestRestDTO,

                crate::dto::common::CertificateInfoRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::ErrorCode,
                crate::dto::error::Cause,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "pades_signature", description = "PAdES signature of PDF documents"),
            (name = "authentication", description = "Certificate authentication"),
            (name = "document", description = "Document upload and download"),
        ),
    )]
    struct ApiDoc;

    let mut docs = ApiDoc::openapi();
    docs.info.title = "Signing sample".into();
    docs.info.version = SigningCore::version().version;
    docs
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
