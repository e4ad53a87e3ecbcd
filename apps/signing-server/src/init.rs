use std::path::Path;
use std::sync::Arc;

use sentry::integrations::tracing::EventFilter;
use signing_core::SigningCore;
use signing_core::config::core_config::CoreConfig;
use signing_core::provider::http_client::reqwest_client::ReqwestClient;
use thiserror::Error;
use tracing_subscriber::prelude::*;

use crate::ServerConfig;

const SAMPLE_DOCUMENT: &[u8] = include_bytes!("../resources/sample.pdf");
const STAMP_IMAGE: &[u8] = include_bytes!("../resources/stamp.png");

#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("HTTP client error: `{0}`")]
    HttpClient(#[from] signing_core::provider::http_client::Error),
    #[error("Artifact storage error: `{0}`")]
    ArtifactStorage(#[from] signing_core::provider::artifact_storage::ArtifactStorageError),
    #[error("Failed reading resource `{path}`: {source}")]
    Resource {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Static content served by the signature pages
pub(crate) struct Resources {
    pub sample_document: Vec<u8>,
    pub stamp_image: Vec<u8>,
}

pub fn initialize_core(config: CoreConfig) -> Result<SigningCore, InitializationError> {
    let version = SigningCore::version();
    let http_client = ReqwestClient::with_user_agent(&format!(
        "signing-server/{}",
        version.version
    ))?;

    Ok(SigningCore::new(config, Arc::new(http_client))?)
}

pub(crate) async fn load_resources(config: &ServerConfig) -> Result<Resources, InitializationError> {
    Ok(Resources {
        sample_document: read_or_default(config.sample_document_path.as_deref(), SAMPLE_DOCUMENT)
            .await?,
        stamp_image: read_or_default(config.stamp_image_path.as_deref(), STAMP_IMAGE).await?,
    })
}

async fn read_or_default(
    path: Option<&Path>,
    default: &[u8],
) -> Result<Vec<u8>, InitializationError> {
    let Some(path) = path else {
        return Ok(default.to_vec());
    };

    tokio::fs::read(path)
        .await
        .map_err(|source| InitializationError::Resource {
            path: path.display().to_string(),
            source,
        })
}

pub fn initialize_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let ServerConfig {
        sentry_dsn,
        sentry_environment,
        ..
    } = config;

    let (Some(dsn), Some(environment)) = (sentry_dsn, sentry_environment) else {
        return None;
    };

    if dsn.is_empty() {
        return None;
    }

    let guard = sentry::init((
        dsn.to_owned(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(environment.to_owned().into()),
            max_breadcrumbs: 50,
            traces_sample_rate: 1.0,
            ..Default::default()
        },
    ));

    // This will be inherited when a new hub is created
    sentry::configure_scope(|scope| {
        let version = SigningCore::version();
        scope.set_tag("version", version.version);
        if let Some(commit) = version.commit {
            scope.set_tag("commit", commit);
        }
        if let Some(pipeline_id) = version.pipeline_id {
            scope.set_tag("pipeline-ID", pipeline_id);
        }
    });

    Some(guard)
}

pub fn initialize_tracing(config: &ServerConfig) {
    // Create a filter based on the log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(
                config.trace_level.as_deref().unwrap_or("debug"),
            )
        })
        .expect("Failed to create env filter");

    let sentry_layer = sentry::integrations::tracing::layer().event_filter(|md| {
        match *md.level() {
            // error traces report directly to Sentry
            tracing::Level::ERROR => EventFilter::Event,
            // info/warn traces log as sentry breadcrumb
            tracing::Level::INFO | tracing::Level::WARN => EventFilter::Breadcrumb,
            // lower level traces are ignored by sentry
            _ => EventFilter::Ignore,
        }
    });

    let tracing_layer = tracing_subscriber::registry()
        .with(filter)
        .with(sentry_layer);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_layer.with(tracing_subscriber::fmt::layer()).init();
    };
}
