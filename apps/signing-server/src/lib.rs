#![cfg_attr(feature = "strict", deny(warnings))]

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;
use signing_core::model::visual::{HorizontalAlign, PositioningRequest};

pub mod dto;
pub mod endpoint;
pub mod init;
pub mod metrics;
pub mod router;
mod middleware;
mod view;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// document signed when no file was uploaded, the bundled sample when unset
    pub sample_document_path: Option<PathBuf>,
    /// PNG stamped on the signature, the bundled stamp when unset
    pub stamp_image_path: Option<PathBuf>,
    pub visual_representation: VisualRepresentationConfig,
}

impl ServerConfig {
    /// Listening address, all interfaces on port 3000 unless configured
    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::new(
            self.server_ip.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.server_port.unwrap_or(3000),
        )
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualRepresentationConfig {
    pub text: String,
    pub include_signing_time: bool,
    pub horizontal_align: HorizontalAlign,
    pub positioning: PositioningRequest,
}

impl Default for VisualRepresentationConfig {
    fn default() -> Self {
        Self {
            text: "Signed by {{signerName}} ({{signerNationalId}})".to_string(),
            include_signing_time: true,
            horizontal_align: HorizontalAlign::Left,
            positioning: PositioningRequest::default(),
        }
    }
}
