use signing_core::config::core_config::AppConfig;
use signing_server::ServerConfig;
use signing_server::router::start_server;
use tempfile::TempDir;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::mock_server::MockServer;

pub const REST_PKI_ACCESS_TOKEN: &str = "integration-test-access-token";

pub struct TestContext {
    pub api: Client,
    pub rest_pki: MockServer,
    pub temp_folder: TempDir,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new(additional_config: Option<String>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let rest_pki = MockServer::new().await;
        let temp_folder = tempfile::tempdir().unwrap();

        let root_config = std::fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../config/config.yml"
        ))
        .unwrap();

        let test_config = indoc::formatdoc! {r#"
            core:
              restPki:
                endpoint: "{endpoint}"
                accessToken: "{REST_PKI_ACCESS_TOKEN}"
              storage:
                tempFolder: "{temp_folder}"
            app:
              traceLevel: "debug"
            "#,
            endpoint = rest_pki.uri(),
            temp_folder = temp_folder.path().display(),
        };

        let configs = [Some(root_config), Some(test_config), additional_config]
            .into_iter()
            .flatten();
        let config: AppConfig<ServerConfig> = AppConfig::from_yaml(configs).unwrap();

        let _handle = tokio::spawn(async move { start_server(listener, config).await });

        Self {
            api: Client::new(base_url),
            rest_pki,
            temp_folder,
            _handle,
        }
    }
}
