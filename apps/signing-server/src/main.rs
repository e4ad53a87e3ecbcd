use std::net::TcpListener;
use std::path::PathBuf;

use clap::Parser;
use signing_core::config::core_config::AppConfig;
use signing_server::init::{initialize_sentry, initialize_tracing};
use signing_server::router::start_server;
use signing_server::{ServerConfig, metrics};

const BASE_CONFIG_FILE: &str = "config/config.yml";

/// Session coordinator of the PAdES signature and certificate authentication sample
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Additional config files merged over `config/config.yml`, later ones win
    #[arg(short, long = "config", value_name = "FILE")]
    config_files: Vec<PathBuf>,
}

impl Cli {
    fn config(self) -> AppConfig<ServerConfig> {
        let files: Vec<PathBuf> = std::iter::once(PathBuf::from(BASE_CONFIG_FILE))
            .chain(self.config_files)
            .collect();

        AppConfig::from_files(&files).expect("Failed creating config")
    }
}

fn main() {
    let config = Cli::parse().config();

    let _sentry_init_guard = initialize_sentry(&config.app);
    initialize_tracing(&config.app);
    metrics::setup();

    let listener =
        TcpListener::bind(config.app.listen_address()).expect("Failed to bind to address");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
        .block_on(start_server(listener, config))
}
