//! Healthgate Server Entry Point

use clap::Parser;
use healthgate::config::GateConfig;
use healthgate::health::{DatabaseProbe, ProbeSet, StreamingProbe};
use healthgate::{db, logging, server, AppState};
use std::sync::Arc;
use tracing::info;

/// 依存サブシステムの死活を集約するヘルスチェックサーバー
#[derive(Debug, Parser)]
#[command(name = "healthgate", version, about)]
struct Cli {
    /// バインドするホストアドレス（環境変数より優先）
    #[arg(long)]
    host: Option<String>,

    /// バインドするポート番号（環境変数より優先）
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init().expect("failed to initialize logging");

    let mut config = GateConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    info!("Healthgate v{}", env!("CARGO_PKG_VERSION"));
    info!("Connecting to database: {}", config.database_url);

    // データベース接続プールを作成
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // プローブセットを構成（起動時に一度だけ、以後読み取り専用）
    let mut probe_set = ProbeSet::new();
    probe_set.register(Arc::new(DatabaseProbe::new(db_pool.clone())));

    match &config.streaming_url {
        Some(url) => {
            info!(streaming_url = %url, "Streaming manager probe enabled");
            probe_set.register(Arc::new(StreamingProbe::new(url.clone())));
        }
        None => {
            info!("No streaming manager configured, probing database only");
        }
    }

    let state = AppState { probe_set };

    server::run(state, &config.bind_addr()).await;
}
