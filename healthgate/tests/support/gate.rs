use healthgate::health::ProbeSet;
use healthgate::{api, AppState};
use sqlx::SqlitePool;

use super::http::{spawn_app, TestServer};

/// テスト用のインメモリSQLiteプールを作成する
pub async fn create_test_db_pool() -> SqlitePool {
    SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

/// healthgateサーバーをテスト用に起動する
///
/// `main.rs`と同じ経路（`api::create_app` + `AppState`）でアプリを組み立てる。
pub async fn spawn_gate(probe_set: ProbeSet) -> TestServer {
    let state = AppState { probe_set };
    spawn_app(api::create_app(state)).await
}
