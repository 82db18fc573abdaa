//! REST APIハンドラー
//!
//! ヘルスチェックAPIのルーティング

pub mod health;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::check_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
