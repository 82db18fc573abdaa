//! ヘルスチェックAPI
//!
//! 集約判定をHTTPステータスコードとJSONボディにそのまま写す薄いアダプター。
//! このエンドポイントが500系を返すことはない（集約器がすべての障害を
//! データとして扱うため）。

use crate::health::HealthAggregator;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

/// GET /health
///
/// 200 `{"status":"OK"}` または 503 `{"status":"DOWN","errors":{...}}` を返す。
pub async fn check_health(State(state): State<AppState>) -> impl IntoResponse {
    let (status, report) = HealthAggregator::check(&state.probe_set).await;
    (status, Json(report))
}
