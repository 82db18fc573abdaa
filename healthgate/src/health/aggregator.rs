//! ヘルスチェック集約ロジック
//!
//! 構成済みプローブを並列実行し、全プローブの完了を待ってから
//! 集約判定とレスポンスボディを構築する。部分的な結果からレポートを
//! 作ることはない。

use crate::health::probe::{ProbeResult, ProbeSet};
use axum::http::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, error, warn};

/// 集約判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    /// すべての必須依存が健全
    #[serde(rename = "OK")]
    Ok,
    /// 必須依存が障害中
    #[serde(rename = "DOWN")]
    Down,
}

impl HealthStatus {
    /// 文字列表現を返す
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Ok => "OK",
            HealthStatus::Down => "DOWN",
        }
    }

    /// 対応するHTTPステータスコードを返す
    ///
    /// `OK` → 200、`DOWN` → 503。他のコードは生成されない。
    pub fn status_code(&self) -> StatusCode {
        match self {
            HealthStatus::Ok => StatusCode::OK,
            HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 集約レポート
///
/// `errors`は全体が`DOWN`のときのみ存在し、失敗した必須依存の
/// メッセージを依存名をキーとして保持する。健全時はキー自体を省略する。
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// 集約判定
    pub status: HealthStatus,
    /// 失敗した必須依存のエラーメッセージ（依存名 → メッセージ）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl HealthReport {
    /// 健全なレポートを作成
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            errors: None,
        }
    }

    /// 障害レポートを作成
    pub fn down(errors: BTreeMap<String, String>) -> Self {
        Self {
            status: HealthStatus::Down,
            errors: Some(errors),
        }
    }
}

/// ヘルスチェック集約器
///
/// 呼び出しごとに新しい`ProbeResult`/`HealthReport`を構築する。
/// 呼び出し間で共有する可変状態は持たない。
pub struct HealthAggregator;

impl HealthAggregator {
    /// 全プローブを実行し、集約判定とレポートを返す
    ///
    /// プローブは互いに独立なので並列に起動し、すべての完了を待つ。
    /// リトライもタイムアウトも課さない（タイムアウトはプローブ実装の内部責務）。
    pub async fn check(probes: &ProbeSet) -> (StatusCode, HealthReport) {
        let results = Self::run_probes(probes).await;
        Self::finalize(results)
    }

    /// 各プローブを並列実行して結果を収集
    ///
    /// プローブ実装がパニックした場合もJoinErrorとして捕捉し、
    /// 失敗結果に変換する。ヘルスチェック呼び出し自体は決して落ちない。
    async fn run_probes(probes: &ProbeSet) -> Vec<ProbeResult> {
        let mut tasks = Vec::with_capacity(probes.len());

        for probe in probes.iter() {
            let name = probe.name().to_string();
            let critical = probe.is_critical();
            let probe = probe.clone();

            let handle = tokio::spawn(async move {
                let start = Instant::now();
                let outcome = probe.probe().await;
                (outcome, start.elapsed())
            });

            tasks.push((name, critical, handle));
        }

        let mut results = Vec::with_capacity(tasks.len());

        for (name, critical, handle) in tasks {
            let result = match handle.await {
                Ok((Ok(()), elapsed)) => {
                    debug!(
                        probe = %name,
                        latency_ms = elapsed.as_millis() as u64,
                        "Dependency probe succeeded"
                    );
                    ProbeResult::success(name, critical)
                }
                Ok((Err(e), elapsed)) => {
                    if critical {
                        error!(
                            probe = %name,
                            latency_ms = elapsed.as_millis() as u64,
                            error = %e,
                            "Critical dependency probe failed"
                        );
                    } else {
                        warn!(
                            probe = %name,
                            latency_ms = elapsed.as_millis() as u64,
                            error = %e,
                            "Optional dependency probe failed"
                        );
                    }
                    ProbeResult::failure(name, critical, e.to_string())
                }
                Err(e) => {
                    // プローブ実装の逸脱（パニック等）も失敗結果として扱う
                    error!(probe = %name, "Probe task join error: {}", e);
                    ProbeResult::failure(name, critical, format!("probe task failed: {}", e))
                }
            };
            results.push(result);
        }

        results
    }

    /// 収集済み結果から判定とレポートを構築（純粋関数）
    ///
    /// 必須依存の失敗のみが`DOWN`と`errors`に反映される。
    /// 任意依存の失敗はここでは無視される（収集時にログ済み）。
    fn finalize(results: Vec<ProbeResult>) -> (StatusCode, HealthReport) {
        let mut errors = BTreeMap::new();

        for result in results {
            if !result.ok && result.critical {
                errors.insert(result.name, result.error.unwrap_or_default());
            }
        }

        let report = if errors.is_empty() {
            HealthReport::ok()
        } else {
            HealthReport::down(errors)
        };

        (report.status.status_code(), report)
    }
}
