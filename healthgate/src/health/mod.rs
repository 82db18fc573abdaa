//! ヘルスチェック集約
//!
//! 依存サブシステムごとのプローブ（データベース必須、ストリーミング
//! マネージャー任意）を並列に実行し、集約判定を単一のレポートにまとめる。
//!
//! 集約ルール: 必須依存のプローブが失敗した場合のみ全体を`DOWN`とする。
//! 任意依存の障害はログに記録するだけで全体判定には影響しない。

/// プローブ契約（trait・結果型・プローブセット）
pub mod probe;

/// 集約ロジック
pub mod aggregator;

/// データベースプローブ（必須依存）
pub mod database;

/// ストリーミングマネージャープローブ（任意依存）
pub mod streaming;

pub use aggregator::{HealthAggregator, HealthReport, HealthStatus};
pub use database::DatabaseProbe;
pub use probe::{DependencyProbe, ProbeError, ProbeResult, ProbeSet};
pub use streaming::StreamingProbe;
