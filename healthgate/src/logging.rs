//! ロギング初期化ユーティリティ
//!
//! tracing-subscriberによる構造化ログの初期化。
//! フィルタは環境変数 `RUST_LOG` から取得し、未設定時は `info` を使用する。

use crate::common::error::{GateError, GateResult};
use tracing_subscriber::EnvFilter;

/// グローバルロガーを初期化する
///
/// プロセス起動時に一度だけ呼び出すこと。二重初期化はエラーになる。
pub fn init() -> GateResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| GateError::Internal(e.to_string()))
}
