//! ストリーミングマネージャープローブ
//!
//! 任意依存であるストリーミングマネージャーのヘルスエンドポイントに
//! GETリクエストを送信し、稼働状況を確認する。失敗しても全体判定には
//! 影響しない（デプロイメントによっては構成されない）。

use crate::health::probe::{DependencyProbe, ProbeError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// プローブのタイムアウト（秒）
const PROBE_TIMEOUT_SECS: u64 = 5;

/// ストリーミングマネージャー疎通プローブ（任意依存）
pub struct StreamingProbe {
    base_url: String,
    client: Client,
}

impl StreamingProbe {
    /// 新しいストリーミングプローブを作成
    ///
    /// HTTPクライアントはプローブ内部のタイムアウトを持つ。
    /// 集約側はタイムアウトを課さない。
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl DependencyProbe for StreamingProbe {
    fn name(&self) -> &str {
        "streaming"
    }

    fn is_critical(&self) -> bool {
        false
    }

    async fn probe(&self) -> Result<(), ProbeError> {
        // GET /health でヘルスチェック
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProbeError::new(format!("HTTP {}", response.status())))
        }
    }
}
