//! プローブ契約定義
//!
//! 依存サブシステムごとの疎通確認を抽象化するtrait群。
//! プローブの失敗は必ず`ProbeError`として返し、集約側へ伝播させる
//! 例外経路は持たない（エラーはデータとして扱う）。

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// プローブ失敗の結果値
///
/// 下層のエラーメッセージをそのまま保持し、`Display`でも加工せずに返す。
/// 集約レポートの`errors`にはこのメッセージが逐語的に載る。
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProbeError {
    message: String,
}

impl ProbeError {
    /// 新しいプローブ失敗を作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 失敗メッセージを返す
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sqlx::Error> for ProbeError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// 依存サブシステムのプローブ契約
///
/// 「このサブシステムは今、最小限の操作を実行できるか」を表す。
/// 実装は無期限にブロックしてはならず、内部タイムアウトを持つこと。
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// 依存名（レポートの`errors`のキーになる）
    fn name(&self) -> &str;

    /// 必須依存かどうか
    ///
    /// `false`の場合、このプローブの失敗は全体判定に影響しない。
    fn is_critical(&self) -> bool {
        true
    }

    /// 疎通確認を実行
    async fn probe(&self) -> Result<(), ProbeError>;
}

/// プローブ1回分の実行結果
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// 依存名
    pub name: String,
    /// 必須依存かどうか
    pub critical: bool,
    /// 成功したかどうか
    pub ok: bool,
    /// 失敗時のメッセージ（成功時はNone）
    pub error: Option<String>,
}

impl ProbeResult {
    /// 成功結果を作成
    pub fn success(name: String, critical: bool) -> Self {
        Self {
            name,
            critical,
            ok: true,
            error: None,
        }
    }

    /// 失敗結果を作成
    pub fn failure(name: String, critical: bool, message: String) -> Self {
        Self {
            name,
            critical,
            ok: false,
            error: Some(message),
        }
    }
}

/// 構成済みプローブの集合
///
/// 起動時に設定から一度だけ組み立てられ、プロセス生存中は読み取り専用。
/// 空のセットも有効で、その場合は自明に健全と判定される。
#[derive(Clone, Default)]
pub struct ProbeSet {
    probes: Vec<Arc<dyn DependencyProbe>>,
}

impl ProbeSet {
    /// 空のプローブセットを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// プローブを登録
    pub fn register(&mut self, probe: Arc<dyn DependencyProbe>) {
        self.probes.push(probe);
    }

    /// 登録済みプローブを順に返す
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DependencyProbe>> {
        self.probes.iter()
    }

    /// 登録済みプローブ数
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// プローブが未登録かどうか
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}
