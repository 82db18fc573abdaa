//! Healthgate Server
//!
//! 依存サブシステムの死活を集約する単一ヘルスエンドポイントを提供するサーバー

#![warn(missing_docs)]

/// 共通型定義（エラー型等）
pub mod common;

/// REST APIハンドラー
pub mod api;

/// ヘルスチェック集約（プローブ契約・集約ロジック）
pub mod health;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// サーバー起動・シャットダウンハンドリング
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 起動時に構成されたプローブセット（以後読み取り専用）
    pub probe_set: health::ProbeSet,
}
