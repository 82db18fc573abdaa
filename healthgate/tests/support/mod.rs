//! テスト共通ユーティリティ

pub mod gate;
pub mod http;
