//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// healthgateエラー型
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type GateResult<T> = Result<T, GateError>;
