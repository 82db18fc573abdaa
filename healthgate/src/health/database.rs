//! データベースプローブ
//!
//! 必須依存であるデータストアの疎通確認。失敗した場合、全体判定は`DOWN`になる。

use crate::db;
use crate::health::probe::{DependencyProbe, ProbeError};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// データベース疎通プローブ（必須依存）
pub struct DatabaseProbe {
    pool: SqlitePool,
}

impl DatabaseProbe {
    /// 新しいデータベースプローブを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DependencyProbe for DatabaseProbe {
    fn name(&self) -> &str {
        "database"
    }

    fn is_critical(&self) -> bool {
        true
    }

    async fn probe(&self) -> Result<(), ProbeError> {
        db::ping(&self.pool).await?;
        Ok(())
    }
}
