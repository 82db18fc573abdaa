//! データベースアクセス層
//!
//! SQLiteデータベースへの接続プール作成と疎通確認

use crate::common::error::{GateError, GateResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// データベース接続プールを作成
///
/// データベースファイルが存在しない場合は作成する。
pub async fn create_pool(database_url: &str) -> GateResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| GateError::Config(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| GateError::Database(e.to_string()))?;

    Ok(pool)
}

/// データベースの疎通確認
///
/// 最小限のクエリ（`SELECT 1`）を実行し、接続可能かどうかを確認する。
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
