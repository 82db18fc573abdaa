//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns the default when neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// healthgate設定
///
/// プロセス起動時に一度だけ環境変数から構築され、以後読み取り専用。
/// ストリーミングマネージャーのプローブは `streaming_url` が設定されている
/// デプロイメントでのみ登録される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    pub host: String,
    /// ポート番号 (デフォルト: 8080)
    pub port: u16,
    /// データベースURL (デフォルト: "sqlite://healthgate.db")
    pub database_url: String,
    /// ストリーミングマネージャーのベースURL（未設定ならプローブなし）
    pub streaming_url: Option<String>,
}

impl GateConfig {
    /// Load the gateway configuration from environment variables.
    pub fn from_env() -> Self {
        let host = get_env_with_fallback_or("HEALTHGATE_HOST", "HEALTHGATE_HOST", "0.0.0.0");
        let port = get_env_with_fallback_parse("HEALTHGATE_PORT", "HEALTHGATE_PORT", 8080u16);
        let database_url = get_env_with_fallback_or(
            "HEALTHGATE_DATABASE_URL",
            "DATABASE_URL",
            "sqlite://healthgate.db",
        );
        let streaming_url =
            get_env_with_fallback("HEALTHGATE_STREAMING_URL", "STREAMING_MANAGER_URL");

        Self {
            host,
            port,
            database_url,
            streaming_url,
        }
    }

    /// サーバーのバインドアドレスを返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
