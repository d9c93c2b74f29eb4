use crate::types::{ConfigError, ConfigResult};
use std::env;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 起動時に読み込むアプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 接続先データベース（例: `sqlite://articulos_fintech.db`）
    pub database_url: String,
    /// `RUST_LOG`が未設定のときに使うログレベル
    pub log_level: String,
    /// 接続プールの最大接続数
    pub max_connections: u32,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    /// .envファイルの読み込みは呼び出し側で行う
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を組み立てる
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::missing_env_var("DATABASE_URL"))?;

        let log_level = lookup("LOG_LEVEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => parse_max_connections(&raw)?,
        };

        Ok(Self {
            database_url,
            log_level,
            max_connections,
        })
    }
}

fn parse_max_connections(raw: &str) -> ConfigResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::invalid_value(
            "DATABASE_MAX_CONNECTIONS",
            format!("正の整数を指定してください: {}", raw),
        )),
    }
}
