use crate::infra::config::AppConfig;
use crate::types::{InfraError, InfraResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// 接続オプションを組み立てる
/// LIKEによる部分一致は大文字小文字を区別する
pub fn connect_options(database_url: &str) -> InfraResult<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(InfraError::database_connection)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .pragma("case_sensitive_like", "ON");
    Ok(options)
}

/// データベース接続プールを作成
/// 各サービスはこのプールから操作ごとに1接続を借りて返却する
pub async fn create_pool(config: &AppConfig) -> InfraResult<SqlitePool> {
    let options = connect_options(&config.database_url)?;

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(InfraError::database_connection)
}

/// データベースの初期化（マイグレーション実行）
pub async fn initialize_database(pool: &SqlitePool) -> InfraResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(InfraError::migration)
}

/// プールの作成とデータベース初期化を一括で行う便利関数
pub async fn setup_database(config: &AppConfig) -> InfraResult<SqlitePool> {
    let pool = create_pool(config).await?;
    initialize_database(&pool).await?;
    info!(database_url = %config.database_url, "データベースを初期化しました");
    Ok(pool)
}

/// メモリ上のデータベースを作成して初期化する
/// 接続が切れるとデータが消えるため、接続は1本に固定して保持し続ける
pub async fn setup_in_memory_database() -> InfraResult<SqlitePool> {
    let options = connect_options("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(InfraError::database_connection)?;

    initialize_database(&pool).await?;
    Ok(pool)
}
