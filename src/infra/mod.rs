//! インフラストラクチャ層
//!
//! 設定の読み込み、ログ出力の初期化、接続プールとマイグレーションを扱う。

pub mod config;
pub mod db;
pub mod logging;

pub use config::AppConfig;
pub use db::{create_pool, initialize_database, setup_database, setup_in_memory_database};
pub use logging::init_tracing;
