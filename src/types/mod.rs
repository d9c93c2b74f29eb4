//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的な型定義を管理します。
//! - 設定エラー・インフラエラー: 起動時の失敗
//! - ストアエラー: データアクセス操作の型付き結果と互換動作への変換

pub mod config;
pub mod error;
pub mod infra;
pub mod result;

// 便利な再エクスポート
pub use config::{ConfigError, ConfigResult};
pub use error::{StoreError, StoreResult};
pub use infra::{InfraError, InfraResult};
pub use result::StoreResultExt;
