//! ドメイン層
//!
//! エンティティごとにモデル（行との対応）とデータアクセスサービスを持つ。
//! - article: 論文（読み取り専用）
//! - search: 文献検索（参照と集計）
//! - strategy: 投資戦略（作成・更新・削除まで）

pub mod article;
pub mod search;
pub mod strategy;
