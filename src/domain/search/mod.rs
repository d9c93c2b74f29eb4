pub mod model;
pub mod repository;

// 公開APIの再エクスポート
pub use model::{Search, SearchStatistics};
pub use repository::SearchRepository;
