pub mod model;
pub mod repository;

// 公開APIの再エクスポート
pub use model::Article;
pub use repository::ArticleRepository;
