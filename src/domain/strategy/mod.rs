pub mod form;
pub mod model;
pub mod repository;

// 公開APIの再エクスポート
pub use form::{StrategyForm, ValidationError};
pub use model::{ParseRiskLevelError, RiskLevel, Strategy};
pub use repository::{StrategyOrder, StrategyQuery, StrategyRepository};
