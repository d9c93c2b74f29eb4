use crate::types::{StoreError, StoreResult};
use tracing::{error, warn};

/// 型付きの結果を互換動作（空の結果・`None`・`false`）へ畳み込むための拡張
///
/// どの変換もエラーをログに記録してから既定値を返すため、
/// 呼び出し側に低レベルのストアエラーが届くことはない。
pub trait StoreResultExt<T> {
    /// 読み取り操作: エラー時は`T::default()`（空の一覧・0件）
    fn or_empty(self, operation: &str) -> T
    where
        T: Default;

    /// ID指定の読み取り: 行なし・エラー時は`None`
    fn found(self, operation: &str) -> Option<T>;

    /// 書き込み操作: 成功なら`true`、行なし・エラー時は`false`
    fn succeeded(self, operation: &str) -> bool;
}

impl<T> StoreResultExt<T> for StoreResult<T> {
    fn or_empty(self, operation: &str) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|e| {
            error!(operation = operation, error = %e, "読み取りに失敗したため空の結果を返します");
            T::default()
        })
    }

    fn found(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(StoreError::NotFound { .. }) => None,
            Err(e) => {
                error!(operation = operation, error = %e, "ID指定の取得に失敗しました");
                None
            }
        }
    }

    fn succeeded(self, operation: &str) -> bool {
        match self {
            Ok(_) => true,
            Err(e @ StoreError::NotFound { .. }) => {
                warn!(operation = operation, error = %e, "対象の行がありません");
                false
            }
            Err(e) => {
                error!(operation = operation, error = %e, "書き込みに失敗しました");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable() -> StoreError {
        StoreError::from_sqlx("テスト", sqlx::Error::PoolClosed)
    }

    #[test]
    fn test_or_empty_collapses_errors() {
        let ok: StoreResult<Vec<i32>> = Ok(vec![1, 2]);
        assert_eq!(ok.or_empty("一覧"), vec![1, 2]);

        let failed: StoreResult<Vec<i32>> = Err(unavailable());
        assert!(failed.or_empty("一覧").is_empty());

        let failed_count: StoreResult<i64> = Err(unavailable());
        assert_eq!(failed_count.or_empty("件数"), 0);
    }

    #[test]
    fn test_found_maps_not_found_and_errors_to_none() {
        let ok: StoreResult<i32> = Ok(7);
        assert_eq!(ok.found("取得"), Some(7));

        let missing: StoreResult<i32> = Err(StoreError::not_found("articulo", 1));
        assert_eq!(missing.found("取得"), None);

        let failed: StoreResult<i32> = Err(unavailable());
        assert_eq!(failed.found("取得"), None);
    }

    #[test]
    fn test_succeeded() {
        let ok: StoreResult<()> = Ok(());
        assert!(ok.succeeded("更新"));

        let missing: StoreResult<()> = Err(StoreError::not_found("estrategia", 9));
        assert!(!missing.succeeded("更新"));

        let failed: StoreResult<()> = Err(unavailable());
        assert!(!failed.succeeded("更新"));
    }
}
