use thiserror::Error;

/// データアクセス層の型付きエラー
///
/// 公開APIの互換動作（読み取りは空の結果、書き込みは`false`）とは別に、
/// `try_*`系の操作はこの型で失敗理由を区別して返す。
#[derive(Error, Debug)]
pub enum StoreError {
    /// 指定IDの行が存在しない
    #[error("{entity}が見つかりません: id={id}")]
    NotFound { entity: &'static str, id: i64 },

    /// ストアに到達できない（接続プール・I/O・設定）
    #[error("データベースに接続できません: {operation} - {source}")]
    Unavailable {
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    /// 制約違反（一意・外部キー・CHECK・NOT NULL）
    #[error("制約違反: {operation} - {source}")]
    Constraint {
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    /// その他のクエリエラー
    #[error("データベースクエリエラー: {operation} - {source}")]
    Query {
        operation: String,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// 行が存在しないエラーを作成
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// sqlxのエラーを分類してStoreErrorに変換する
    pub fn from_sqlx<O: Into<String>>(operation: O, source: sqlx::Error) -> Self {
        let operation = operation.into();
        match &source {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable { operation, source },
            sqlx::Error::Database(db_err) if is_constraint_violation(&**db_err) => {
                Self::Constraint { operation, source }
            }
            _ => Self::Query { operation, source },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }
}

fn is_constraint_violation(err: &dyn sqlx::error::DatabaseError) -> bool {
    use sqlx::error::ErrorKind;
    matches!(
        err.kind(),
        ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
    )
}

/// データアクセス操作のResult型エイリアス
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        let err = StoreError::from_sqlx("一覧取得", sqlx::Error::PoolTimedOut);
        assert!(err.is_unavailable());
        assert!(!err.is_not_found());

        let err = StoreError::from_sqlx("一覧取得", sqlx::Error::PoolClosed);
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_row_not_found_is_query_error() {
        // fetch_oneの行なしは呼び出し側でNotFoundに変換するため、ここでは一般エラー扱い
        let err = StoreError::from_sqlx("ID取得", sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Query { .. }));
    }

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("estrategia", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "estrategiaが見つかりません: id=42");
    }
}
