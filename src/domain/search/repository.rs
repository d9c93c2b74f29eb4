use super::model::{Search, SearchStatistics};
use crate::types::{StoreError, StoreResult, StoreResultExt};
use sqlx::SqlitePool;

/// 文献検索のデータアクセスサービス
#[derive(Debug, Clone)]
pub struct SearchRepository {
    pool: SqlitePool,
}

impl SearchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 全検索をID昇順で取得する
    pub async fn try_list_all(&self) -> StoreResult<Vec<Search>> {
        sqlx::query_as::<_, Search>(
            r#"
            SELECT id, nombre_estudiante, base_datos, cadena_busqueda,
                   cantidad_documentos, fecha_busqueda
            FROM busquedas
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("検索一覧の取得", e))
    }

    pub async fn list_all(&self) -> Vec<Search> {
        self.try_list_all().await.or_empty("検索一覧の取得")
    }

    /// IDを指定して検索を取得する
    pub async fn try_get_by_id(&self, id: i64) -> StoreResult<Search> {
        sqlx::query_as::<_, Search>(
            r#"
            SELECT id, nombre_estudiante, base_datos, cadena_busqueda,
                   cantidad_documentos, fecha_busqueda
            FROM busquedas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("検索の取得", e))?
        .ok_or_else(|| StoreError::not_found("busqueda", id))
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Search> {
        self.try_get_by_id(id).await.found("検索の取得")
    }

    /// 検索件数と文献数の合計を集計する
    /// 空集合に対するSUMのNULLは0に変換する
    pub async fn try_statistics(&self) -> StoreResult<SearchStatistics> {
        sqlx::query_as::<_, SearchStatistics>(
            r#"
            SELECT COUNT(*) AS total_searches,
                   COALESCE(SUM(cantidad_documentos), 0) AS total_documents
            FROM busquedas
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("検索統計の取得", e))
    }

    pub async fn statistics(&self) -> SearchStatistics {
        self.try_statistics().await.or_empty("検索統計の取得")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures("../../../fixtures/catalog_basic.sql"))]
    async fn test_list_all_by_id(pool: SqlitePool) -> Result<(), anyhow::Error> {
        let repo = SearchRepository::new(pool);

        let searches = repo.list_all().await;
        let ids: Vec<i64> = searches.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(searches[0].student_name, "Ana Torres");
        assert_eq!(searches[1].database_name, "IEEE Xplore");
        Ok(())
    }

    #[sqlx::test(fixtures("../../../fixtures/catalog_basic.sql"))]
    async fn test_get_by_id(pool: SqlitePool) -> Result<(), anyhow::Error> {
        let repo = SearchRepository::new(pool);

        let search = repo.get_by_id(2).await.expect("id=2の検索が見つからない");
        assert_eq!(search.query, "algorithmic trading");
        assert_eq!(search.document_count, 45);
        assert_eq!(search.executed_at.to_rfc3339(), "2024-03-02T11:30:00+00:00");

        assert!(repo.get_by_id(3).await.is_none());
        Ok(())
    }

    #[sqlx::test(fixtures("../../../fixtures/catalog_basic.sql"))]
    async fn test_statistics(pool: SqlitePool) -> Result<(), anyhow::Error> {
        let repo = SearchRepository::new(pool);

        let stats = repo.statistics().await;
        assert_eq!(stats.as_pair(), (2, 165));

        println!("✅ 検索統計テスト成功: {}", stats);
        Ok(())
    }

    #[sqlx::test]
    async fn test_statistics_on_empty_store_is_zero(pool: SqlitePool) -> Result<(), anyhow::Error> {
        let repo = SearchRepository::new(pool);

        // 欠損値ではなく(0, 0)が返る
        let stats = repo.try_statistics().await?;
        assert_eq!(stats, SearchStatistics::new(0, 0));
        Ok(())
    }

    #[sqlx::test]
    async fn test_closed_pool_degrades_to_defaults(pool: SqlitePool) -> Result<(), anyhow::Error> {
        let repo = SearchRepository::new(pool.clone());
        pool.close().await;

        assert!(repo.list_all().await.is_empty());
        assert!(repo.get_by_id(1).await.is_none());
        assert_eq!(repo.statistics().await.as_pair(), (0, 0));
        assert!(repo.try_statistics().await.unwrap_err().is_unavailable());
        Ok(())
    }
}
