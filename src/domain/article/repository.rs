use super::model::Article;
use crate::types::{StoreError, StoreResult, StoreResultExt};
use sqlx::SqlitePool;

/// 論文のデータアクセスサービス
///
/// `try_*`は型付きの結果を返し、それ以外はエラーをログに記録して
/// 空の結果（空の一覧・0件・`None`）を返す。
#[derive(Debug, Clone)]
pub struct ArticleRepository {
    pool: SqlitePool,
}

impl ArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 全論文を出版年の新しい順（同年はID昇順）で取得する
    pub async fn try_list_all(&self) -> StoreResult<Vec<Article>> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, busqueda_id, titulo, autores, anio_publicacion,
                   fuente, doi, resumen, palabras_clave, cita_apa
            FROM articulos
            ORDER BY anio_publicacion DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("論文一覧の取得", e))
    }

    pub async fn list_all(&self) -> Vec<Article> {
        self.try_list_all().await.or_empty("論文一覧の取得")
    }

    /// IDを指定して論文を取得する
    pub async fn try_get_by_id(&self, id: i64) -> StoreResult<Article> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, busqueda_id, titulo, autores, anio_publicacion,
                   fuente, doi, resumen, palabras_clave, cita_apa
            FROM articulos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("論文の取得", e))?
        .ok_or_else(|| StoreError::not_found("articulo", id))
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Article> {
        self.try_get_by_id(id).await.found("論文の取得")
    }

    /// 指定した検索に属する論文をID昇順で取得する
    pub async fn try_list_by_search(&self, search_id: i64) -> StoreResult<Vec<Article>> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, busqueda_id, titulo, autores, anio_publicacion,
                   fuente, doi, resumen, palabras_clave, cita_apa
            FROM articulos
            WHERE busqueda_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(search_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("検索別の論文取得", e))
    }

    pub async fn list_by_search(&self, search_id: i64) -> Vec<Article> {
        self.try_list_by_search(search_id)
            .await
            .or_empty("検索別の論文取得")
    }

    /// タイトル・著者・キーワードの部分一致で検索する
    ///
    /// 入力中の`%`と`_`はエスケープせず、LIKEのワイルドカードとして働く。
    pub async fn try_search(&self, keyword: &str) -> StoreResult<Vec<Article>> {
        let pattern = format!("%{}%", keyword);

        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, busqueda_id, titulo, autores, anio_publicacion,
                   fuente, doi, resumen, palabras_clave, cita_apa
            FROM articulos
            WHERE titulo LIKE ?1 OR autores LIKE ?1 OR palabras_clave LIKE ?1
            ORDER BY anio_publicacion DESC, id ASC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("論文のキーワード検索", e))
    }

    pub async fn search(&self, keyword: &str) -> Vec<Article> {
        self.try_search(keyword)
            .await
            .or_empty("論文のキーワード検索")
    }

    /// 論文の総件数
    pub async fn try_count(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articulos")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx("論文件数の取得", e))
    }

    pub async fn count(&self) -> i64 {
        self.try_count().await.or_empty("論文件数の取得")
    }
}
