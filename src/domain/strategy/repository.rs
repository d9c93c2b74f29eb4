use super::model::Strategy;
use crate::types::{StoreError, StoreResult, StoreResultExt};
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::info;

const SELECT_STRATEGY: &str = r#"
    SELECT id, nombre, descripcion, tipo_estrategia, nivel_riesgo,
           tecnologias_utilizadas, retorno_esperado, articulo_relacionado_id,
           fecha_creacion, fecha_actualizacion
    FROM estrategias_inversion
"#;

// 戦略一覧の並び順
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrategyOrder {
    /// 作成日時の新しい順（同時刻はIDの大きい順）
    #[default]
    CreatedDesc,
    /// 期待リターンの高い順（同値はID昇順）
    ReturnDesc,
}

// 戦略のフィルター条件を表す構造体
#[derive(Debug, Default, Clone)]
pub struct StrategyQuery {
    /// 名前・種類・説明の部分一致（ワイルドカードはエスケープしない）
    pub term: Option<String>,
    /// リスク水準の完全一致
    pub risk_level: Option<String>,
    pub min_return: Option<f64>,
    pub article_id: Option<i64>,
    pub order: StrategyOrder,
    pub limit: Option<i64>,
}

/// 投資戦略のデータアクセスサービス（作成・取得・更新・削除と絞り込み）
#[derive(Debug, Clone)]
pub struct StrategyRepository {
    pool: SqlitePool,
}

impl StrategyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 戦略を新規作成する。
    /// 採番されたIDと作成・更新日時を呼び出し側のレコードに書き戻す。
    pub async fn try_create(&self, strategy: &mut Strategy) -> StoreResult<i64> {
        let (id, created_at, updated_at) =
            sqlx::query_as::<_, (i64, DateTime<Utc>, DateTime<Utc>)>(
                r#"
                INSERT INTO estrategias_inversion
                    (nombre, descripcion, tipo_estrategia, nivel_riesgo,
                     tecnologias_utilizadas, retorno_esperado, articulo_relacionado_id)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                RETURNING id, fecha_creacion, fecha_actualizacion
                "#,
            )
            .bind(&strategy.name)
            .bind(&strategy.description)
            .bind(&strategy.strategy_type)
            .bind(&strategy.risk_level)
            .bind(&strategy.technologies)
            .bind(strategy.expected_return)
            .bind(strategy.article_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx("戦略の作成", e))?;

        strategy.id = id;
        strategy.created_at = Some(created_at);
        strategy.updated_at = Some(updated_at);
        Ok(id)
    }

    pub async fn create(&self, strategy: &mut Strategy) -> bool {
        match self.try_create(strategy).await {
            Ok(id) => {
                info!(id = id, name = %strategy.name, "戦略を作成しました");
                true
            }
            result => result.succeeded("戦略の作成"),
        }
    }

    /// IDを指定して戦略を取得する
    pub async fn try_get_by_id(&self, id: i64) -> StoreResult<Strategy> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_STRATEGY);
        qb.push(" WHERE id = ").push_bind(id);

        qb.build_query_as::<Strategy>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx("戦略の取得", e))?
            .ok_or_else(|| StoreError::not_found("estrategia", id))
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Strategy> {
        self.try_get_by_id(id).await.found("戦略の取得")
    }

    /// 全戦略を作成日時の新しい順で取得する
    pub async fn try_list_all(&self) -> StoreResult<Vec<Strategy>> {
        self.try_query(&StrategyQuery::default()).await
    }

    pub async fn list_all(&self) -> Vec<Strategy> {
        self.try_list_all().await.or_empty("戦略一覧の取得")
    }

    /// IDが一致する行の全項目を上書きする。
    /// 更新日時はストアが付け直す。該当行がなければNotFound。
    pub async fn try_update(&self, strategy: &Strategy) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE estrategias_inversion SET
                nombre = ?, descripcion = ?, tipo_estrategia = ?,
                nivel_riesgo = ?, tecnologias_utilizadas = ?,
                retorno_esperado = ?, articulo_relacionado_id = ?,
                fecha_actualizacion = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            WHERE id = ?
            "#,
        )
        .bind(&strategy.name)
        .bind(&strategy.description)
        .bind(&strategy.strategy_type)
        .bind(&strategy.risk_level)
        .bind(&strategy.technologies)
        .bind(strategy.expected_return)
        .bind(strategy.article_id)
        .bind(strategy.id)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx("戦略の更新", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("estrategia", strategy.id));
        }
        Ok(())
    }

    pub async fn update(&self, strategy: &Strategy) -> bool {
        let updated = self.try_update(strategy).await.succeeded("戦略の更新");
        if updated {
            info!(id = strategy.id, "戦略を更新しました");
        }
        updated
    }

    /// IDを指定して戦略を削除する。該当行がなければNotFound。
    pub async fn try_delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM estrategias_inversion WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx("戦略の削除", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("estrategia", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> bool {
        let deleted = self.try_delete(id).await.succeeded("戦略の削除");
        if deleted {
            info!(id = id, "戦略を削除しました");
        }
        deleted
    }

    /// 名前・種類・説明の部分一致で検索する（作成日時の新しい順）
    pub async fn try_search(&self, term: &str) -> StoreResult<Vec<Strategy>> {
        let query = StrategyQuery {
            term: Some(term.to_string()),
            ..Default::default()
        };
        self.try_query(&query).await
    }

    pub async fn search(&self, term: &str) -> Vec<Strategy> {
        self.try_search(term).await.or_empty("戦略の検索")
    }

    /// 指定したリスク水準の戦略を期待リターンの高い順で取得する
    pub async fn try_list_by_risk(&self, risk_level: &str) -> StoreResult<Vec<Strategy>> {
        let query = StrategyQuery {
            risk_level: Some(risk_level.to_string()),
            order: StrategyOrder::ReturnDesc,
            ..Default::default()
        };
        self.try_query(&query).await
    }

    pub async fn list_by_risk(&self, risk_level: &str) -> Vec<Strategy> {
        self.try_list_by_risk(risk_level)
            .await
            .or_empty("リスク水準別の戦略取得")
    }

    /// 条件を組み合わせて戦略を取得する
    pub async fn try_query(&self, query: &StrategyQuery) -> StoreResult<Vec<Strategy>> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_STRATEGY);

        let has_cond = query.term.is_some()
            || query.risk_level.is_some()
            || query.min_return.is_some()
            || query.article_id.is_some();

        if has_cond {
            qb.push(" WHERE ");
            let mut separated = qb.separated(" AND ");

            if let Some(ref term) = query.term {
                let pattern = format!("%{}%", term);
                separated
                    .push("(nombre LIKE ")
                    .push_bind_unseparated(pattern.clone())
                    .push_unseparated(" OR tipo_estrategia LIKE ")
                    .push_bind_unseparated(pattern.clone())
                    .push_unseparated(" OR descripcion LIKE ")
                    .push_bind_unseparated(pattern)
                    .push_unseparated(")");
            }
            if let Some(ref risk_level) = query.risk_level {
                separated
                    .push("nivel_riesgo = ")
                    .push_bind_unseparated(risk_level.clone());
            }
            if let Some(min_return) = query.min_return {
                separated
                    .push("retorno_esperado >= ")
                    .push_bind_unseparated(min_return);
            }
            if let Some(article_id) = query.article_id {
                separated
                    .push("articulo_relacionado_id = ")
                    .push_bind_unseparated(article_id);
            }
        }

        match query.order {
            StrategyOrder::CreatedDesc => qb.push(" ORDER BY fecha_creacion DESC, id DESC"),
            StrategyOrder::ReturnDesc => qb.push(" ORDER BY retorno_esperado DESC, id ASC"),
        };
        // limit
        if let Some(limit) = query.limit {
            qb.push(" LIMIT ").push_bind(limit);
        }

        qb.build_query_as::<Strategy>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx("戦略の絞り込み", e))
    }

    pub async fn query(&self, query: &StrategyQuery) -> Vec<Strategy> {
        self.try_query(query).await.or_empty("戦略の絞り込み")
    }

    /// 戦略の総件数
    pub async fn try_count(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM estrategias_inversion")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from_sqlx("戦略件数の取得", e))
    }

    pub async fn count(&self) -> i64 {
        self.try_count().await.or_empty("戦略件数の取得")
    }
}
