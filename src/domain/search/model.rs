use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

// 文献検索エンティティ（busquedasテーブルの1行）
// 一括取り込みで作成され、アプリケーションからは参照と集計のみ行う
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Search {
    pub id: i64,
    #[sqlx(rename = "nombre_estudiante")]
    pub student_name: String,
    /// 検索したデータベース名（Scopusなど）
    #[sqlx(rename = "base_datos")]
    pub database_name: String,
    #[sqlx(rename = "cadena_busqueda")]
    pub query: String,
    /// 検索で得られた文献数
    #[sqlx(rename = "cantidad_documentos")]
    pub document_count: i64,
    #[sqlx(rename = "fecha_busqueda")]
    pub executed_at: DateTime<Utc>,
}

impl fmt::Display for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({} documentos)",
            self.query, self.database_name, self.document_count
        )
    }
}

/// 検索の集計結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SearchStatistics {
    /// 検索の件数
    pub total_searches: i64,
    /// 全検索の文献数の合計（検索が0件なら0）
    pub total_documents: i64,
}

impl SearchStatistics {
    pub fn new(total_searches: i64, total_documents: i64) -> Self {
        Self {
            total_searches,
            total_documents,
        }
    }

    /// `(検索件数, 文献数合計)`の組として返す
    pub fn as_pair(&self) -> (i64, i64) {
        (self.total_searches, self.total_documents)
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "検索{}件、文献合計{}件",
            self.total_searches, self.total_documents
        )
    }
}
