use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

// 論文エンティティ（articulosテーブルの1行）
// 一括取り込みで作成され、アプリケーションからは読み取り専用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i64,
    /// 論文を取得した検索のID
    #[sqlx(rename = "busqueda_id")]
    pub search_id: i64,
    #[sqlx(rename = "titulo")]
    pub title: String,
    #[sqlx(rename = "autores")]
    pub authors: String,
    #[sqlx(rename = "anio_publicacion")]
    pub publication_year: i32,
    /// 掲載誌・会議名
    #[sqlx(rename = "fuente")]
    pub source: String,
    pub doi: String,
    #[sqlx(rename = "resumen")]
    pub abstract_text: String,
    /// 区切り文字付きのキーワード文字列
    #[sqlx(rename = "palabras_clave")]
    pub keywords: String,
    /// APA形式の引用
    #[sqlx(rename = "cita_apa")]
    pub citation: String,
}

impl Article {
    /// キーワード文字列を`,`または`;`で分割して返す
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split([',', ';'])
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }

    /// DOIが登録されているか
    pub fn has_doi(&self) -> bool {
        !self.doi.trim().is_empty()
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.publication_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            id: 1,
            search_id: 1,
            title: "Deep Learning for Credit Scoring".to_string(),
            authors: "Chen, L.".to_string(),
            publication_year: 2021,
            source: "Journal of Finance".to_string(),
            doi: "10.1000/dl1".to_string(),
            abstract_text: String::new(),
            keywords: "deep learning; credit scoring, , fintech ".to_string(),
            citation: String::new(),
        }
    }

    #[test]
    fn test_keyword_list_splits_and_trims() {
        let article = sample();
        assert_eq!(
            article.keyword_list(),
            vec!["deep learning", "credit scoring", "fintech"]
        );
    }

    #[test]
    fn test_keyword_list_empty() {
        let article = Article {
            keywords: String::new(),
            ..sample()
        };
        assert!(article.keyword_list().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "Deep Learning for Credit Scoring (2021)");
    }

    #[test]
    fn test_has_doi() {
        assert!(sample().has_doi());
        let article = Article {
            doi: "  ".to_string(),
            ..sample()
        };
        assert!(!article.has_doi());
    }
}
