use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// 投資戦略エンティティ（estrategias_inversionテーブルの1行）
// アプリケーション内で作成・更新・削除まで行う唯一のエンティティ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Strategy {
    /// ストアが採番する。未保存のレコードは0
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "descripcion")]
    pub description: String,
    #[sqlx(rename = "tipo_estrategia")]
    pub strategy_type: String,
    /// リスク水準（Bajo / Medio / Alto）。ストアでは強制しない
    #[sqlx(rename = "nivel_riesgo")]
    pub risk_level: String,
    #[sqlx(rename = "tecnologias_utilizadas")]
    pub technologies: String,
    /// 期待リターン（%）
    #[sqlx(rename = "retorno_esperado")]
    pub expected_return: f64,
    /// 関連する論文のID。参照先の存在は検証しない
    #[sqlx(rename = "articulo_relacionado_id")]
    pub article_id: Option<i64>,
    #[sqlx(rename = "fecha_creacion")]
    pub created_at: Option<DateTime<Utc>>,
    #[sqlx(rename = "fecha_actualizacion")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Strategy {
    /// 未保存の戦略を作成（関連論文なし）
    pub fn new<S: Into<String>>(
        name: S,
        description: S,
        strategy_type: S,
        risk_level: S,
        technologies: S,
        expected_return: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            strategy_type: strategy_type.into(),
            risk_level: risk_level.into(),
            technologies: technologies.into(),
            expected_return,
            ..Default::default()
        }
    }

    /// 関連論文を設定する
    pub fn with_article(mut self, article_id: i64) -> Self {
        self.article_id = Some(article_id);
        self
    }

    /// ストアに保存済みか
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    pub fn has_related_article(&self) -> bool {
        self.article_id.is_some()
    }

    /// リスク水準を列挙型として解釈する（既知の値でなければNone）
    pub fn risk(&self) -> Option<RiskLevel> {
        self.risk_level.parse().ok()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Riesgo: {})",
            self.name, self.strategy_type, self.risk_level
        )
    }
}

/// 戦略のリスク水準
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Bajo,
    Medio,
    Alto,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Bajo, RiskLevel::Medio, RiskLevel::Alto];

    /// ストアに保存される表記
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Bajo => "Bajo",
            RiskLevel::Medio => "Medio",
            RiskLevel::Alto => "Alto",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 既知のリスク水準として解釈できない文字列
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("不明なリスク水準です: {value}")]
pub struct ParseRiskLevelError {
    pub value: String,
}

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    /// 前後の空白と大文字小文字を無視して解釈する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseRiskLevelError {
                value: s.to_string(),
            })
    }
}
